use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;
use unitcost_core::db::{KeyValueStore, WorkspaceConfig};
use unitcost_core::store::{Calculator, MaterialForm};

use crate::commands::{open_context, resolve_id};
use crate::short_id;

const HELP: &str = "\
Commands:
  add NAME COST PCT   add a material to the working list
  rm ID               remove a material (id or unique prefix)
  materials           show the working list and its total
  total               show the working list total
  name TEXT           set the product name used by 'save'
  save [NAME]         save the working list as a product
  products            list saved products
  show ID             show a saved product
  delete ID           delete a saved product
  help                show this help
  quit                leave the shell";

/// Outcome of one shell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

/// Run the interactive shell against the workspace at `root` on stdin/stdout.
pub fn shell_command(root: &str) -> Result<()> {
    let mut ctx = open_context(root)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "unitcost shell: {} ({} saved products). Type 'help' for commands.",
        ctx.config.name,
        ctx.calculator.products().len()
    )?;
    run_shell(&mut ctx.calculator, &ctx.config, stdin.lock(), &mut stdout)
}

/// Read commands from `input` until `quit` or end of input.
///
/// Rejected entries are reported on `out` and leave the calculator unchanged.
pub fn run_shell<S, R, W>(
    calculator: &mut Calculator<S>,
    config: &WorkspaceConfig,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        if execute_line(calculator, config, &line, out)? == ShellFlow::Quit {
            return Ok(());
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Execute a single shell line.
pub fn execute_line<S: KeyValueStore, W: Write>(
    calculator: &mut Calculator<S>,
    config: &WorkspaceConfig,
    line: &str,
    out: &mut W,
) -> Result<ShellFlow> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    debug!(command, "shell command");

    match command {
        "" => {}
        "add" => {
            fill_form(calculator, rest);
            match calculator.submit_material() {
                Ok(m) => writeln!(
                    out,
                    "Added {} {}: {} : {}%",
                    short_id(&m.id),
                    m.name,
                    m.unit_cost,
                    m.percentage
                )?,
                Err(err) => writeln!(out, "Not added: {err}")?,
            }
        }
        "rm" => {
            let ids = calculator.materials().iter().map(|m| m.id.as_str());
            match resolve_id("material", rest, ids) {
                Ok(id) => {
                    if let Some(m) = calculator.delete_material(&id) {
                        writeln!(out, "Removed {}", m.name)?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        "materials" | "ls" => {
            if calculator.materials().is_empty() {
                writeln!(out, "Working list is empty.")?;
            }
            for m in calculator.materials() {
                writeln!(
                    out,
                    "  {} {}: {} : {}%",
                    short_id(&m.id),
                    m.name,
                    m.unit_cost,
                    m.percentage
                )?;
            }
            writeln!(out, "Total: {}", config.format_amount(calculator.total_cost()))?;
        }
        "total" => {
            writeln!(out, "Total: {}", config.format_amount(calculator.total_cost()))?;
        }
        "name" => {
            calculator.set_product_name(rest);
            writeln!(out, "Product name: {}", calculator.product_name())?;
        }
        "save" => {
            if !rest.is_empty() {
                calculator.set_product_name(rest);
            }
            match calculator.submit_product() {
                Ok(p) => writeln!(
                    out,
                    "Saved {} {}: {}",
                    short_id(&p.id),
                    p.name,
                    config.format_amount(p.cost)
                )?,
                Err(err) => writeln!(out, "Not saved: {err}")?,
            }
        }
        "products" => {
            writeln!(out, "Products ({}):", calculator.products().len())?;
            for p in calculator.products() {
                let cost = config.format_amount(p.cost);
                writeln!(out, "  {} {}: {}", short_id(&p.id), p.name, cost)?;
            }
        }
        "show" => {
            let ids = calculator.products().iter().map(|p| p.id.as_str());
            match resolve_id("product", rest, ids) {
                Ok(id) => {
                    if let Some(p) = calculator.product(&id) {
                        writeln!(out, "{}: {}", p.name, config.format_amount(p.cost))?;
                        for m in &p.materials {
                            writeln!(out, "  - {}: {} : {}%", m.name, m.unit_cost, m.percentage)?;
                        }
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        "delete" => {
            let ids = calculator.products().iter().map(|p| p.id.as_str());
            match resolve_id("product", rest, ids) {
                Ok(id) => {
                    if let Some(p) = calculator.delete_product(&id) {
                        writeln!(out, "Deleted {}", p.name)?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        "help" | "?" => writeln!(out, "{HELP}")?,
        "quit" | "exit" => return Ok(ShellFlow::Quit),
        other => writeln!(out, "Unknown command '{other}'. Type 'help' for commands.")?,
    }

    Ok(ShellFlow::Continue)
}

/// Fill the material form from `NAME... COST PCT`.
///
/// The last two words are the numbers and everything before them is the name,
/// so names may contain spaces. Missing parts are left empty and the submit
/// reports them.
fn fill_form<S: KeyValueStore>(calculator: &mut Calculator<S>, args: &str) {
    let words: Vec<&str> = args.split_whitespace().collect();
    let (name, unit_cost, percentage) = match words.as_slice() {
        [] => (String::new(), "", ""),
        [name] => (name.to_string(), "", ""),
        [name, unit_cost] => (name.to_string(), *unit_cost, ""),
        [name @ .., unit_cost, percentage] => (name.join(" "), *unit_cost, *percentage),
    };
    *calculator.material_form_mut() = MaterialForm::new(name, unit_cost, percentage);
}
