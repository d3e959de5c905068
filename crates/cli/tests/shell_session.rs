use std::io::Cursor;

use unitcost::commands::{execute_line, run_shell, ShellFlow};
use unitcost_core::db::{MemoryStore, ProductRepository, WorkspaceConfig};
use unitcost_core::store::Calculator;

fn calculator() -> Calculator<MemoryStore> {
    Calculator::open(ProductRepository::new(MemoryStore::new()), false).unwrap()
}

fn run(calc: &mut Calculator<MemoryStore>, script: &str) -> String {
    let mut out = Vec::new();
    run_shell(calc, &WorkspaceConfig::default(), Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_builds_and_saves_a_product() {
    let mut calc = calculator();
    let out = run(&mut calc, "add Wood 100 50\nadd Hot glue 20 10\nmaterials\nname Chair\nsave\n");

    assert!(out.contains("Total: 52.00 ETB"), "output: {out}");
    assert!(out.contains("Product name: Chair"));
    assert!(out.contains("Chair: 52.00 ETB"));
    assert!(calc.materials().is_empty());
    assert_eq!(calc.products().len(), 1);
    assert_eq!(calc.products()[0].materials[1].name, "Hot glue");
    assert_eq!(calc.repository().store().writes(), 1);
}

#[test]
fn rejected_entries_are_reported_and_ignored() {
    let mut calc = calculator();
    let out = run(&mut calc, "add Wood 100\nadd Wood abc 50\nsave Chair\n");
    assert!(out.contains("Not added: percentage is required"), "output: {out}");
    assert!(out.contains("Not added: unit cost must be a number"), "output: {out}");
    assert!(out.contains("Not saved: add at least one material"), "output: {out}");
    assert!(calc.materials().is_empty());
    assert!(calc.products().is_empty());
    assert_eq!(calc.repository().store().writes(), 0);
}

#[test]
fn rm_by_prefix_and_unknown_id() {
    let mut calc = calculator();
    let config = WorkspaceConfig::default();
    let mut out = Vec::new();
    execute_line(&mut calc, &config, "add A 1 10", &mut out).unwrap();
    execute_line(&mut calc, &config, "add B 2 20", &mut out).unwrap();
    let first = calc.materials()[0].id.clone();

    execute_line(&mut calc, &config, "rm zzzz-not-an-id", &mut out).unwrap();
    assert_eq!(calc.materials().len(), 2);

    execute_line(&mut calc, &config, &format!("rm {}", &first[..8]), &mut out).unwrap();
    assert_eq!(calc.materials().len(), 1);
    assert_eq!(calc.materials()[0].name, "B");
}

#[test]
fn delete_saved_product_from_the_shell() {
    let mut calc = calculator();
    run(&mut calc, "add Wood 100 50\nsave Chair\n");
    let id = calc.products()[0].id.clone();

    let out = run(&mut calc, &format!("show {id}\ndelete {id}\nproducts\n"));
    assert!(out.contains("  - Wood: 100 : 50%"), "output: {out}");
    assert!(out.contains("Deleted Chair"));
    assert!(out.contains("Products (0):"));
    assert!(calc.products().is_empty());
    assert_eq!(calc.repository().store().writes(), 2);
}

#[test]
fn quit_stops_reading_and_unknown_commands_continue() {
    let mut calc = calculator();
    let config = WorkspaceConfig::default();
    let mut out = Vec::new();
    let flow = execute_line(&mut calc, &config, "frobnicate", &mut out).unwrap();
    assert_eq!(flow, ShellFlow::Continue);
    assert_eq!(execute_line(&mut calc, &config, "quit", &mut out).unwrap(), ShellFlow::Quit);
    assert!(String::from_utf8(out).unwrap().contains("Unknown command 'frobnicate'"));

    let out = run(&mut calc, "quit\nadd Wood 1 1\n");
    assert!(!out.contains("Added"));
    assert!(calc.materials().is_empty());
}
