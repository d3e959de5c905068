use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unitcost::commands::{
    calc_command, delete_product_command, init_workspace_command, list_products_command,
    save_product_command, shell_command, show_product_command, workspace_info_command,
};

/// Environment variable holding the log filter (e.g. `debug`, `unitcost_core=trace`).
const LOG_ENV: &str = "UNITCOST_LOG";

/// Unit-cost calculator CLI.
///
/// This CLI is a thin wrapper around `unitcost-core` (exposed in code as `unitcost_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "unitcost",
    version,
    about = "Weighted material cost calculator with saved products",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr (overrides UNITCOST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new workspace at the given root.
    ///
    /// This will:
    /// - Create a `.unitcost` metadata directory.
    /// - Write a `.unitcost/config.json` config file.
    /// - Create the product store.
    Init {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional workspace name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,

        /// Currency label shown next to amounts (default: ETB).
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show basic information about an existing workspace.
    Info {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Compute the cost of a material list without saving anything.
    Calc {
        /// Workspace root, used only for display settings when present.
        #[arg(long, default_value = ".")]
        root: String,

        /// Material as NAME:COST:PCT. Repeat for more lines.
        #[arg(long = "material", short = 'm')]
        materials: Vec<String>,

        /// YAML or JSON file with a list of {name, unitCost, percentage}.
        #[arg(long)]
        from: Option<PathBuf>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Save a material list as a named product.
    Save {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Product name.
        #[arg(long)]
        name: String,

        /// Material as NAME:COST:PCT. Repeat for more lines.
        #[arg(long = "material", short = 'm')]
        materials: Vec<String>,

        /// YAML or JSON file with a list of {name, unitCost, percentage}.
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// List saved products.
    List {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show a saved product and its materials.
    Show {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Product id (or a unique prefix of it).
        #[arg(long)]
        id: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Delete a saved product.
    Delete {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Product id (or a unique prefix of it).
        #[arg(long)]
        id: String,
    },

    /// Interactive calculator reading commands from stdin.
    Shell {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Init { root, name, currency } => init_workspace_command(&root, name, currency)?,
        Command::Info { root, json } => workspace_info_command(&root, json)?,
        Command::Calc { root, materials, from, json } => {
            calc_command(&root, &materials, from.as_deref(), json)?
        }
        Command::Save { root, name, materials, from } => {
            save_product_command(&root, &name, &materials, from.as_deref())?
        }
        Command::List { root, json } => list_products_command(&root, json)?,
        Command::Show { root, id, json } => show_product_command(&root, &id, json)?,
        Command::Delete { root, id } => delete_product_command(&root, &id)?,
        Command::Shell { root } => shell_command(&root)?,
    }

    Ok(())
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
