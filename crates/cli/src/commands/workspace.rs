use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use unitcost_core::db::{write_workspace_config, SqliteStore, WorkspaceConfig, WorkspaceLayout};

use crate::commands::{open_context, print_path_status};
use crate::{canonicalize_or_current, infer_workspace_name};

#[derive(Serialize)]
pub struct WorkspaceInfoSnapshot {
    pub name: String,
    pub version: String,
    pub root: String,
    pub config_file: String,
    pub config_version: String,
    pub store_path: String,
    pub store_key: String,
    pub currency: String,
    pub decimals: usize,
    pub strict_load: bool,
    pub product_count: usize,
}

/// Initialize a new workspace at `root`.
pub fn init_workspace_command(
    root: &str,
    name: Option<String>,
    currency: Option<String>,
) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = WorkspaceLayout::new(&root_path);

    // Derive workspace name if not provided.
    let workspace_name = match name {
        Some(n) => n,
        None => infer_workspace_name(&root_path),
    };

    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;

    let mut config = WorkspaceConfig::new(&workspace_name, layout.store_path_relative_string());
    if let Some(currency) = currency {
        config.currency = currency;
    }
    write_workspace_config(&layout, &config)?;

    // Create the store immediately so follow-on commands can rely on its presence.
    SqliteStore::open(&layout.store_path).with_context(|| {
        format!("Failed to initialize product store at {}", layout.store_path.display())
    })?;

    println!("Initialized unitcost workspace:");
    println!("  Name: {}", workspace_name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!("  Store path (relative): {}", config.store.path);
    println!("  Currency: {}", config.currency);

    Ok(())
}

/// Show basic information about an existing workspace.
pub fn workspace_info_command(root: &str, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let config = &ctx.config;
    let product_count = ctx.calculator.products().len();

    if json {
        let snapshot = WorkspaceInfoSnapshot {
            name: config.name.clone(),
            version: unitcost_core::version().to_string(),
            root: ctx.layout.root.display().to_string(),
            config_file: ctx.layout.config_path.display().to_string(),
            config_version: config.config_version.clone(),
            store_path: ctx.store_path.display().to_string(),
            store_key: config.store.key.clone(),
            currency: config.currency.clone(),
            decimals: config.decimals,
            strict_load: config.strict_load,
            product_count,
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("unitcost Workspace Info");
    println!("=======================");
    println!("Name: {}", config.name);
    println!("Root: {}", ctx.layout.root.display());
    println!("Config file: {}", ctx.layout.config_path.display());
    println!("Config version: {}", config.config_version);
    println!("Store path (config): {}", config.store.path);
    println!("Store key: {}", config.store.key);
    println!("Currency: {} ({} decimals)", config.currency, config.decimals);
    if config.strict_load {
        println!("Strict load: on");
    }
    println!();
    println!("Paths:");
    print_path_status("Meta dir (.unitcost)", &ctx.layout.meta_dir);
    print_path_status("Store", &ctx.store_path);
    println!();
    println!("Saved products: {}", product_count);

    Ok(())
}
