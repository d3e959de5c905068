use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;
use unitcost_core::db::{MemoryStore, ProductRepository};
use unitcost_core::model::Material;
use unitcost_core::store::Calculator;

use crate::commands::{collect_materials, display_config, fill_working_list};

#[derive(Serialize)]
pub struct CalcSnapshot {
    pub materials: Vec<Material>,
    pub total: f64,
    pub display: String,
}

/// Compute the total of a material list without touching any saved products.
pub fn calc_command(root: &str, specs: &[String], from: Option<&Path>, json: bool) -> Result<()> {
    let config = display_config(root)?;
    let items = collect_materials(specs, from)?;
    if items.is_empty() {
        return Err(anyhow!("No materials given. Use --material NAME:COST:PCT or --from FILE"));
    }

    let mut calculator = Calculator::open(ProductRepository::new(MemoryStore::new()), false)?;
    fill_working_list(&mut calculator, &items)?;
    let total = calculator.total_cost();

    if json {
        let snapshot = CalcSnapshot {
            materials: calculator.materials().to_vec(),
            total,
            display: config.format_amount(total),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Materials ({}):", calculator.materials().len());
    for m in calculator.materials() {
        println!("  - {}: {} : {}%", m.name, m.unit_cost, m.percentage);
    }
    println!("Total: {}", config.format_amount(total));

    Ok(())
}
