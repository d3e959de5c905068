use std::path::Path;

use anyhow::{anyhow, Context, Result};
use unitcost_core::model::Product;

use crate::commands::{collect_materials, fill_working_list, open_context, resolve_id};
use crate::short_id;

/// Build a working list from the given materials and save it as a product.
pub fn save_product_command(
    root: &str,
    name: &str,
    specs: &[String],
    from: Option<&Path>,
) -> Result<()> {
    let mut ctx = open_context(root)?;
    let items = collect_materials(specs, from)?;
    fill_working_list(&mut ctx.calculator, &items)?;

    let product = ctx.calculator.save_product(name).context("Product not saved")?.clone();

    println!("Saved product:");
    println!("  Id: {}", product.id);
    println!("  Name: {}", product.name);
    println!("  Cost: {}", ctx.format_amount(product.cost));
    println!("  Materials: {}", product.materials.len());
    println!("  Store: {}", ctx.store_path.display());

    Ok(())
}

/// List all saved products.
pub fn list_products_command(root: &str, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let products = ctx.calculator.products();

    if json {
        let serialized = serde_json::to_string_pretty(products)
            .context("Failed to serialize products to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Products ({}):", products.len());
    if products.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for product in products {
        println!(
            "  - {} {}: {}",
            short_id(&product.id),
            product.name,
            ctx.format_amount(product.cost)
        );
    }

    Ok(())
}

/// Show one saved product and the materials it was computed from.
pub fn show_product_command(root: &str, id: &str, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let id = resolve_id("product", id, ctx.calculator.products().iter().map(|p| p.id.as_str()))?;
    let product = ctx
        .calculator
        .product(&id)
        .ok_or_else(|| anyhow!("No saved product with id '{id}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(product)?);
        return Ok(());
    }

    print_product(product, &ctx.format_amount(product.cost));
    Ok(())
}

/// Delete a saved product.
pub fn delete_product_command(root: &str, id: &str) -> Result<()> {
    let mut ctx = open_context(root)?;
    let id = resolve_id("product", id, ctx.calculator.products().iter().map(|p| p.id.as_str()))?;
    let removed = ctx
        .calculator
        .delete_product(&id)
        .ok_or_else(|| anyhow!("No saved product with id '{id}'"))?;

    println!("Deleted product:");
    println!("  Id: {}", removed.id);
    println!("  Name: {}", removed.name);
    println!("  Remaining: {}", ctx.calculator.products().len());

    Ok(())
}

fn print_product(product: &Product, cost: &str) {
    println!("Product: {}", product.name);
    println!("  Id: {}", product.id);
    println!("  Cost: {}", cost);
    println!("  Materials ({}):", product.materials.len());
    for m in &product.materials {
        println!("    - {}: {} : {}%", m.name, m.unit_cost, m.percentage);
    }
}
