use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use unitcost_core::db::KeyValueStore;
use unitcost_core::entry::{parse_material_spec, MaterialText};
use unitcost_core::store::Calculator;

/// A numeric field in a material file; numbers may be written bare or quoted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    fn into_text(self) -> String {
        match self {
            AmountField::Number(n) => n.to_string(),
            AmountField::Text(s) => s,
        }
    }
}

/// One entry of a YAML/JSON material file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialFileEntry {
    pub name: String,
    #[serde(alias = "unit_cost")]
    pub unit_cost: AmountField,
    pub percentage: AmountField,
}

impl From<MaterialFileEntry> for MaterialText {
    fn from(entry: MaterialFileEntry) -> Self {
        MaterialText::new(entry.name, entry.unit_cost.into_text(), entry.percentage.into_text())
    }
}

/// Read a material list from a `.yaml`/`.yml` or `.json` file.
pub fn load_material_file(path: &Path) -> Result<Vec<MaterialText>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read material file {}", path.display()))?;
    let entries: Vec<MaterialFileEntry> = match ext.as_str() {
        "json" => serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse material JSON {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse material YAML {}", path.display()))?,
        other => {
            return Err(anyhow!(
                "Unsupported material file extension '{}'. Allowed: yaml, yml, json",
                other
            ))
        }
    };
    Ok(entries.into_iter().map(MaterialText::from).collect())
}

/// Gather materials from an optional file followed by `NAME:COST:PCT` arguments.
pub fn collect_materials(specs: &[String], from: Option<&Path>) -> Result<Vec<MaterialText>> {
    let mut out = match from {
        Some(path) => load_material_file(path)?,
        None => Vec::new(),
    };
    for spec in specs {
        out.push(parse_material_spec(spec)?);
    }
    Ok(out)
}

/// Add every entry to the calculator's working list, stopping at the first rejection.
pub fn fill_working_list<S: KeyValueStore>(
    calculator: &mut Calculator<S>,
    materials: &[MaterialText],
) -> Result<()> {
    for item in materials {
        calculator
            .add_material(&item.name, &item.unit_cost, &item.percentage)
            .with_context(|| format!("Invalid material '{}'", item.name.trim()))?;
    }
    Ok(())
}
