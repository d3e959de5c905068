//! Entry-boundary parsing for user supplied text.
//!
//! Every field is trimmed first. Empty text is a missing field; text that
//! does not parse to a finite number is rejected instead of flowing into a
//! total as NaN.

use thiserror::Error;

/// Reasons an add or save request is not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// A required field was empty or whitespace only.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A numeric field did not parse to a finite number.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// The line, or the working list with it, no longer has a finite cost.
    #[error("cost of '{0}' is too large to compute")]
    CostOverflow(String),

    /// Saving needs at least one material in the working list.
    #[error("add at least one material before saving")]
    EmptyWorkingList,

    /// A `NAME:COST:PCT` argument was not in that shape.
    #[error("expected NAME:COST:PCT, got '{0}'")]
    MalformedSpec(String),
}

/// Trim `text` and require it to be non-empty.
pub fn require_text<'a>(field: &'static str, text: &'a str) -> Result<&'a str, EntryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EntryError::MissingField(field));
    }
    Ok(trimmed)
}

/// Parse a numeric field, rejecting empty, unparseable and non-finite input.
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64, EntryError> {
    let trimmed = require_text(field, text)?;
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EntryError::InvalidNumber { field, value: trimmed.to_string() }),
    }
}

/// Raw text of one material line, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialText {
    pub name: String,
    pub unit_cost: String,
    pub percentage: String,
}

impl MaterialText {
    pub fn new(
        name: impl Into<String>,
        unit_cost: impl Into<String>,
        percentage: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), unit_cost: unit_cost.into(), percentage: percentage.into() }
    }
}

/// Split a `NAME:COST:PCT` argument.
///
/// Splits from the right so the name itself may contain `:`. The pieces are
/// returned as text; numeric validation happens when the material is added.
pub fn parse_material_spec(spec: &str) -> Result<MaterialText, EntryError> {
    let mut parts = spec.rsplitn(3, ':');
    let percentage = parts.next();
    let unit_cost = parts.next();
    let name = parts.next();
    match (name, unit_cost, percentage) {
        (Some(name), Some(unit_cost), Some(percentage)) => {
            Ok(MaterialText::new(name, unit_cost, percentage))
        }
        _ => Err(EntryError::MalformedSpec(spec.to_string())),
    }
}
