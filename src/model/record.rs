//! Record traits implemented by every record family

use super::column::{Column, ColumnKind};
use super::form::{FieldError, FormSchema, FormValues, ValidValues};
use super::ui::ScreenKind;

/// A row that can be shown in a table view
pub trait TableRecord: Clone {
    /// Stable identifier, unique within a dataset
    fn id(&self) -> &str;

    /// Column descriptor table, synthetic columns included
    fn columns() -> Vec<Column<Self>>;
}

/// A record that can be created and edited through a form
pub trait FormRecord: TableRecord {
    const SCREEN: ScreenKind;

    fn form_schema() -> FormSchema;

    /// Build a record from validated values
    ///
    /// Field-level checks already passed; this is where cross-field rules
    /// (obtained marks not above total, ...) are enforced.
    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>>;

    /// Current values, used to pre-fill the edit form
    fn to_form(&self) -> FormValues;

    /// Read-only values computed from the values being typed
    fn derived_fields(values: &FormValues) -> Vec<(&'static str, String)> {
        let _ = values;
        Vec::new()
    }

    /// Built-in dataset used when no data directory is configured
    fn mock() -> Vec<Self>;
}

/// Label/value pairs of every data column, for the detail dialog
pub fn record_details<R: TableRecord>(record: &R) -> Vec<(String, String)> {
    R::columns()
        .iter()
        .filter(|c| c.kind == ColumnKind::Data)
        .map(|c| {
            let value = c.value(record).display();
            (c.label.to_string(), if value.is_empty() { "-".to_string() } else { value })
        })
        .collect()
}

/// Collect `(key, value)` pairs into form values
pub fn form_values<const N: usize>(pairs: [(&str, String); N]) -> FormValues {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Parse a number the user is still typing; empty or invalid counts as zero
pub fn parse_or_zero(values: &FormValues, key: &str) -> f64 {
    values
        .get(key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Format money without trailing noise for form pre-fill
pub fn amount_string(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Single-error helper for cross-field checks
pub fn field_error(field: &str, message: impl Into<String>) -> Vec<FieldError> {
    vec![FieldError {
        field: field.to_string(),
        message: message.into(),
    }]
}
