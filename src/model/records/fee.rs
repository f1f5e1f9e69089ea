//! Fee entries per student

use super::parse_choice;
use crate::model::column::Column;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, ValidValues};
use crate::model::mock_data;
use crate::model::record::{amount_string, form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum!(FeeType {
    Tuition => "Tuition",
    Transport => "Transport",
    Library => "Library",
    Exam => "Exam",
    Activity => "Activity",
});

status_enum!(FeeStatus {
    Pending => "Pending",
    Paid => "Paid",
    Overdue => "Overdue",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEntry {
    pub id: String,
    pub student_name: String,
    pub fee_type: FeeType,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
}

impl TableRecord for FeeEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |f: &Self| CellValue::text(f.id.clone()))
                .width(9)
                .pinned(),
            Column::data("student", "Student", |f: &Self| CellValue::text(f.student_name.clone()))
                .width(20),
            Column::data("fee_type", "Type", |f: &Self| CellValue::Status(f.fee_type.label()))
                .width(10),
            Column::data("amount", "Amount", |f: &Self| CellValue::Money(f.amount)).width(10),
            Column::data("due", "Due Date", |f: &Self| CellValue::Date(f.due_date)).width(10),
            Column::data("status", "Status", |f: &Self| CellValue::Status(f.status.label()))
                .width(8),
            Column::actions(),
        ]
    }
}

impl FormRecord for FeeEntry {
    const SCREEN: ScreenKind = ScreenKind::Fees;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Fee Entry",
            vec![
                FieldSpec::text("student_name", "Student").required().max_length(60),
                FieldSpec::choice("fee_type", "Fee Type", FeeType::LABELS),
                FieldSpec::number("amount", "Amount").required().range(0.01, 1_000_000.0),
                FieldSpec::date("due_date", "Due Date").required(),
                FieldSpec::choice("status", "Status", FeeStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            student_name: values.text("student_name"),
            fee_type: parse_choice("fee_type", &values.text("fee_type"), FeeType::from_label)?,
            amount: values.number("amount"),
            due_date: values.date("due_date").unwrap_or_default(),
            status: parse_choice("status", &values.text("status"), FeeStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("student_name", self.student_name.clone()),
            ("fee_type", self.fee_type.label().to_string()),
            ("amount", amount_string(self.amount)),
            ("due_date", self.due_date.format("%Y-%m-%d").to_string()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn mock() -> Vec<Self> {
        mock_data::fees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_rejected() {
        let schema = FeeEntry::form_schema();
        let mut values = FeeEntry::mock().remove(0).to_form();
        values.insert("amount".into(), "0".into());
        assert_eq!(schema.validate(&values).unwrap_err()[0].field, "amount");
    }

    #[test]
    fn test_round_trip_keeps_enums() {
        let fee = FeeEntry::mock().remove(2);
        let valid = FeeEntry::form_schema().validate(&fee.to_form()).unwrap();
        let rebuilt = FeeEntry::from_form(fee.id.clone(), &valid).unwrap();
        assert_eq!(rebuilt, fee);
    }
}
