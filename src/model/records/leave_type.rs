//! Leave types offered to staff

use super::parse_choice;
use crate::model::column::Column;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, ValidValues};
use crate::model::mock_data;
use crate::model::record::{form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use serde::{Deserialize, Serialize};

status_enum!(LeaveStatus {
    Active => "Active",
    Inactive => "Inactive",
});

const PAID_CHOICES: &[&str] = &["Yes", "No"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: String,
    pub name: String,
    pub days_per_year: i64,
    pub paid: bool,
    #[serde(default)]
    pub description: String,
    pub status: LeaveStatus,
}

impl TableRecord for LeaveType {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |l: &Self| CellValue::text(l.id.clone()))
                .width(7)
                .pinned(),
            Column::data("name", "Leave Type", |l: &Self| CellValue::text(l.name.clone()))
                .width(18),
            Column::data("days", "Days/Year", |l: &Self| CellValue::Integer(l.days_per_year))
                .width(9),
            Column::data("paid", "Paid", |l: &Self| CellValue::Flag(l.paid)).width(5),
            Column::data("description", "Description", |l: &Self| {
                CellValue::text(l.description.clone())
            })
            .width(30)
            .not_sortable(),
            Column::data("status", "Status", |l: &Self| CellValue::Status(l.status.label()))
                .width(8),
            Column::actions(),
        ]
    }
}

impl FormRecord for LeaveType {
    const SCREEN: ScreenKind = ScreenKind::LeaveTypes;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Leave Type",
            vec![
                FieldSpec::text("name", "Name").required().max_length(40),
                FieldSpec::integer("days_per_year", "Days per Year")
                    .required()
                    .range(0.0, 365.0),
                FieldSpec::choice("paid", "Paid", PAID_CHOICES),
                FieldSpec::text("description", "Description").max_length(120),
                FieldSpec::choice("status", "Status", LeaveStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            name: values.text("name"),
            days_per_year: values.integer("days_per_year"),
            paid: values.text("paid") == "Yes",
            description: values.text("description"),
            status: parse_choice("status", &values.text("status"), LeaveStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("name", self.name.clone()),
            ("days_per_year", self.days_per_year.to_string()),
            ("paid", if self.paid { "Yes" } else { "No" }.to_string()),
            ("description", self.description.clone()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn mock() -> Vec<Self> {
        mock_data::leave_types()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::find_column;

    #[test]
    fn test_paid_flag_round_trip() {
        let schema = LeaveType::form_schema();
        for leave in LeaveType::mock() {
            let valid = schema.validate(&leave.to_form()).unwrap();
            let rebuilt = LeaveType::from_form(leave.id.clone(), &valid).unwrap();
            assert_eq!(rebuilt, leave);
        }
    }

    #[test]
    fn test_paid_column_displays_yes_no() {
        let columns = LeaveType::columns();
        let paid = find_column(&columns, "paid").unwrap();
        let mut leave = LeaveType::mock().remove(0);
        leave.paid = true;
        assert_eq!(paid.value(&leave).display(), "Yes");
        leave.paid = false;
        assert_eq!(paid.value(&leave).display(), "No");
    }
}
