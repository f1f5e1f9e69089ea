//! Transport route allocations

use super::parse_choice;
use crate::model::column::Column;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, ValidValues};
use crate::model::mock_data;
use crate::model::record::{amount_string, form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use serde::{Deserialize, Serialize};

status_enum!(AllocationStatus {
    Active => "Active",
    Suspended => "Suspended",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportAllocation {
    pub id: String,
    pub student_name: String,
    pub route: String,
    pub vehicle: String,
    pub pickup_point: String,
    pub monthly_fee: f64,
    pub status: AllocationStatus,
}

impl TableRecord for TransportAllocation {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |t: &Self| CellValue::text(t.id.clone()))
                .width(8)
                .pinned(),
            Column::data("student", "Student", |t: &Self| CellValue::text(t.student_name.clone()))
                .width(20),
            Column::data("route", "Route", |t: &Self| CellValue::text(t.route.clone())).width(12),
            Column::data("vehicle", "Vehicle", |t: &Self| CellValue::text(t.vehicle.clone()))
                .width(10),
            Column::data("pickup", "Pickup Point", |t: &Self| {
                CellValue::text(t.pickup_point.clone())
            })
            .width(18),
            Column::data("fee", "Monthly Fee", |t: &Self| CellValue::Money(t.monthly_fee))
                .width(11),
            Column::data("status", "Status", |t: &Self| CellValue::Status(t.status.label()))
                .width(9),
            Column::actions(),
        ]
    }
}

impl FormRecord for TransportAllocation {
    const SCREEN: ScreenKind = ScreenKind::Transport;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Transport Allocation",
            vec![
                FieldSpec::text("student_name", "Student").required().max_length(60),
                FieldSpec::text("route", "Route").required().max_length(30),
                FieldSpec::text("vehicle", "Vehicle").required().max_length(20),
                FieldSpec::text("pickup_point", "Pickup Point").required().max_length(60),
                FieldSpec::number("monthly_fee", "Monthly Fee")
                    .required()
                    .range(0.0, 100_000.0),
                FieldSpec::choice("status", "Status", AllocationStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            student_name: values.text("student_name"),
            route: values.text("route"),
            vehicle: values.text("vehicle"),
            pickup_point: values.text("pickup_point"),
            monthly_fee: values.number("monthly_fee"),
            status: parse_choice("status", &values.text("status"), AllocationStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("student_name", self.student_name.clone()),
            ("route", self.route.clone()),
            ("vehicle", self.vehicle.clone()),
            ("pickup_point", self.pickup_point.clone()),
            ("monthly_fee", amount_string(self.monthly_fee)),
            ("status", self.status.label().to_string()),
        ])
    }

    fn mock() -> Vec<Self> {
        mock_data::transport()
    }
}
