//! Student admissions

use super::parse_choice;
use crate::model::column::Column;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, Format, ValidValues};
use crate::model::mock_data;
use crate::model::record::{form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum!(AdmissionStatus {
    Pending => "Pending",
    Approved => "Approved",
    Rejected => "Rejected",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    pub id: String,
    pub student_name: String,
    pub guardian_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub class_name: String,
    pub admission_date: NaiveDate,
    pub status: AdmissionStatus,
}

impl TableRecord for Admission {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |a: &Self| CellValue::text(a.id.clone()))
                .width(9)
                .pinned(),
            Column::data("student", "Student", |a: &Self| CellValue::text(a.student_name.clone()))
                .width(20),
            Column::data("guardian", "Guardian", |a: &Self| {
                CellValue::text(a.guardian_name.clone())
            })
            .width(20),
            Column::data("email", "Email", |a: &Self| CellValue::text(a.email.clone())).width(26),
            Column::data("phone", "Phone", |a: &Self| CellValue::text(a.phone.clone())).width(15),
            Column::data("class", "Class", |a: &Self| CellValue::text(a.class_name.clone()))
                .width(7),
            Column::data("admitted", "Admitted", |a: &Self| CellValue::Date(a.admission_date))
                .width(10),
            Column::data("status", "Status", |a: &Self| CellValue::Status(a.status.label()))
                .width(9),
            Column::actions(),
        ]
    }
}

impl FormRecord for Admission {
    const SCREEN: ScreenKind = ScreenKind::Admissions;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Admission",
            vec![
                FieldSpec::text("student_name", "Student Name").required().max_length(60),
                FieldSpec::text("guardian_name", "Guardian Name").required().max_length(60),
                FieldSpec::text("email", "Email").required().format(Format::Email),
                FieldSpec::text("phone", "Phone").format(Format::Phone),
                FieldSpec::text("class_name", "Class").required().max_length(10),
                FieldSpec::date("admission_date", "Admission Date").required(),
                FieldSpec::choice("status", "Status", AdmissionStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            student_name: values.text("student_name"),
            guardian_name: values.text("guardian_name"),
            email: values.text("email"),
            phone: values.text("phone"),
            class_name: values.text("class_name"),
            admission_date: values.date("admission_date").unwrap_or_default(),
            status: parse_choice("status", &values.text("status"), AdmissionStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("student_name", self.student_name.clone()),
            ("guardian_name", self.guardian_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("class_name", self.class_name.clone()),
            ("admission_date", self.admission_date.format("%Y-%m-%d").to_string()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn mock() -> Vec<Self> {
        mock_data::admissions()
    }
}
