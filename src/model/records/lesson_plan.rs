//! Lesson plans submitted by teachers

use super::parse_choice;
use crate::model::column::Column;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, ValidValues};
use crate::model::mock_data;
use crate::model::record::{form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum!(PlanStatus {
    Draft => "Draft",
    Submitted => "Submitted",
    Approved => "Approved",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub id: String,
    pub subject: String,
    pub class_name: String,
    pub teacher: String,
    pub topic: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub status: PlanStatus,
}

impl TableRecord for LessonPlan {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |p: &Self| CellValue::text(p.id.clone()))
                .width(8)
                .pinned(),
            Column::data("subject", "Subject", |p: &Self| CellValue::text(p.subject.clone())),
            Column::data("class", "Class", |p: &Self| CellValue::text(p.class_name.clone()))
                .width(8),
            Column::data("teacher", "Teacher", |p: &Self| CellValue::text(p.teacher.clone()))
                .width(18),
            Column::data("topic", "Topic", |p: &Self| CellValue::text(p.topic.clone())).width(28),
            Column::data("date", "Date", |p: &Self| CellValue::Date(p.date)).width(10),
            Column::data("duration", "Minutes", |p: &Self| CellValue::Integer(p.duration_minutes))
                .width(7)
                .not_filterable(),
            Column::data("status", "Status", |p: &Self| CellValue::Status(p.status.label()))
                .width(9),
            Column::actions(),
        ]
    }
}

impl FormRecord for LessonPlan {
    const SCREEN: ScreenKind = ScreenKind::LessonPlans;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Lesson Plan",
            vec![
                FieldSpec::text("subject", "Subject").required().max_length(40),
                FieldSpec::text("class_name", "Class").required().max_length(10),
                FieldSpec::text("teacher", "Teacher").required().max_length(60),
                FieldSpec::text("topic", "Topic").required().max_length(80),
                FieldSpec::date("date", "Date").required(),
                FieldSpec::integer("duration_minutes", "Duration (min)")
                    .required()
                    .range(10.0, 240.0),
                FieldSpec::choice("status", "Status", PlanStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            subject: values.text("subject"),
            class_name: values.text("class_name"),
            teacher: values.text("teacher"),
            topic: values.text("topic"),
            date: values.date("date").unwrap_or_default(),
            duration_minutes: values.integer("duration_minutes"),
            status: parse_choice("status", &values.text("status"), PlanStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("subject", self.subject.clone()),
            ("class_name", self.class_name.clone()),
            ("teacher", self.teacher.clone()),
            ("topic", self.topic.clone()),
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("duration_minutes", self.duration_minutes.to_string()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn mock() -> Vec<Self> {
        mock_data::lesson_plans()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_range() {
        let schema = LessonPlan::form_schema();
        let mut values = LessonPlan::mock().remove(0).to_form();
        values.insert("duration_minutes".into(), "5".into());
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors[0].field, "duration_minutes");

        values.insert("duration_minutes".into(), "45.5".into());
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors[0].message, "Duration (min) must be a whole number");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PlanStatus::from_label("Approved"), Some(PlanStatus::Approved));
        assert_eq!(PlanStatus::from_label("approved"), None);
        assert_eq!(PlanStatus::LABELS.len(), 3);
    }
}
