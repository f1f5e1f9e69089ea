//! Exam results with computed percentage and grade

use super::parse_choice;
use crate::model::column::Column;
use crate::model::derived::{grade, percentage};
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, ValidValues};
use crate::model::mock_data;
use crate::model::record::{amount_string, field_error, form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use serde::{Deserialize, Serialize};

status_enum!(ExamKind {
    UnitTest => "Unit Test",
    MidTerm => "Mid Term",
    Final => "Final",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: String,
    pub student_name: String,
    pub class_name: String,
    pub subject: String,
    pub exam: ExamKind,
    pub obtained: f64,
    pub total: f64,
}

impl ExamResult {
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.obtained, self.total)
    }

    pub fn grade(&self) -> Option<&'static str> {
        self.percentage().map(grade)
    }
}

impl TableRecord for ExamResult {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |e: &Self| CellValue::text(e.id.clone()))
                .width(8)
                .pinned(),
            Column::data("student", "Student", |e: &Self| CellValue::text(e.student_name.clone()))
                .width(20),
            Column::data("class", "Class", |e: &Self| CellValue::text(e.class_name.clone()))
                .width(7),
            Column::data("subject", "Subject", |e: &Self| CellValue::text(e.subject.clone())),
            Column::data("exam", "Exam", |e: &Self| CellValue::Status(e.exam.label())).width(9),
            Column::data("obtained", "Obtained", |e: &Self| CellValue::Number(e.obtained))
                .width(8),
            Column::data("total", "Total", |e: &Self| CellValue::Number(e.total)).width(6),
            Column::data("percentage", "Percent", |e: &Self| {
                e.percentage().map_or(CellValue::Empty, CellValue::Percent)
            })
            .width(8),
            Column::data("grade", "Grade", |e: &Self| {
                e.grade().map_or(CellValue::Empty, CellValue::Status)
            })
            .width(5),
            Column::actions(),
        ]
    }
}

impl FormRecord for ExamResult {
    const SCREEN: ScreenKind = ScreenKind::ExamResults;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Exam Result",
            vec![
                FieldSpec::text("student_name", "Student").required().max_length(60),
                FieldSpec::text("class_name", "Class").required().max_length(10),
                FieldSpec::text("subject", "Subject").required().max_length(40),
                FieldSpec::choice("exam", "Exam", ExamKind::LABELS),
                FieldSpec::number("obtained", "Obtained Marks")
                    .required()
                    .range(0.0, 1000.0),
                FieldSpec::number("total", "Total Marks").required().range(1.0, 1000.0),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        let obtained = values.number("obtained");
        let total = values.number("total");
        if obtained > total {
            return Err(field_error(
                "obtained",
                "Obtained Marks cannot exceed Total Marks",
            ));
        }
        Ok(Self {
            id,
            student_name: values.text("student_name"),
            class_name: values.text("class_name"),
            subject: values.text("subject"),
            exam: parse_choice("exam", &values.text("exam"), ExamKind::from_label)?,
            obtained,
            total,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("student_name", self.student_name.clone()),
            ("class_name", self.class_name.clone()),
            ("subject", self.subject.clone()),
            ("exam", self.exam.label().to_string()),
            ("obtained", amount_string(self.obtained)),
            ("total", amount_string(self.total)),
        ])
    }

    fn derived_fields(values: &FormValues) -> Vec<(&'static str, String)> {
        let parse = |key: &str| values.get(key).and_then(|v| v.trim().parse::<f64>().ok());
        match (parse("obtained"), parse("total")) {
            (Some(obtained), Some(total)) => match percentage(obtained, total) {
                Some(p) => vec![
                    ("Percentage", format!("{:.1}%", p)),
                    ("Grade", grade(p).to_string()),
                ],
                None => vec![("Percentage", "-".to_string()), ("Grade", "-".to_string())],
            },
            _ => vec![("Percentage", "-".to_string()), ("Grade", "-".to_string())],
        }
    }

    fn mock() -> Vec<Self> {
        mock_data::exam_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::find_column;

    fn result(obtained: f64, total: f64) -> ExamResult {
        ExamResult {
            id: "EXM-T".to_string(),
            student_name: "Test".to_string(),
            class_name: "7A".to_string(),
            subject: "Math".to_string(),
            exam: ExamKind::Final,
            obtained,
            total,
        }
    }

    #[test]
    fn test_percentage_and_grade_columns() {
        let columns = ExamResult::columns();
        let pct = find_column(&columns, "percentage").unwrap();
        let grade_col = find_column(&columns, "grade").unwrap();

        let r = result(45.0, 50.0);
        assert_eq!(pct.value(&r).display(), "90.0%");
        assert_eq!(grade_col.value(&r).display(), "A+");

        let zero = result(0.0, 0.0);
        assert_eq!(pct.value(&zero), CellValue::Empty);
        assert_eq!(grade_col.value(&zero), CellValue::Empty);
    }

    #[test]
    fn test_obtained_cannot_exceed_total() {
        let schema = ExamResult::form_schema();
        let mut values = result(10.0, 20.0).to_form();
        values.insert("obtained".into(), "30".into());
        let valid = schema.validate(&values).unwrap();
        let errors = ExamResult::from_form("EXM-9".into(), &valid).unwrap_err();
        assert_eq!(errors[0].field, "obtained");
    }

    #[test]
    fn test_total_must_be_positive() {
        let schema = ExamResult::form_schema();
        let mut values = result(0.0, 20.0).to_form();
        values.insert("total".into(), "0".into());
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors[0].field, "total");
    }

    #[test]
    fn test_live_derived_fields() {
        let values = result(36.0, 48.0).to_form();
        assert_eq!(
            ExamResult::derived_fields(&values),
            vec![("Percentage", "75.0%".to_string()), ("Grade", "B".to_string())]
        );

        let mut partial = values.clone();
        partial.insert("total".into(), String::new());
        assert_eq!(ExamResult::derived_fields(&partial)[0].1, "-");
    }
}
