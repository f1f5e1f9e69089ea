//! Staff members and payroll

use super::parse_choice;
use crate::model::column::Column;
use crate::model::derived::net_salary;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, Format, ValidValues};
use crate::model::mock_data;
use crate::model::record::{amount_string, form_values, parse_or_zero, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum!(StaffStatus {
    Active => "Active",
    OnLeave => "On Leave",
    Inactive => "Inactive",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub salary: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deductions: f64,
    pub joined: NaiveDate,
    pub status: StaffStatus,
}

impl StaffMember {
    pub fn net_salary(&self) -> f64 {
        net_salary(self.salary, self.bonus, self.deductions)
    }
}

impl TableRecord for StaffMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |s: &Self| CellValue::text(s.id.clone()))
                .width(9)
                .pinned(),
            Column::data("name", "Name", |s: &Self| CellValue::text(s.name.clone())).width(20),
            Column::data("role", "Role", |s: &Self| CellValue::text(s.role.clone())),
            Column::data("email", "Email", |s: &Self| CellValue::text(s.email.clone())).width(26),
            Column::data("salary", "Salary", |s: &Self| CellValue::Money(s.salary)).width(10),
            Column::data("bonus", "Bonus", |s: &Self| CellValue::Money(s.bonus)).width(9),
            Column::data("deductions", "Deductions", |s: &Self| CellValue::Money(s.deductions))
                .width(10),
            Column::data("net_salary", "Net Salary", |s: &Self| CellValue::Money(s.net_salary()))
                .width(10),
            Column::data("joined", "Joined", |s: &Self| CellValue::Date(s.joined)).width(10),
            Column::data("status", "Status", |s: &Self| CellValue::Status(s.status.label()))
                .width(9),
            Column::actions(),
        ]
    }
}

impl FormRecord for StaffMember {
    const SCREEN: ScreenKind = ScreenKind::Staff;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Staff Member",
            vec![
                FieldSpec::text("name", "Name").required().max_length(60),
                FieldSpec::text("role", "Role").required().max_length(40),
                FieldSpec::text("email", "Email").required().format(Format::Email),
                FieldSpec::number("salary", "Salary").required().range(0.0, 1_000_000.0),
                FieldSpec::number("bonus", "Bonus").range(0.0, 1_000_000.0),
                FieldSpec::number("deductions", "Deductions").range(0.0, 1_000_000.0),
                FieldSpec::date("joined", "Joined").required(),
                FieldSpec::choice("status", "Status", StaffStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            name: values.text("name"),
            role: values.text("role"),
            email: values.text("email"),
            salary: values.number("salary"),
            bonus: values.number("bonus"),
            deductions: values.number("deductions"),
            joined: values.date("joined").unwrap_or_default(),
            status: parse_choice("status", &values.text("status"), StaffStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("name", self.name.clone()),
            ("role", self.role.clone()),
            ("email", self.email.clone()),
            ("salary", amount_string(self.salary)),
            ("bonus", amount_string(self.bonus)),
            ("deductions", amount_string(self.deductions)),
            ("joined", self.joined.format("%Y-%m-%d").to_string()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn derived_fields(values: &FormValues) -> Vec<(&'static str, String)> {
        let net = net_salary(
            parse_or_zero(values, "salary"),
            parse_or_zero(values, "bonus"),
            parse_or_zero(values, "deductions"),
        );
        vec![("Net Salary", format!("{:.2}", net))]
    }

    fn mock() -> Vec<Self> {
        mock_data::staff()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::find_column;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_net_salary_column() {
        let staff = StaffMember::mock();
        let first = &staff[0];
        assert_eq!((first.salary, first.bonus, first.deductions), (2574.0, 200.0, 100.0));

        let columns = StaffMember::columns();
        let net = find_column(&columns, "net_salary").unwrap();
        assert_eq!(net.value(first), CellValue::Money(2674.0));
        assert_eq!(net.value(first).display(), "2674.00");
    }

    #[test]
    fn test_live_derived_net_salary() {
        let derived = StaffMember::derived_fields(&values(&[
            ("salary", "2574"),
            ("bonus", "200"),
            ("deductions", "1"),
        ]));
        assert_eq!(derived, vec![("Net Salary", "2773.00".to_string())]);

        // Half-typed values count as zero
        let derived = StaffMember::derived_fields(&values(&[("salary", "12."), ("bonus", "x")]));
        assert_eq!(derived[0].1, "12.00");
    }

    #[test]
    fn test_form_round_trip() {
        let original = StaffMember::mock().remove(3);
        let schema = StaffMember::form_schema();
        let valid = schema.validate(&original.to_form()).unwrap();
        let rebuilt = StaffMember::from_form(original.id.clone(), &valid).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_validation_messages() {
        let schema = StaffMember::form_schema();
        let mut form = schema.blank_values();
        form.insert("name".into(), "Grace Hopper".into());
        form.insert("role".into(), "Teacher".into());
        form.insert("email".into(), "grace@".into());
        form.insert("salary".into(), "abc".into());
        form.insert("joined".into(), "2024-02-30".into());

        let errors = schema.validate(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "salary", "joined"]);
    }
}
