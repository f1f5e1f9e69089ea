//! Library catalogue

use super::parse_choice;
use crate::model::column::Column;
use crate::model::form::{FieldError, FieldSpec, FormSchema, FormValues, Format, ValidValues};
use crate::model::mock_data;
use crate::model::record::{form_values, FormRecord, TableRecord};
use crate::model::ui::ScreenKind;
use crate::model::value::CellValue;
use serde::{Deserialize, Serialize};

status_enum!(AssetStatus {
    Available => "Available",
    Issued => "Issued",
    Lost => "Lost",
});

const CATEGORIES: &[&str] = &["Fiction", "Science", "History", "Reference", "Mathematics"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryAsset {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub copies: i64,
    pub status: AssetStatus,
}

impl TableRecord for LibraryAsset {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |a: &Self| CellValue::text(a.id.clone()))
                .width(8)
                .pinned(),
            Column::data("title", "Title", |a: &Self| CellValue::text(a.title.clone())).width(28),
            Column::data("author", "Author", |a: &Self| CellValue::text(a.author.clone()))
                .width(20),
            Column::data("isbn", "ISBN", |a: &Self| CellValue::text(a.isbn.clone())).width(17),
            Column::data("category", "Category", |a: &Self| CellValue::text(a.category.clone()))
                .width(12),
            Column::data("copies", "Copies", |a: &Self| CellValue::Integer(a.copies)).width(6),
            Column::data("status", "Status", |a: &Self| CellValue::Status(a.status.label()))
                .width(9),
            Column::actions(),
        ]
    }
}

impl FormRecord for LibraryAsset {
    const SCREEN: ScreenKind = ScreenKind::Library;

    fn form_schema() -> FormSchema {
        FormSchema::new(
            "Library Asset",
            vec![
                FieldSpec::text("title", "Title").required().max_length(120),
                FieldSpec::text("author", "Author").required().max_length(60),
                FieldSpec::text("isbn", "ISBN").required().format(Format::Isbn),
                FieldSpec::choice("category", "Category", CATEGORIES),
                FieldSpec::integer("copies", "Copies").required().range(0.0, 999.0),
                FieldSpec::choice("status", "Status", AssetStatus::LABELS),
            ],
        )
    }

    fn from_form(id: String, values: &ValidValues) -> Result<Self, Vec<FieldError>> {
        Ok(Self {
            id,
            title: values.text("title"),
            author: values.text("author"),
            isbn: values.text("isbn"),
            category: values.text("category"),
            copies: values.integer("copies"),
            status: parse_choice("status", &values.text("status"), AssetStatus::from_label)?,
        })
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("title", self.title.clone()),
            ("author", self.author.clone()),
            ("isbn", self.isbn.clone()),
            ("category", self.category.clone()),
            ("copies", self.copies.to_string()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn mock() -> Vec<Self> {
        mock_data::library_assets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_format() {
        let schema = LibraryAsset::form_schema();
        let mut values = LibraryAsset::mock().remove(0).to_form();
        assert!(schema.validate(&values).is_ok());

        values.insert("isbn".into(), "not-an-isbn".into());
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors[0].message, "ISBN must be a valid ISBN");
    }

    #[test]
    fn test_mock_categories_are_known() {
        for asset in LibraryAsset::mock() {
            assert!(CATEGORIES.contains(&asset.category.as_str()), "{}", asset.category);
        }
    }
}
