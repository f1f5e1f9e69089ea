//! Minimal record used by the table tests

use super::column::Column;
use super::record::TableRecord;
use super::value::CellValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl TableRecord for Person {
    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::select(),
            Column::data("id", "ID", |p: &Person| CellValue::text(p.id.clone()))
                .not_filterable()
                .pinned(),
            Column::data("name", "Name", |p: &Person| CellValue::text(p.name.clone())),
            Column::data("age", "Age", |p: &Person| CellValue::Integer(p.age)),
            Column::actions(),
        ]
    }
}

pub fn person(id: &str, name: &str, age: i64) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        age,
    }
}

/// `n` people with ids `p-1..=p-n` and distinct names and ages
pub fn people(n: usize) -> Vec<Person> {
    (1..=n)
        .map(|i| person(&format!("p-{}", i), &format!("Person {:02}", i), 20 + i as i64))
        .collect()
}
