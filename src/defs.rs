use tabled::Tabled;

/// A single person row, as shown in the report table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct PersonRecord {
    pub name: String,
    pub age: i64,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
