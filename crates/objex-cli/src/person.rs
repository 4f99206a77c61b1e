//! Sample domain object for the demo and export commands
//!
//! The `Person` fixture carries the shapes the converter has to handle:
//! scalar fields, a list field, a nested map field, and a derived accessor.

use objex_core::{AttrResult, Describe, RawValue};

/// Sample exportable entity
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub profession: String,
    pub skills: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl Person {
    /// Create a person with no skills or attributes
    pub fn new(name: &str, age: i64, profession: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            profession: profession.to_string(),
            skills: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Append a skill
    pub fn add_skill(&mut self, skill: &str) {
        self.skills.push(skill.to_string());
    }

    /// Append a free-form attribute
    pub fn add_attribute(&mut self, key: &str, value: &str) {
        self.attributes.push((key.to_string(), value.to_string()));
    }

    fn full_name(&self) -> String {
        format!("Mr./Ms. {}", self.name)
    }
}

impl Describe for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn fields(&self) -> Vec<(String, AttrResult)> {
        vec![
            ("name".to_string(), Ok(RawValue::from(self.name.as_str()))),
            ("age".to_string(), Ok(RawValue::from(self.age))),
            (
                "profession".to_string(),
                Ok(RawValue::from(self.profession.as_str())),
            ),
            (
                "skills".to_string(),
                Ok(RawValue::List(
                    self.skills.iter().map(|s| RawValue::from(s.as_str())).collect(),
                )),
            ),
            (
                "attributes".to_string(),
                Ok(RawValue::Map(
                    self.attributes
                        .iter()
                        .map(|(k, v)| (k.clone(), RawValue::from(v.as_str())))
                        .collect(),
                )),
            ),
        ]
    }

    fn accessors(&self) -> Vec<(String, AttrResult)> {
        vec![("getFullName".to_string(), Ok(RawValue::from(self.full_name())))]
    }
}
