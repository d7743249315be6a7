use indexmap::IndexMap;

pub use action::Action;

pub mod action;

/// The parsed form of a template file: actions in declaration order plus the
/// raw field mappings they resolve against.
#[derive(Debug, Default)]
pub struct Template {
    pub actions: Vec<Action>,
    pub foreach_fields: IndexMap<String, String>,
    pub fields: IndexMap<String, String>,
}

/// Fully substituted field values, in insertion order. Rebuilt from scratch
/// for every foreach iteration.
#[derive(Default)]
pub struct FieldContext {
    fields: IndexMap<String, String>,
}

impl FieldContext {
    pub fn has(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    pub fn set(&mut self, field_name: &str, value: &str) {
        self.fields
            .insert(field_name.to_string(), value.to_string());
    }

    pub fn get(&self, field_name: &str) -> Option<&String> {
        self.fields.get(field_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.fields.iter()
    }
}
