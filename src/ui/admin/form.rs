use crate::core::records::CatalogRecord;
use crate::ui::table::row::value_text;
use crate::utils::{PantryError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Map, Number, Value};
use std::marker::PhantomData;

/// Fields the store owns; never edited through the form.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Blank input is stored as null.
    OptionalText,
    Integer,
    Decimal,
    Boolean,
}

impl FieldKind {
    fn of(template: &Value) -> Self {
        match template {
            Value::Null => FieldKind::OptionalText,
            Value::Bool(_) => FieldKind::Boolean,
            Value::Number(n) if n.is_f64() => FieldKind::Decimal,
            Value::Number(_) => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn parse(&self) -> Result<Value> {
        let raw = self.value.trim();
        match self.kind {
            FieldKind::Text => Ok(Value::String(self.value.clone())),
            FieldKind::OptionalText if raw.is_empty() => Ok(Value::Null),
            FieldKind::OptionalText => Ok(Value::String(self.value.clone())),
            FieldKind::Integer => raw.parse::<i64>().map(Value::from).map_err(|_| {
                PantryError::invalid_record(format!("{} must be a whole number", self.label))
            }),
            FieldKind::Decimal => raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| {
                    PantryError::invalid_record(format!("{} must be a number", self.label))
                }),
            FieldKind::Boolean => match raw.to_lowercase().as_str() {
                "true" | "yes" | "y" => Ok(Value::Bool(true)),
                "false" | "no" | "n" => Ok(Value::Bool(false)),
                _ => Err(PantryError::invalid_record(format!(
                    "{} must be true or false",
                    self.label
                ))),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Submit,
    Cancel,
}

/// Add/edit dialog for one record. Field kinds come from the record's
/// default value, field contents from the record being edited.
#[derive(Debug, Clone)]
pub struct UpsertForm<T> {
    pub mode: FormMode,
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
    base: Map<String, Value>,
    _record: PhantomData<T>,
}

fn label_for(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn object_of<T: CatalogRecord>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

impl<T: CatalogRecord> UpsertForm<T> {
    pub fn for_add() -> Self {
        Self::build(FormMode::Add, &T::default())
    }

    pub fn for_edit(record: &T) -> Self {
        let mode = match record.id() {
            Some(id) => FormMode::Edit { id: id.to_string() },
            None => FormMode::Add,
        };
        Self::build(mode, record)
    }

    fn build(mode: FormMode, record: &T) -> Self {
        let template = object_of(&T::default());
        let base = object_of(record);

        let fields = template
            .iter()
            .filter(|(key, _)| !SYSTEM_FIELDS.contains(&key.as_str()))
            .map(|(key, default)| FormField {
                key: key.clone(),
                label: label_for(key),
                kind: FieldKind::of(default),
                value: base.get(key).map(value_text).unwrap_or_default(),
            })
            .collect();

        Self {
            mode,
            fields,
            focused: 0,
            error: None,
            base,
            _record: PhantomData,
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Add => format!("Add {}", T::KIND.tab_label()),
            FormMode::Edit { .. } => format!("Edit {}", T::KIND.tab_label()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn set_value(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.key == key) {
            field.value = value.to_string();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return FormOutcome::Cancel
            }
            KeyCode::Enter => return FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.value.push(c);
                }
            }
            _ => {}
        }
        FormOutcome::Continue
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Parse every field back into a record and validate it. System fields
    /// of the edited record are carried over untouched.
    pub fn to_record(&self) -> Result<T> {
        let mut object = self.base.clone();
        for field in &self.fields {
            object.insert(field.key.clone(), field.parse()?);
        }

        let record: T = serde_json::from_value(Value::Object(object))
            .map_err(|e| PantryError::invalid_record(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }
}
