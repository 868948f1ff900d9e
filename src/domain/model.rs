use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::FormError;

/// One of the three editable inputs of a customer card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Age,
    Address,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Age, Field::Address];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Address => "address",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "address" => Ok(Field::Address),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

/// A problem with user input. These are attached to records for display and
/// never returned as faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(Field),
    InvalidNumericValue(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) | ValidationError::InvalidNumericValue(field) => {
                *field
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(Field::Name) => "Name is required",
            ValidationError::MissingField(Field::Age) => "Age is required",
            ValidationError::MissingField(Field::Address) => "Address is required",
            ValidationError::InvalidNumericValue(Field::Age) => "Enter a valid positive age",
            ValidationError::InvalidNumericValue(_) => "Enter a valid positive number",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field error state of a single customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The display message for `field`, if it currently has an error.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(ValidationError::message)
    }

    pub fn merge(&mut self, other: &FieldErrors) {
        for error in other.iter() {
            self.insert(*error);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// One editable customer card. `age` is kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub age: String,
    pub address: String,
    pub errors: FieldErrors,
}

impl Customer {
    pub fn new(name: impl Into<String>, age: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            address: address.into(),
            errors: FieldErrors::new(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Address => &self.address,
        }
    }

    pub(crate) fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Age => self.age = value,
            Field::Address => self.address = value,
        }
    }

    pub fn entry(&self) -> CustomerEntry {
        CustomerEntry {
            name: self.name.clone(),
            age: self.age.clone(),
            address: self.address.clone(),
        }
    }
}

/// A customer as handed to a submission sink, without error metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerEntry {
    pub name: String,
    pub age: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub submitted_at: DateTime<Utc>,
    pub customers: Vec<CustomerEntry>,
}

impl Submission {
    pub fn new(customers: Vec<CustomerEntry>) -> Self {
        Self {
            submitted_at: Utc::now(),
            customers,
        }
    }
}
