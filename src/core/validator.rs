use crate::domain::model::{Customer, Field, FieldErrors, ValidationError};
use crate::utils::validation::parse_positive_number;

/// Result of one validation pass over a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every field of `customer` independently. Never mutates the record.
pub fn validate(customer: &Customer) -> Validation {
    let mut errors = FieldErrors::new();

    if customer.name.trim().is_empty() {
        errors.insert(ValidationError::MissingField(Field::Name));
    }

    // Empty wins over the numeric check; whitespace-only is not empty here.
    if customer.age.is_empty() {
        errors.insert(ValidationError::MissingField(Field::Age));
    } else if parse_positive_number(&customer.age).is_none() {
        errors.insert(ValidationError::InvalidNumericValue(Field::Age));
    }

    if customer.address.trim().is_empty() {
        errors.insert(ValidationError::MissingField(Field::Address));
    }

    Validation { errors }
}
