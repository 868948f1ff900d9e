use crate::core::validator::validate;
use crate::domain::model::{Customer, CustomerEntry, Field};
use crate::utils::error::{FormError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every customer passed; these are ready for a sink.
    Accepted(Vec<CustomerEntry>),
    /// Zero-based positions of the customers that failed validation.
    Rejected { invalid: Vec<usize> },
}

/// Ordered list of customer cards. Always holds at least one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerList {
    customers: Vec<Customer>,
}

impl Default for CustomerList {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerList {
    pub fn new() -> Self {
        Self {
            customers: vec![Customer::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    // Always false while the list invariant holds.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn entries(&self) -> Vec<CustomerEntry> {
        self.customers.iter().map(Customer::entry).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.customers.len() {
            return Err(FormError::IndexOutOfRange {
                index,
                len: self.customers.len(),
            });
        }
        Ok(())
    }

    /// Sets one field and clears its error, whatever the new value is.
    pub fn update(&mut self, index: usize, field: Field, value: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        let customer = &mut self.customers[index];
        customer.set_value(field, value.into());
        customer.errors.clear(field);
        tracing::debug!("Updated customer {} field '{}'", index + 1, field);
        Ok(())
    }

    /// Appends an empty customer if the last one validates. On failure the
    /// last customer's errors are filled in and nothing else changes.
    pub fn add_record(&mut self) -> bool {
        let last = self.customers.len() - 1;
        if !self.validate_at(last) {
            tracing::debug!("Not adding a customer: customer {} is invalid", last + 1);
            return false;
        }
        self.customers.push(Customer::default());
        tracing::debug!("Added customer {}", self.customers.len());
        true
    }

    /// Returns `Ok(false)` when only one customer is left.
    pub fn remove_record(&mut self, index: usize) -> Result<bool> {
        if self.customers.len() == 1 {
            tracing::debug!("Ignoring remove: the form needs at least one customer");
            return Ok(false);
        }
        self.check_index(index)?;
        self.customers.remove(index);
        tracing::debug!("Removed customer {}", index + 1);
        Ok(true)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let invalid: Vec<usize> = (0..self.customers.len())
            .filter(|&index| !self.validate_at(index))
            .collect();

        if invalid.is_empty() {
            SubmitOutcome::Accepted(self.entries())
        } else {
            SubmitOutcome::Rejected { invalid }
        }
    }

    pub fn reset(&mut self) {
        self.customers = vec![Customer::default()];
        tracing::debug!("Form reset");
    }

    fn validate_at(&mut self, index: usize) -> bool {
        let customer = &mut self.customers[index];
        let validation = validate(customer);
        customer.errors.merge(&validation.errors);
        validation.is_valid()
    }
}
