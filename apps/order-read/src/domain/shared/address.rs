//! Address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address embedded in members and deliveries.
///
/// Immutable once attached: there are no mutators, callers replace the
/// whole value instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    city: String,
    street: String,
    zipcode: String,
}

impl Address {
    /// Create a new address.
    #[must_use]
    pub fn new(city: impl Into<String>, street: impl Into<String>, zipcode: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }

    /// City name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Street line.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Postal code.
    #[must_use]
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.city, self.street, self.zipcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accessors() {
        let addr = Address::new("Seoul", "Teheran-ro 1", "06234");
        assert_eq!(addr.city(), "Seoul");
        assert_eq!(addr.street(), "Teheran-ro 1");
        assert_eq!(addr.zipcode(), "06234");
    }

    #[test]
    fn address_display() {
        let addr = Address::new("Busan", "Haeundae 2", "48094");
        assert_eq!(format!("{addr}"), "Busan Haeundae 2 (48094)");
    }

    #[test]
    fn address_value_equality() {
        let a = Address::new("Seoul", "Teheran-ro 1", "06234");
        let b = Address::new("Seoul", "Teheran-ro 1", "06234");
        assert_eq!(a, b);
    }
}
