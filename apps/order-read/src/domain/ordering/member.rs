//! Member entity.

use crate::domain::shared::{Address, MemberId};

/// A registered member. Orders reference exactly one member.
///
/// Name is not unique in the current model; storage-level uniqueness is a
/// write-path concern outside this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    address: Address,
}

impl Member {
    /// Create a new member.
    #[must_use]
    pub fn new(id: MemberId, name: impl Into<String>, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            address,
        }
    }

    /// Member identifier.
    #[must_use]
    pub const fn id(&self) -> &MemberId {
        &self.id
    }

    /// Member display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member home address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_accessors() {
        let member = Member::new(
            MemberId::new("m-1"),
            "A",
            Address::new("Seoul", "Teheran-ro 1", "06234"),
        );
        assert_eq!(member.id().as_str(), "m-1");
        assert_eq!(member.name(), "A");
        assert_eq!(member.address().city(), "Seoul");
    }
}
