//! Order entity.
//!
//! The order is the root of the read graph: order -> member and
//! order -> delivery -> address. Association residency is explicit
//! ([`Association`]); a root-only order carries the foreign ids and
//! nothing else.

use super::association::Association;
use super::delivery::Delivery;
use super::member::Member;
use super::order_status::OrderStatus;
use crate::domain::shared::{DeliveryId, MemberId, OrderId, Timestamp};

/// An order root with explicitly tagged to-one associations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    member_id: MemberId,
    delivery_id: DeliveryId,
    order_date: Timestamp,
    status: OrderStatus,
    member: Association<Member>,
    delivery: Association<Delivery>,
}

impl Order {
    /// Create a root-only order; both associations start `NotLoaded`.
    #[must_use]
    pub const fn root(
        id: OrderId,
        member_id: MemberId,
        delivery_id: DeliveryId,
        order_date: Timestamp,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            member_id,
            delivery_id,
            order_date,
            status,
            member: Association::NotLoaded,
            delivery: Association::NotLoaded,
        }
    }

    /// Order identifier.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Identifier of the owning member.
    #[must_use]
    pub const fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    /// Identifier of the attached delivery.
    #[must_use]
    pub const fn delivery_id(&self) -> &DeliveryId {
        &self.delivery_id
    }

    /// When the order was placed.
    #[must_use]
    pub const fn order_date(&self) -> Timestamp {
        self.order_date
    }

    /// Order status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Member association state.
    #[must_use]
    pub const fn member(&self) -> &Association<Member> {
        &self.member
    }

    /// Delivery association state.
    #[must_use]
    pub const fn delivery(&self) -> &Association<Delivery> {
        &self.delivery
    }

    /// Make the member resident.
    pub fn attach_member(&mut self, member: Member) {
        self.member = Association::Loaded(member);
    }

    /// Make the delivery resident.
    pub fn attach_delivery(&mut self, delivery: Delivery) {
        self.delivery = Association::Loaded(delivery);
    }

    /// Returns true if both to-one associations are resident.
    #[must_use]
    pub const fn is_fully_loaded(&self) -> bool {
        self.member.is_loaded() && self.delivery.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::delivery_status::DeliveryStatus;
    use crate::domain::shared::Address;

    fn root_order() -> Order {
        Order::root(
            OrderId::new("o-1"),
            MemberId::new("m-1"),
            DeliveryId::new("d-1"),
            Timestamp::parse("2024-03-01T12:00:00+00:00").unwrap(),
            OrderStatus::Open,
        )
    }

    #[test]
    fn root_order_has_no_resident_associations() {
        let order = root_order();
        assert!(!order.member().is_loaded());
        assert!(!order.delivery().is_loaded());
        assert!(!order.is_fully_loaded());
    }

    #[test]
    fn attaching_both_associations_makes_order_fully_loaded() {
        let mut order = root_order();
        order.attach_member(Member::new(
            MemberId::new("m-1"),
            "A",
            Address::new("Seoul", "Teheran-ro 1", "06234"),
        ));
        order.attach_delivery(Delivery::new(
            DeliveryId::new("d-1"),
            Address::new("Seoul", "Teheran-ro 1", "06234"),
            DeliveryStatus::Ready,
        ));
        assert!(order.is_fully_loaded());
        assert_eq!(order.member().get().unwrap().name(), "A");
        assert_eq!(order.delivery().get().unwrap().address().city(), "Seoul");
    }

    #[test]
    fn root_order_keeps_foreign_ids() {
        let order = root_order();
        assert_eq!(order.member_id().as_str(), "m-1");
        assert_eq!(order.delivery_id().as_str(), "d-1");
    }
}
