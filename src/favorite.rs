//! Favorite payment templates.

use crate::account::AccountId;
use crate::money::Money;
use crate::payment::{Payment, PaymentCategory, PaymentId};
use uuid::Uuid;

/// Globally unique favorite identifier.
pub type FavoriteId = Uuid;

/// A named, frozen template for re-issuing a payment.
///
/// Amount and category are copied from the source payment when the favorite
/// is created; later changes to that payment do not propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,

    pub account_id: AccountId,

    /// Payment this favorite was created from.
    pub payment_id: PaymentId,

    /// Display name chosen by the user.
    pub name: String,

    pub amount: Money,

    pub category: PaymentCategory,
}

impl Favorite {
    /// Creates a favorite from a payment with a freshly generated ID.
    pub fn from_payment(payment: &Payment, name: impl Into<String>) -> Self {
        Favorite {
            id: Uuid::new_v4(),
            account_id: payment.account_id,
            payment_id: payment.id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payment_copies_template() {
        let payment = Payment::new(3, Money::new(300), PaymentCategory::from("food"));
        let favorite = Favorite::from_payment(&payment, "lunch");

        assert_eq!(favorite.account_id, 3);
        assert_eq!(favorite.payment_id, payment.id);
        assert_eq!(favorite.name, "lunch");
        assert_eq!(favorite.amount, Money::new(300));
        assert_eq!(favorite.category.as_str(), "food");
        assert_ne!(favorite.id, payment.id);
    }

    #[test]
    fn test_template_is_frozen() {
        let mut payment = Payment::new(3, Money::new(300), PaymentCategory::from("food"));
        let favorite = Favorite::from_payment(&payment, "lunch");

        payment.amount = Money::new(1);
        payment.category = PaymentCategory::from("rent");

        assert_eq!(favorite.amount, Money::new(300));
        assert_eq!(favorite.category.as_str(), "food");
    }
}
