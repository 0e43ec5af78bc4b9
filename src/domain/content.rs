//! Landing-page content types.
//!
//! This module defines the record types served to the marketing landing page:
//! marketplace statistics, customer testimonials, and the receipts returned by
//! the newsletter and engagement endpoints. They are kept separate from the
//! catalog item model because they never pass through the query engine.

use serde::{Deserialize, Serialize};

/// Aggregate marketplace counters shown in the hero section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStats {
    /// Number of registered vendors.
    pub vendors: u32,
    /// Number of listed products.
    pub products: u32,
    /// Number of registered users.
    pub users: u32,
    /// Customer satisfaction percentage, `0..=100`.
    pub satisfaction: u8,
}

/// A customer testimonial rotated through the landing page carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    /// Customer display name.
    pub name: String,
    /// Customer role, e.g. "Fashion Designer".
    pub role: String,
    /// Star rating given by the customer, `0..=5`.
    pub rating: u8,
    /// Quote body.
    pub content: String,
}

/// Confirmation returned by a successful newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionReceipt {
    /// Address that was subscribed.
    pub email: String,
    /// Unix timestamp of when the subscription was recorded.
    pub subscribed_at: i64,
}

impl SubscriptionReceipt {
    /// Creates a receipt for the given address, stamped with the current time.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subscribed_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Call-to-action flows a visitor can start from the landing page.
///
/// Each kind maps to one button in the hero, navbar, or footer. The flows
/// all terminate in a confirmation banner; real onboarding is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementKind {
    /// Start a vendor application ("Join the Marketplace").
    JoinVendor,
    /// Start a buyer registration.
    JoinBuyer,
    /// Browse the vendor directory.
    ExploreVendors,
    /// Generic onboarding entry point.
    GetStarted,
}

impl EngagementKind {
    /// Returns the confirmation message shown when the flow starts.
    #[must_use]
    pub const fn confirmation(self) -> &'static str {
        match self {
            Self::JoinVendor => "Vendor application started!",
            Self::JoinBuyer => "Buyer registration started!",
            Self::ExploreVendors => "Redirecting to vendors page...",
            Self::GetStarted => "Starting your journey...",
        }
    }
}

/// Confirmation returned by a successful engagement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementReceipt {
    /// Human-readable confirmation message for the banner.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_messages_are_distinct() {
        let kinds = [
            EngagementKind::JoinVendor,
            EngagementKind::JoinBuyer,
            EngagementKind::ExploreVendors,
            EngagementKind::GetStarted,
        ];
        for a in kinds {
            for b in kinds {
                if a != b {
                    assert_ne!(a.confirmation(), b.confirmation());
                }
            }
        }
    }

    #[test]
    fn receipt_carries_email() {
        let receipt = SubscriptionReceipt::new("amina@example.com");
        assert_eq!(receipt.email, "amina@example.com");
        assert!(receipt.subscribed_at > 0);
    }
}
