//! Catalog item domain model.
//!
//! This module defines the core [`ItemRecord`] type representing one product in
//! the marketplace catalog. Records are immutable once the catalog is built; all
//! mutation in the system happens in the filter specification, never here.

use serde::{Deserialize, Serialize};

/// Maximum star rating an item can carry.
const MAX_RATING: f64 = 5.0;

/// A single product listed in the marketplace catalog.
///
/// Items are catalog-resident and immutable for the process lifetime: the
/// catalog supports no create, update, or delete operations, so a record read
/// at startup stays valid for every query issued afterwards.
///
/// # Fields
///
/// - `id`: unique integer identifier, stable for the process lifetime
/// - `name`: display name shown on product cards
/// - `category`: label from the catalog's category enumeration (matched
///   exactly and case-sensitively by the query engine, which does not
///   validate it against the enumeration)
/// - `price`: non-negative amount in whole naira
/// - `rating`: average review score in `[0, 5]`
/// - `vendor`: free-text vendor display name
/// - `verified`: whether the vendor passed marketplace verification
/// - `image`, `description`: display strings, opaque to the query engine
///   except that `description` participates in text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: u32,
    pub rating: f64,
    pub vendor: String,
    pub verified: bool,
    pub image: String,
    pub description: String,
}

impl ItemRecord {
    /// Formats the price for display with a currency sign and thousands grouping.
    ///
    /// # Examples
    ///
    /// ```
    /// use dripcity::catalog::InMemoryCatalog;
    /// use dripcity::catalog::MarketSource;
    ///
    /// let items = InMemoryCatalog::seeded().all_items().unwrap();
    /// assert_eq!(items[0].price_label(), "₦4,500");
    /// ```
    #[must_use]
    pub fn price_label(&self) -> String {
        let digits = self.price.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        format!("₦{grouped}")
    }

    /// Returns the number of fully filled rating stars, clamped to `0..=5`.
    ///
    /// Product cards draw this many filled stars and the remainder dimmed.
    #[must_use]
    pub fn full_stars(&self) -> usize {
        let clamped = self.rating.clamp(0.0, MAX_RATING);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            clamped.floor() as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(price: u32, rating: f64) -> ItemRecord {
        ItemRecord {
            id: 1,
            name: "Cotton Thread Set".to_string(),
            category: "Materials".to_string(),
            price,
            rating,
            vendor: "ThreadMaster".to_string(),
            verified: true,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn price_label_groups_thousands() {
        assert_eq!(sample(0, 4.0).price_label(), "₦0");
        assert_eq!(sample(950, 4.0).price_label(), "₦950");
        assert_eq!(sample(4500, 4.0).price_label(), "₦4,500");
        assert_eq!(sample(1_250_000, 4.0).price_label(), "₦1,250,000");
    }

    #[test]
    fn full_stars_floors_and_clamps() {
        assert_eq!(sample(1, 4.8).full_stars(), 4);
        assert_eq!(sample(1, 5.0).full_stars(), 5);
        assert_eq!(sample(1, -1.0).full_stars(), 0);
        assert_eq!(sample(1, 9.9).full_stars(), 5);
    }
}
