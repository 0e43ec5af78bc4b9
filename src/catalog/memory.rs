//! Compiled-in catalog with seed data.
//!
//! The default backend: a fixed product list, category enumeration, and
//! landing content held in memory. Append-only in principle, static in
//! practice, since nothing in the crate mutates a catalog after construction.

use crate::catalog::source::MarketSource;
use crate::domain::error::Result;
use crate::domain::{ItemRecord, MarketStats, Testimonial};

/// In-memory marketplace data source.
///
/// Holds all data as plain vectors and serves clones on every read, matching
/// the fetch coordinator's stateless full-rescan contract. Use
/// [`seeded`](Self::seeded) for the bundled demo data or [`new`](Self::new)
/// to build a custom catalog (mostly useful in tests).
pub struct InMemoryCatalog {
    items: Vec<ItemRecord>,
    categories: Vec<String>,
    stats: MarketStats,
    testimonials: Vec<Testimonial>,
}

impl InMemoryCatalog {
    /// Creates a catalog from explicit items and categories.
    ///
    /// Stats default to zeroes and the testimonial list starts empty; use
    /// [`with_stats`](Self::with_stats) and
    /// [`with_testimonials`](Self::with_testimonials) to fill them in.
    #[must_use]
    pub fn new(items: Vec<ItemRecord>, categories: Vec<String>) -> Self {
        Self {
            items,
            categories,
            stats: MarketStats::default(),
            testimonials: Vec::new(),
        }
    }

    /// Sets the landing-page counters.
    #[must_use]
    pub fn with_stats(mut self, stats: MarketStats) -> Self {
        self.stats = stats;
        self
    }

    /// Sets the landing-page testimonials.
    #[must_use]
    pub fn with_testimonials(mut self, testimonials: Vec<Testimonial>) -> Self {
        self.testimonials = testimonials;
        self
    }

    /// Returns the bundled demo catalog.
    ///
    /// Six products across the four seed categories, plus the landing-page
    /// stats and testimonials. Category labels are matched exactly by the
    /// query engine, so the enumeration here is the source of truth for
    /// what the filter chips offer.
    #[must_use]
    pub fn seeded() -> Self {
        let categories = vec![
            "Fabric".to_string(),
            "Accessories".to_string(),
            "Materials".to_string(),
            "Tools".to_string(),
        ];

        let items = vec![
            seed_item(
                1,
                "Premium African Wax Print",
                "Fabric",
                4500,
                4.8,
                "FabricsNG",
                true,
                "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "High-quality African wax print fabric perfect for traditional and modern designs.",
            ),
            seed_item(
                2,
                "Leather Handbag Straps",
                "Accessories",
                3200,
                4.5,
                "LeatherCraft",
                true,
                "https://images.unsplash.com/photo-1591348122449-02525d70379b?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Genuine leather straps for handbags and purses. Available in multiple colors.",
            ),
            seed_item(
                3,
                "Assorted Buttons Pack",
                "Accessories",
                1500,
                4.2,
                "SewingEssentials",
                false,
                "https://images.unsplash.com/photo-1586363104862-3a5e2ab60d99?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Pack of 50 assorted buttons for various sewing projects.",
            ),
            seed_item(
                4,
                "Cotton Thread Set",
                "Materials",
                2800,
                4.7,
                "ThreadMaster",
                true,
                "https://images.unsplash.com/photo-1566121933407-3c7ccdd26763?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "High-quality cotton thread set with 20 different colors.",
            ),
            seed_item(
                5,
                "Beaded Necklace Materials",
                "Accessories",
                3800,
                4.9,
                "BeadsGalore",
                true,
                "https://images.unsplash.com/photo-1605100804763-247f67b3557e?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Complete kit for creating beaded necklaces, includes beads, wires, and tools.",
            ),
            seed_item(
                6,
                "Suede Fabric Roll",
                "Fabric",
                6500,
                4.6,
                "LuxuryFabrics",
                true,
                "https://images.unsplash.com/photo-1563170351-be82bc888aa4?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Premium suede fabric perfect for jackets, bags, and upholstery.",
            ),
        ];

        let stats = MarketStats {
            vendors: 128,
            products: 5237,
            users: 15892,
            satisfaction: 98,
        };

        let testimonials = vec![
            Testimonial {
                id: 1,
                name: "Amina Garba".to_string(),
                role: "Fashion Designer".to_string(),
                rating: 5,
                content: "Drip City has completely transformed how I source materials. The verification process gives me peace of mind, and I've found amazing fabric suppliers.".to_string(),
            },
            Testimonial {
                id: 2,
                name: "Adebayo Olatunji".to_string(),
                role: "Fabric Vendor".to_string(),
                rating: 4,
                content: "Since joining Drip City, my business has grown by 200%. The platform connects me with serious clients who value quality.".to_string(),
            },
            Testimonial {
                id: 3,
                name: "Chioma Eze".to_string(),
                role: "Boutique Owner".to_string(),
                rating: 5,
                content: "The quality of materials I've found here is unmatched. My customers keep coming back because of the premium fabrics I now use.".to_string(),
            },
        ];

        Self::new(items, categories)
            .with_stats(stats)
            .with_testimonials(testimonials)
    }
}

impl MarketSource for InMemoryCatalog {
    fn list_categories(&self) -> Result<Vec<String>> {
        Ok(self.categories.clone())
    }

    fn all_items(&self) -> Result<Vec<ItemRecord>> {
        Ok(self.items.clone())
    }

    fn stats(&self) -> Result<MarketStats> {
        Ok(self.stats)
    }

    fn testimonials(&self) -> Result<Vec<Testimonial>> {
        Ok(self.testimonials.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_item(
    id: i64,
    name: &str,
    category: &str,
    price: u32,
    rating: f64,
    vendor: &str,
    verified: bool,
    image: &str,
    description: &str,
) -> ItemRecord {
    ItemRecord {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        rating,
        vendor: vendor.to_string(),
        verified,
        image: image.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_ids_are_unique() {
        let items = InMemoryCatalog::seeded().all_items().unwrap();
        let ids: HashSet<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn seeded_categories_are_unique_and_cover_items() {
        let catalog = InMemoryCatalog::seeded();
        let categories = catalog.list_categories().unwrap();

        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());

        for item in catalog.all_items().unwrap() {
            assert!(
                categories.contains(&item.category),
                "item {} has unlisted category {}",
                item.id,
                item.category
            );
        }
    }

    #[test]
    fn reads_preserve_insertion_order() {
        let catalog = InMemoryCatalog::seeded();
        let first = catalog.all_items().unwrap();
        let second = catalog.all_items().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.first().map(|i| i.id), Some(1));
        assert_eq!(first.last().map(|i| i.id), Some(6));
    }

    #[test]
    fn seeded_ratings_stay_in_range() {
        for item in InMemoryCatalog::seeded().all_items().unwrap() {
            assert!((0.0..=5.0).contains(&item.rating));
        }
    }
}
