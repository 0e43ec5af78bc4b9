//! The asynchronous boundary between page controllers and the catalog.
//!
//! [`FetchCoordinator`] wraps a [`MarketSource`] with simulated latency and
//! exposes one async method per endpoint. Every call is stateless: there is
//! no caching, no memoization, and no incremental update. A product fetch
//! reruns the full catalog scan through the query engine each time.
//!
//! Failure handling is uniform: source errors propagate as
//! [`MarketError`](crate::domain::MarketError) and are never fatal. The
//! caller retries by issuing the same call again, typically because the
//! shopper changed a filter or resubmitted a form.
//!
//! The coordinator deliberately knows nothing about request ordering. When
//! several product fetches overlap, the browse controller tags each one with
//! a sequence number and discards completions that have been superseded; see
//! [`app::handler`](crate::app::handler).

use crate::catalog::MarketSource;
use crate::domain::error::Result;
use crate::domain::{
    EngagementKind, EngagementReceipt, ItemRecord, MarketStats, SubscriptionReceipt, Testimonial,
};
use crate::fetch::Latency;
use crate::query::{self, FilterSpec};
use std::sync::Arc;
use std::time::Duration;

/// Async facade over a catalog backend with simulated round-trip delays.
///
/// Cheap to clone pieces out of: the source sits behind an `Arc`, so the
/// coordinator itself can be shared across spawned fetch tasks.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use dripcity::catalog::InMemoryCatalog;
/// use dripcity::fetch::FetchCoordinator;
/// use dripcity::query::FilterSpec;
///
/// # async fn demo() -> dripcity::domain::Result<()> {
/// let api = FetchCoordinator::new(Arc::new(InMemoryCatalog::seeded()));
/// let items = api.fetch_items(&FilterSpec::default()).await?;
/// assert_eq!(items.len(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FetchCoordinator {
    source: Arc<dyn MarketSource>,
    latency: Latency,
}

impl FetchCoordinator {
    /// Creates a coordinator with the default simulated delays.
    #[must_use]
    pub fn new(source: Arc<dyn MarketSource>) -> Self {
        Self::with_latency(source, Latency::default())
    }

    /// Creates a coordinator with explicit delays.
    ///
    /// Tests use [`Latency::zero`] to keep the async contract without the
    /// wall-clock cost.
    #[must_use]
    pub fn with_latency(source: Arc<dyn MarketSource>, latency: Latency) -> Self {
        Self { source, latency }
    }

    /// Fetches the category enumeration.
    ///
    /// # Errors
    ///
    /// Propagates source read failures.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<String>> {
        self.pause(self.latency.categories).await;
        let categories = self.source.list_categories()?;
        tracing::debug!(count = categories.len(), "categories fetched");
        Ok(categories)
    }

    /// Fetches the products matching a filter specification.
    ///
    /// Reads the full catalog and reruns [`query`](crate::query::query) on
    /// every call, so repeated calls with the same spec return identical,
    /// order-equal results.
    ///
    /// # Errors
    ///
    /// Propagates source read failures.
    #[tracing::instrument(level = "debug", skip(self, filter), fields(search_len = filter.search.len()))]
    pub async fn fetch_items(&self, filter: &FilterSpec) -> Result<Vec<ItemRecord>> {
        self.pause(self.latency.items).await;
        let items = self.source.all_items()?;
        let results = query::query(&items, filter);
        tracing::debug!(
            total = items.len(),
            matched = results.len(),
            "items fetched"
        );
        Ok(results)
    }

    /// Fetches the landing-page counters.
    ///
    /// # Errors
    ///
    /// Propagates source read failures.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_stats(&self) -> Result<MarketStats> {
        self.pause(self.latency.stats).await;
        self.source.stats()
    }

    /// Fetches the testimonial list.
    ///
    /// # Errors
    ///
    /// Propagates source read failures.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.pause(self.latency.testimonials).await;
        self.source.testimonials()
    }

    /// Subscribes an address to the newsletter and returns the receipt.
    ///
    /// The bundled sources accept any address; validation beyond "non-empty"
    /// belongs to the form controller, which never submits a blank field.
    ///
    /// # Errors
    ///
    /// A real backend can refuse the subscription; the bundled sources never
    /// do.
    #[tracing::instrument(level = "debug", skip(self, email))]
    pub async fn submit_newsletter(&self, email: &str) -> Result<SubscriptionReceipt> {
        self.pause(self.latency.newsletter).await;
        let receipt = SubscriptionReceipt::new(email.trim());
        tracing::debug!("newsletter subscription recorded");
        Ok(receipt)
    }

    /// Starts an engagement flow and returns its confirmation message.
    ///
    /// # Errors
    ///
    /// A real backend can refuse the request; the bundled sources never do.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn engage(&self, kind: EngagementKind) -> Result<EngagementReceipt> {
        self.pause(self.latency.engagement).await;
        Ok(EngagementReceipt {
            message: kind.confirmation().to_string(),
        })
    }

    /// Sleeps for the configured delay, yielding even when it is zero so
    /// overlapping fetches always interleave at the runtime.
    async fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn coordinator() -> FetchCoordinator {
        FetchCoordinator::with_latency(Arc::new(InMemoryCatalog::seeded()), Latency::zero())
    }

    #[tokio::test]
    async fn fetch_items_applies_the_filter() {
        let api = coordinator();
        let filter = FilterSpec {
            category: Some("Fabric".to_string()),
            ..FilterSpec::default()
        };
        let items = api.fetch_items(&filter).await.unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.category == "Fabric"));
    }

    #[tokio::test]
    async fn repeated_fetches_are_identical() {
        let api = coordinator();
        let filter = FilterSpec {
            verified_only: true,
            ..FilterSpec::default()
        };
        let first = api.fetch_items(&filter).await.unwrap();
        let second = api.fetch_items(&filter).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn fetch_categories_matches_the_source() {
        let api = coordinator();
        let categories = api.fetch_categories().await.unwrap();
        assert_eq!(categories, vec!["Fabric", "Accessories", "Materials", "Tools"]);
    }

    #[tokio::test]
    async fn newsletter_receipt_echoes_trimmed_email() {
        let api = coordinator();
        let receipt = api.submit_newsletter("  amina@example.com ").await.unwrap();
        assert_eq!(receipt.email, "amina@example.com");
    }

    #[tokio::test]
    async fn engagement_returns_the_flow_confirmation() {
        let api = coordinator();
        let receipt = api.engage(EngagementKind::ExploreVendors).await.unwrap();
        assert_eq!(receipt.message, "Redirecting to vendors page...");
    }
}
