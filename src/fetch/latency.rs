//! Simulated round-trip latency configuration.
//!
//! Each fetch endpoint sleeps a fixed duration before touching its data
//! source, modeling what a real network call would feel like to the UI. The
//! defaults mirror the delays the marketplace pages were tuned against;
//! tests and scripted demos use [`Latency::zero`].

use std::time::Duration;

/// Per-endpoint simulated delays applied by the fetch coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Delay before a filtered product fetch resolves.
    pub items: Duration,
    /// Delay before the category list resolves.
    pub categories: Duration,
    /// Delay before the landing-page counters resolve.
    pub stats: Duration,
    /// Delay before the testimonial list resolves.
    pub testimonials: Duration,
    /// Delay before a newsletter subscription resolves.
    pub newsletter: Duration,
    /// Delay before an engagement request resolves.
    pub engagement: Duration,
}

impl Latency {
    /// No delay on any endpoint. Every fetch still yields to the runtime, so
    /// ordering-sensitive code paths behave the same as with real delays.
    #[must_use]
    pub const fn zero() -> Self {
        Self::uniform_ms(0)
    }

    /// The same delay on every endpoint.
    #[must_use]
    pub const fn uniform_ms(ms: u64) -> Self {
        let d = Duration::from_millis(ms);
        Self {
            items: d,
            categories: d,
            stats: d,
            testimonials: d,
            newsletter: d,
            engagement: d,
        }
    }
}

impl Default for Latency {
    /// The delays the original pages simulate: products are the slowest read,
    /// categories the fastest, and form submissions take a full second.
    fn default() -> Self {
        Self {
            items: Duration::from_millis(800),
            categories: Duration::from_millis(300),
            stats: Duration::from_millis(800),
            testimonials: Duration::from_millis(600),
            newsletter: Duration::from_millis(1000),
            engagement: Duration::from_millis(800),
        }
    }
}
