//! Landing-page state container and form state machines.
//!
//! Each interactive surface of the marketing page owns one explicit state
//! cell: the newsletter form is a small state machine, engagement buttons
//! share a busy flag and a confirmation banner, and the testimonial carousel
//! keeps its rotation index. All transitions happen in the reducer; nothing
//! here performs I/O.

use crate::domain::{MarketStats, Testimonial};

/// Submission state of the newsletter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing submitted yet, or the form was edited after a result.
    #[default]
    Idle,

    /// A subscription request is in flight; further submits are ignored.
    Submitting,

    /// The last submission succeeded; the email field has been cleared.
    Succeeded,

    /// The last submission failed with a user-visible message. Retryable by
    /// submitting again.
    Failed(String),
}

/// Newsletter signup form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    /// Current contents of the email input.
    pub email: String,

    /// Where the form is in its submit lifecycle.
    pub status: SubmitStatus,
}

impl NewsletterForm {
    /// Returns `true` when the form may start a submission: the email field
    /// is non-blank and no request is already in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && self.status != SubmitStatus::Submitting
    }
}

/// Central state container for the marketing landing page.
#[derive(Debug, Clone, Default)]
pub struct LandingState {
    /// Aggregate counters for the hero section; `None` until loaded.
    pub stats: Option<MarketStats>,

    /// Testimonials rotated through the carousel.
    pub testimonials: Vec<Testimonial>,

    /// Index of the testimonial currently shown.
    pub active_testimonial: usize,

    /// Whether the mobile navigation menu is open.
    pub menu_open: bool,

    /// Newsletter signup form.
    pub newsletter: NewsletterForm,

    /// Whether an engagement request is in flight. All engagement buttons
    /// are disabled while set.
    pub engagement_busy: bool,

    /// Confirmation message of the last successful engagement request.
    pub banner: Option<String>,

    /// User-visible message of the last failed operation on this page.
    pub error: Option<String>,
}

impl LandingState {
    /// Returns the testimonial currently shown, if any are loaded.
    #[must_use]
    pub fn active_testimonial(&self) -> Option<&Testimonial> {
        self.testimonials.get(self.active_testimonial)
    }

    /// Advances the carousel by one, wrapping at the end.
    ///
    /// No-op with fewer than two testimonials, matching the page behavior of
    /// only rotating when there is something to rotate to.
    pub fn advance_testimonial(&mut self) {
        if self.testimonials.len() > 1 {
            self.active_testimonial = (self.active_testimonial + 1) % self.testimonials.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(id: i64) -> Testimonial {
        Testimonial {
            id,
            name: format!("Customer {id}"),
            role: "Designer".to_string(),
            rating: 5,
            content: String::new(),
        }
    }

    #[test]
    fn rotation_wraps() {
        let mut state = LandingState {
            testimonials: vec![testimonial(1), testimonial(2), testimonial(3)],
            ..LandingState::default()
        };
        state.advance_testimonial();
        state.advance_testimonial();
        state.advance_testimonial();
        assert_eq!(state.active_testimonial, 0);
    }

    #[test]
    fn rotation_is_inert_with_a_single_entry() {
        let mut state = LandingState {
            testimonials: vec![testimonial(1)],
            ..LandingState::default()
        };
        state.advance_testimonial();
        assert_eq!(state.active_testimonial, 0);
    }

    #[test]
    fn blank_email_cannot_submit() {
        let mut form = NewsletterForm::default();
        assert!(!form.can_submit());
        form.email = "   ".to_string();
        assert!(!form.can_submit());
        form.email = "amina@example.com".to_string();
        assert!(form.can_submit());
        form.status = SubmitStatus::Submitting;
        assert!(!form.can_submit());
    }
}
