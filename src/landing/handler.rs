//! Event handling and state transitions for the landing page.
//!
//! Same reducer shape as the browse page: events in, `(should_render,
//! actions)` out, with all I/O delegated to the runtime. The landing page has
//! no race-sensitive fetches: content loads once and the form endpoints are
//! serialized by their busy flags, so completions here carry no sequence
//! tags.

use crate::domain::error::Result;
use crate::domain::{
    EngagementKind, EngagementReceipt, MarketStats, SubscriptionReceipt, Testimonial,
};
use crate::landing::state::{LandingState, SubmitStatus};

/// Events triggered by landing-page interactions or fetch completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The joined stats + testimonials bootstrap fetch finished.
    ContentLoaded {
        result: std::result::Result<(MarketStats, Vec<Testimonial>), String>,
    },

    /// Carousel timer tick: advance to the next testimonial.
    TestimonialTick,

    /// The mobile menu button was pressed.
    MenuToggled,

    /// The email input changed to the given contents.
    EmailChanged(String),

    /// The newsletter form was submitted.
    NewsletterSubmitted,

    /// The newsletter request finished.
    NewsletterResult {
        result: std::result::Result<SubscriptionReceipt, String>,
    },

    /// An engagement button was pressed.
    EngageRequested(EngagementKind),

    /// The engagement request finished.
    EngageResult {
        result: std::result::Result<EngagementReceipt, String>,
    },
}

/// Side effects requested by the landing reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch stats and testimonials together and report back with
    /// `Event::ContentLoaded`.
    FetchContent,

    /// Subscribe the given address and report back with
    /// `Event::NewsletterResult`.
    SubmitNewsletter { email: String },

    /// Start the given engagement flow and report back with
    /// `Event::EngageResult`.
    Engage(EngagementKind),
}

/// Processes a landing-page event and returns actions to execute.
///
/// # Errors
///
/// Reserved for state transitions that can fail; the current transitions are
/// all infallible.
///
/// # Example
///
/// ```
/// use dripcity::landing::{handle_event, Event, LandingState};
///
/// let mut state = LandingState::default();
/// handle_event(&mut state, &Event::MenuToggled).unwrap();
/// assert!(state.menu_open);
/// ```
pub fn handle_event(state: &mut LandingState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::ContentLoaded { result } => match result {
            Ok((stats, testimonials)) => {
                tracing::debug!(
                    testimonial_count = testimonials.len(),
                    "landing content loaded"
                );
                state.stats = Some(*stats);
                state.testimonials.clone_from(testimonials);
                state.active_testimonial = 0;
                state.error = None;
                Ok((true, vec![]))
            }
            Err(message) => {
                tracing::debug!(error = %message, "landing content failed to load");
                state.error = Some(message.clone());
                Ok((true, vec![]))
            }
        },

        Event::TestimonialTick => {
            let before = state.active_testimonial;
            state.advance_testimonial();
            Ok((state.active_testimonial != before, vec![]))
        }

        Event::MenuToggled => {
            state.menu_open = !state.menu_open;
            Ok((true, vec![]))
        }

        Event::EmailChanged(email) => {
            state.newsletter.email.clone_from(email);
            // Editing after a result returns the form to a submittable state.
            if !matches!(state.newsletter.status, SubmitStatus::Submitting) {
                state.newsletter.status = SubmitStatus::Idle;
            }
            Ok((true, vec![]))
        }

        Event::NewsletterSubmitted => {
            if !state.newsletter.can_submit() {
                tracing::debug!("newsletter submit ignored");
                return Ok((false, vec![]));
            }
            state.newsletter.status = SubmitStatus::Submitting;
            state.error = None;
            Ok((
                true,
                vec![Action::SubmitNewsletter {
                    email: state.newsletter.email.clone(),
                }],
            ))
        }

        Event::NewsletterResult { result } => {
            match result {
                Ok(receipt) => {
                    tracing::debug!(email = %receipt.email, "newsletter subscription confirmed");
                    state.newsletter.status = SubmitStatus::Succeeded;
                    state.newsletter.email.clear();
                }
                Err(message) => {
                    tracing::debug!(error = %message, "newsletter subscription failed");
                    state.newsletter.status = SubmitStatus::Failed(message.clone());
                }
            }
            Ok((true, vec![]))
        }

        Event::EngageRequested(kind) => {
            if state.engagement_busy {
                tracing::debug!(kind = ?kind, "engagement ignored while busy");
                return Ok((false, vec![]));
            }
            state.engagement_busy = true;
            state.banner = None;
            state.error = None;
            state.menu_open = false;
            Ok((true, vec![Action::Engage(*kind)]))
        }

        Event::EngageResult { result } => {
            state.engagement_busy = false;
            match result {
                Ok(receipt) => {
                    state.banner = Some(receipt.message.clone());
                }
                Err(message) => {
                    state.error = Some(message.clone());
                }
            }
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> LandingState {
        let mut state = LandingState::default();
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
                content: String::new(),
            },
            Testimonial {
                id: 2,
                name: "Adebayo Olatunji".to_string(),
                role: "Fabric Vendor".to_string(),
                rating: 4,
                content: String::new(),
            },
        ];
        handle_event(
            &mut state,
            &Event::ContentLoaded {
                result: Ok((stats, testimonials)),
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn content_load_populates_stats_and_testimonials() {
        let state = loaded_state();
        assert_eq!(state.stats.unwrap().vendors, 128);
        assert_eq!(state.testimonials.len(), 2);
        assert_eq!(state.active_testimonial, 0);
    }

    #[test]
    fn content_load_failure_sets_error() {
        let mut state = LandingState::default();
        handle_event(
            &mut state,
            &Event::ContentLoaded {
                result: Err("Fetch error: backend unreachable".to_string()),
            },
        )
        .unwrap();
        assert!(state.error.is_some());
        assert!(state.stats.is_none());
    }

    #[test]
    fn newsletter_happy_path_clears_the_field() {
        let mut state = LandingState::default();
        handle_event(&mut state, &Event::EmailChanged("amina@example.com".into())).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::NewsletterSubmitted).unwrap();
        assert_eq!(
            actions,
            vec![Action::SubmitNewsletter {
                email: "amina@example.com".to_string()
            }]
        );
        assert_eq!(state.newsletter.status, SubmitStatus::Submitting);

        handle_event(
            &mut state,
            &Event::NewsletterResult {
                result: Ok(SubscriptionReceipt::new("amina@example.com")),
            },
        )
        .unwrap();
        assert_eq!(state.newsletter.status, SubmitStatus::Succeeded);
        assert!(state.newsletter.email.is_empty());
    }

    #[test]
    fn blank_email_submit_is_a_no_op() {
        let mut state = LandingState::default();
        let (rendered, actions) = handle_event(&mut state, &Event::NewsletterSubmitted).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.newsletter.status, SubmitStatus::Idle);
    }

    #[test]
    fn double_submit_is_guarded() {
        let mut state = LandingState::default();
        handle_event(&mut state, &Event::EmailChanged("a@b.c".into())).unwrap();
        handle_event(&mut state, &Event::NewsletterSubmitted).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::NewsletterSubmitted).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn newsletter_failure_is_retryable() {
        let mut state = LandingState::default();
        handle_event(&mut state, &Event::EmailChanged("a@b.c".into())).unwrap();
        handle_event(&mut state, &Event::NewsletterSubmitted).unwrap();
        handle_event(
            &mut state,
            &Event::NewsletterResult {
                result: Err("Fetch error: timeout".to_string()),
            },
        )
        .unwrap();
        assert!(matches!(state.newsletter.status, SubmitStatus::Failed(_)));

        // The address is still there, so submitting again works.
        let (_, actions) = handle_event(&mut state, &Event::NewsletterSubmitted).unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn engagement_busy_flag_guards_concurrent_requests() {
        let mut state = LandingState::default();
        let (_, first) =
            handle_event(&mut state, &Event::EngageRequested(EngagementKind::JoinVendor)).unwrap();
        assert_eq!(first, vec![Action::Engage(EngagementKind::JoinVendor)]);
        assert!(state.engagement_busy);

        let (_, second) =
            handle_event(&mut state, &Event::EngageRequested(EngagementKind::JoinBuyer)).unwrap();
        assert!(second.is_empty());

        handle_event(
            &mut state,
            &Event::EngageResult {
                result: Ok(EngagementReceipt {
                    message: EngagementKind::JoinVendor.confirmation().to_string(),
                }),
            },
        )
        .unwrap();
        assert!(!state.engagement_busy);
        assert_eq!(state.banner.as_deref(), Some("Vendor application started!"));
    }

    #[test]
    fn engagement_closes_the_mobile_menu() {
        let mut state = LandingState::default();
        handle_event(&mut state, &Event::MenuToggled).unwrap();
        assert!(state.menu_open);
        handle_event(&mut state, &Event::EngageRequested(EngagementKind::GetStarted)).unwrap();
        assert!(!state.menu_open);
    }

    #[test]
    fn ticks_rotate_through_loaded_testimonials() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::TestimonialTick).unwrap();
        assert_eq!(state.active_testimonial().unwrap().id, 2);
        handle_event(&mut state, &Event::TestimonialTick).unwrap();
        assert_eq!(state.active_testimonial().unwrap().id, 1);
    }
}
