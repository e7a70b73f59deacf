//! Domain models for the review workflow.
//!
//! These types carry data between the bot layer, the review service, and the repositories.
//! They contain no Discord client calls; conversion to Serenity builders happens in the
//! service's delivery implementation.

pub mod review;
pub mod review_channel;
pub mod review_session;
