//! Discord bot integration for the review workflow.
//!
//! This module connects the review service to Discord. The bot registers its slash
//! commands when it becomes ready and then dispatches every interaction to the matching
//! handler:
//! - Slash commands (`/setreviewchannel`, `/clearreviewchannel`, `/reviews`)
//! - The "write a review" button on review prompts
//! - The review form submitted from that button
//!
//! The bot runs in its own tokio task next to the optional keep-alive web server and
//! scheduler.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent. Interactions are delivered regardless of
//! intents, and no message content is read.

pub mod command;
pub mod handler;
pub mod response;
pub mod start;
