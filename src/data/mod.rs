//! Repository layer for review state.
//!
//! `ReviewChannelRepository` owns the guild to review-channel mapping persisted in the
//! review channel JSON file. `ReviewSessionRepository` owns the in-memory records of issued
//! review prompts. Both are cheap-to-clone handles around shared, lock-guarded state and
//! are injected into the bot through `BotState`.

pub mod review_channel;
pub mod review_session;

#[cfg(test)]
mod test;
