use std::time::Duration;

use crate::{
    data::review_session::{ReviewSessionRepository, MAX_SESSIONS, SESSION_ID_LENGTH},
    model::review_session::CreateReviewSessionParam,
};

mod create;
mod remove;
mod set_message_ids;

fn param(target_user_id: u64) -> CreateReviewSessionParam {
    CreateReviewSessionParam {
        guild_id: 1,
        channel_id: 2,
        target_user_id,
    }
}
