use crate::{
    data::review_channel::ReviewChannelRepository,
    model::review_channel::{ReviewChannel, UpsertReviewChannelParam},
};
use test_utils::{builder::TestBuilder, error::TestError};

mod delete;
mod get;
mod load;
