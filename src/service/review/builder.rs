//! Review embed and component builders.
//!
//! Converts rendered reviews and prompt details into Serenity builders. Shared by the
//! Discord delivery implementation and the command handlers so every review message is
//! formatted the same way.

use chrono::{DateTime, FixedOffset};
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor,
    CreateEmbedFooter, CreateInputText, CreateModal, InputTextStyle, Timestamp,
};

use crate::{
    error::review::ReviewError,
    model::review::{RenderedReview, FEEDBACK_FIELD, PRODUCT_FIELD, RATING_FIELD},
    util::custom_id::ReviewCustomId,
};

/// Maximum length of the product name input.
pub const PRODUCT_MAX_LENGTH: u16 = 100;
/// Maximum length of the feedback input.
///
/// Longer than Discord's 1024-character embed field limit, so the feedback is placed in
/// the embed description, which allows 4096.
pub const FEEDBACK_MAX_LENGTH: u16 = 2000;

/// Embed color of posted reviews (Discord blurple).
pub const REVIEW_COLOR: u32 = 0x5865f2;
/// Embed color of review prompts.
pub const PROMPT_COLOR: u32 = 0x9b59b6;
/// Embed color of configuration confirmations.
pub const CONFIRM_COLOR: u32 = 0x2ecc71;

/// Converts a review time to a Discord embed timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - Timestamp for the embed
/// - `Err(ReviewError::InvalidTimestamp)` - Time outside Discord's accepted range
pub fn to_discord_timestamp(time: DateTime<FixedOffset>) -> Result<Timestamp, ReviewError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| ReviewError::InvalidTimestamp {
        timestamp: time.timestamp(),
        reason: e.to_string(),
    })
}

/// Builds the embed posted to the review channel.
///
/// The feedback goes below the reviewer mention in the description; the short values
/// (product, rating, time) are fields.
///
/// # Arguments
/// - `review` - Rendered review content
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(ReviewError::InvalidTimestamp)` - Invalid submission time
pub fn build_review_embed(review: &RenderedReview) -> Result<CreateEmbed, ReviewError> {
    Ok(CreateEmbed::new()
        .title(&review.title)
        .description(review_description(review))
        .color(REVIEW_COLOR)
        .timestamp(to_discord_timestamp(review.timestamp)?)
        .field("Product", &review.product, false)
        .field("Rating", &review.rating, false)
        .field("Time", &review.time, false)
        .author(CreateEmbedAuthor::new(&review.author_name).icon_url(&review.author_icon_url))
        .footer(CreateEmbedFooter::new(&review.footer)))
}

fn review_description(review: &RenderedReview) -> String {
    format!("{}\n\n**Review**\n{}", review.description, review.feedback)
}

/// Builds the prompt embed telling everyone who may fill in the review.
///
/// # Arguments
/// - `target_user_id` - Discord user ID the review is requested from
/// - `now` - Time the prompt is issued
pub fn build_prompt_embed(
    target_user_id: u64,
    now: DateTime<FixedOffset>,
) -> Result<CreateEmbed, ReviewError> {
    Ok(CreateEmbed::new()
        .title("📝 Review system")
        .description(format!(
            "Only <@{}> can press the button below to write a review.",
            target_user_id
        ))
        .color(PROMPT_COLOR)
        .timestamp(to_discord_timestamp(now)?))
}

/// Builds the button that opens the review form for a session.
pub fn build_prompt_button(session_id: &str) -> CreateButton {
    CreateButton::new(ReviewCustomId::open(session_id))
        .label("Write a review")
        .style(ButtonStyle::Success)
}

/// Builds the review form opened by a prompt's button.
///
/// The rating input accepts exactly one character; whether it is a digit from 1 to 5 is
/// checked on submission.
pub fn build_review_form(session_id: &str) -> CreateModal {
    let product = CreateInputText::new(InputTextStyle::Short, "Product name", PRODUCT_FIELD)
        .placeholder("Enter the product or service name")
        .max_length(PRODUCT_MAX_LENGTH)
        .required(true);
    let rating = CreateInputText::new(InputTextStyle::Short, "Rating (1-5)", RATING_FIELD)
        .placeholder("Enter a number from 1 to 5")
        .min_length(1)
        .max_length(1)
        .required(true);
    let feedback = CreateInputText::new(InputTextStyle::Paragraph, "Review", FEEDBACK_FIELD)
        .placeholder("Share your experience or suggestions")
        .max_length(FEEDBACK_MAX_LENGTH)
        .required(false);

    CreateModal::new(ReviewCustomId::submit(session_id), "Submit a review").components(vec![
        CreateActionRow::InputText(product),
        CreateActionRow::InputText(rating),
        CreateActionRow::InputText(feedback),
    ])
}

/// Builds the confirmation shown after setting the review channel.
///
/// # Arguments
/// - `channel_id` - The configured review channel
/// - `author_name` - Display name of the administrator who set it
/// - `author_icon_url` - Avatar URL of the administrator
/// - `now` - Time of the change
pub fn build_channel_set_embed(
    channel_id: u64,
    author_name: &str,
    author_icon_url: &str,
    now: DateTime<FixedOffset>,
) -> Result<CreateEmbed, ReviewError> {
    Ok(CreateEmbed::new()
        .title("✅ Review channel set")
        .description(format!("Reviews will now be posted to <#{}>", channel_id))
        .color(CONFIRM_COLOR)
        .timestamp(to_discord_timestamp(now)?)
        .author(CreateEmbedAuthor::new(author_name).icon_url(author_icon_url))
        .footer(CreateEmbedFooter::new(
            "Make sure the bot is allowed to send messages in that channel",
        )))
}
