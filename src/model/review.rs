//! Domain models for review submissions.
//!
//! Holds the validated rating, the raw form values, the reviewer identity, and the
//! rendered review that is posted to the review channel. Rendering is pure so the
//! output can be checked without a Discord connection.

use chrono::{DateTime, FixedOffset, Utc};
use serenity::all::User;

use crate::error::review::ReviewError;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating, also the number of glyphs in the star bar.
pub const MAX_RATING: u8 = 5;

/// Glyph for a filled star.
pub const FILLED_STAR: &str = "⭐";
/// Glyph for an empty star.
pub const EMPTY_STAR: &str = "☆";

/// Text shown in place of the review body when the reviewer left it empty.
pub const NO_FEEDBACK_PLACEHOLDER: &str = "(The reviewer did not leave any comments)";

/// Review timestamps are rendered in UTC+8.
pub const REVIEW_OFFSET: FixedOffset = match FixedOffset::east_opt(8 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC+8 is a valid offset"),
};

/// Format of the review time field.
pub const REVIEW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time in the review timezone.
pub fn review_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&REVIEW_OFFSET)
}

/// A rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Parses the rating form field.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Arguments
    /// - `raw` - Value typed into the rating field
    ///
    /// # Returns
    /// - `Ok(Rating)` - Integer within 1 to 5
    /// - `Err(ReviewError::InvalidRatingFormat)` - Not an integer
    /// - `Err(ReviewError::RatingOutOfRange)` - Integer outside 1 to 5
    pub fn parse(raw: &str) -> Result<Self, ReviewError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| ReviewError::InvalidRatingFormat(trimmed.to_string()))?;

        if value < MIN_RATING as i64 || value > MAX_RATING as i64 {
            return Err(ReviewError::RatingOutOfRange(value));
        }

        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Renders the rating as filled stars followed by empty stars, five glyphs in total.
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        let empty = (MAX_RATING - self.0) as usize;
        format!("{}{}", FILLED_STAR.repeat(filled), EMPTY_STAR.repeat(empty))
    }
}

/// Raw values submitted through the review form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    /// Product or service name.
    pub product: String,
    /// Unvalidated rating text.
    pub rating: String,
    /// Free-text review body, possibly empty.
    pub feedback: String,
}

/// Custom ID of the product name input.
pub const PRODUCT_FIELD: &str = "product";
/// Custom ID of the rating input.
pub const RATING_FIELD: &str = "rating";
/// Custom ID of the feedback input.
pub const FEEDBACK_FIELD: &str = "feedback";

impl ReviewForm {
    /// Collects form values from submitted `(custom ID, value)` pairs.
    ///
    /// Unknown inputs are ignored and missing inputs stay empty, which the rating
    /// validation then rejects.
    pub fn from_fields<'f>(fields: impl IntoIterator<Item = (&'f str, &'f str)>) -> Self {
        let mut form = Self::default();
        for (custom_id, value) in fields {
            match custom_id {
                PRODUCT_FIELD => form.product = value.to_string(),
                RATING_FIELD => form.rating = value.to_string(),
                FEEDBACK_FIELD => form.feedback = value.to_string(),
                _ => {}
            }
        }
        form
    }
}

/// Identity of the user submitting a review.
#[derive(Debug, Clone, PartialEq)]
pub struct Reviewer {
    /// Discord user ID.
    pub id: u64,
    /// Name shown as the embed author (guild nickname when available).
    pub display_name: String,
    /// Avatar URL shown next to the author name.
    pub avatar_url: String,
}

impl Reviewer {
    /// Builds a reviewer from a Discord user, preferring the given guild nickname.
    ///
    /// # Arguments
    /// - `user` - The Discord user who submitted the form
    /// - `nick` - Guild nickname of the member, if any
    pub fn from_user(user: &User, nick: Option<&str>) -> Self {
        Self {
            id: user.id.get(),
            display_name: nick
                .map(str::to_string)
                .unwrap_or_else(|| user.display_name().to_string()),
            avatar_url: user.face(),
        }
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// A validated review ready for rendering.
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    pub product: String,
    pub rating: Rating,
    pub feedback: String,
    pub reviewer: Reviewer,
    pub submitted_at: DateTime<FixedOffset>,
}

impl ReviewSubmission {
    /// Renders the submission into the content of the review channel embed.
    ///
    /// Empty or whitespace-only feedback is replaced with [`NO_FEEDBACK_PLACEHOLDER`], and
    /// the time field is formatted in UTC+8 regardless of the submission's offset.
    pub fn render(&self) -> RenderedReview {
        let feedback = if self.feedback.trim().is_empty() {
            NO_FEEDBACK_PLACEHOLDER.to_string()
        } else {
            self.feedback.clone()
        };

        RenderedReview {
            title: format!("📝 New product review - {}", self.product),
            description: format!("From: {}", self.reviewer.mention()),
            product: self.product.clone(),
            rating: format!(
                "{} (`{}/{}`)",
                self.rating.stars(),
                self.rating.value(),
                MAX_RATING
            ),
            feedback,
            time: self
                .submitted_at
                .with_timezone(&REVIEW_OFFSET)
                .format(REVIEW_TIME_FORMAT)
                .to_string(),
            author_name: self.reviewer.display_name.clone(),
            author_icon_url: self.reviewer.avatar_url.clone(),
            footer: "Thank you for your feedback!".to_string(),
            timestamp: self.submitted_at,
        }
    }
}

/// Review content as posted to the review channel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReview {
    pub title: String,
    pub description: String,
    pub product: String,
    /// Star bar with the numeric ratio, e.g. ``⭐⭐⭐☆☆ (`3/5`)``.
    pub rating: String,
    pub feedback: String,
    /// Submission time as `YYYY-MM-DD HH:MM:SS` in UTC+8.
    pub time: String,
    pub author_name: String,
    pub author_icon_url: String,
    pub footer: String,
    pub timestamp: DateTime<FixedOffset>,
}
