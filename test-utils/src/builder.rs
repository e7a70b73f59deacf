use std::collections::BTreeMap;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a seeded review channel file.
///
/// By default no file is written, matching a bot started for the first time. Add
/// channels with `with_review_channel()` or raw contents with `with_channel_file_contents()`
/// before calling `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_review_channel(123, 456)
///     .with_review_channel(789, 1011)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Guild ID to channel ID entries written to the channel file as JSON integers.
    channels: BTreeMap<String, u64>,

    /// Raw file contents, written verbatim instead of `channels` when set.
    ///
    /// Used to test loading of hand-edited or corrupt files.
    raw_contents: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no channel file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            channels: BTreeMap::new(),
            raw_contents: None,
        }
    }

    /// Adds a guild's review channel to the seeded channel file.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID, written as a string key
    /// - `channel_id` - Discord channel ID, written as an integer
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_review_channel(mut self, guild_id: u64, channel_id: u64) -> Self {
        self.channels.insert(guild_id.to_string(), channel_id);
        self
    }

    /// Writes `contents` verbatim as the channel file.
    ///
    /// Takes precedence over any channels added with `with_review_channel()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_channel_file_contents(mut self, contents: &str) -> Self {
        self.raw_contents = Some(contents.to_string());
        self
    }

    /// Builds the test context and writes the channel file if one was configured.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with its temporary directory ready
    /// - `Err(TestError)` - Failed to create the directory or write the file
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        let contents = match self.raw_contents {
            Some(raw) => Some(raw),
            None if !self.channels.is_empty() => Some(serde_json::to_string_pretty(&self.channels)?),
            None => None,
        };

        if let Some(contents) = contents {
            tokio::fs::write(context.channel_file(), contents).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
