use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// File name of the review channel file inside the test directory.
pub const CHANNEL_FILE_NAME: &str = "review_channel.json";

/// Test context owning a temporary directory for the review channel file.
///
/// The directory and everything in it is deleted when the context is dropped, so each
/// test works on its own isolated file.
pub struct TestContext {
    /// Temporary directory holding the channel file.
    pub dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the review channel file inside the test directory.
    ///
    /// The file only exists if the builder seeded it or the code under test wrote it.
    pub fn channel_file(&self) -> PathBuf {
        self.dir.path().join(CHANNEL_FILE_NAME)
    }

    /// Path inside a directory that does not exist, for provoking write failures.
    pub fn unwritable_channel_file(&self) -> PathBuf {
        self.dir.path().join("missing").join(CHANNEL_FILE_NAME)
    }

    pub fn dir_path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads the channel file and parses it as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed file contents
    /// - `Err(TestError)` - File missing, unreadable, or not JSON
    pub async fn read_channel_file(&self) -> Result<serde_json::Value, TestError> {
        let contents = tokio::fs::read_to_string(self.channel_file()).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}
