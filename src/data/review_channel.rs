//! Review channel data repository backed by a JSON file.
//!
//! The file is a flat object mapping guild ID strings to channel IDs:
//!
//! ```json
//! {
//!   "123": 456
//! }
//! ```
//!
//! The whole file is loaded into memory once at startup and rewritten in full on every
//! change. Writes go to a sibling temporary file that is then renamed over the original,
//! and the in-memory map is only updated after the rename succeeds, so memory and disk
//! never disagree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::store::StoreError,
    model::review_channel::{ReviewChannel, UpsertReviewChannelParam},
};

/// Channel ID as stored in the file.
///
/// Written as an integer; string values are accepted when loading so files edited by hand
/// or by older tooling still load.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum StoredChannelId {
    Int(u64),
    Str(String),
}

impl StoredChannelId {
    fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(id) => Some(*id),
            Self::Str(id) => id.trim().parse().ok(),
        }
    }
}

/// Repository providing access to the guild review channel configuration.
///
/// Clones share the same in-memory map and file path.
#[derive(Clone)]
pub struct ReviewChannelRepository {
    path: Arc<PathBuf>,
    channels: Arc<RwLock<BTreeMap<String, u64>>>,
}

impl ReviewChannelRepository {
    /// Creates an empty repository that persists to `path`.
    ///
    /// Nothing is read from or written to disk until the first change.
    ///
    /// # Arguments
    /// - `path` - Location of the review channel JSON file
    ///
    /// # Returns
    /// - `ReviewChannelRepository` - Repository with no configured channels
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            channels: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Loads the repository from the JSON file at `path`.
    ///
    /// A missing file yields an empty repository. An unreadable or malformed file is
    /// logged and also yields an empty repository, so a bad file never prevents the bot
    /// from starting. Entries whose channel ID cannot be parsed are skipped with a warning.
    ///
    /// # Arguments
    /// - `path` - Location of the review channel JSON file
    ///
    /// # Returns
    /// - `ReviewChannelRepository` - Repository holding every valid entry in the file
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let repo = Self::new(path);

        match read_file(&repo.path).await {
            Ok(Some(stored)) => {
                let mut channels = repo.channels.write().await;
                for (guild_id, channel_id) in stored {
                    match channel_id.as_u64() {
                        Some(id) => {
                            channels.insert(guild_id, id);
                        }
                        None => tracing::warn!(
                            "Skipping review channel entry for guild {} with invalid channel ID {:?}",
                            guild_id,
                            channel_id
                        ),
                    }
                }
                tracing::info!(
                    "Loaded {} review channel(s) from {}",
                    channels.len(),
                    repo.path.display()
                );
            }
            Ok(None) => {
                tracing::info!(
                    "No review channel file at {}, starting empty",
                    repo.path.display()
                );
            }
            Err(e) => {
                tracing::error!("Failed to load review channels, starting empty: {}", e);
            }
        }

        repo
    }

    /// Gets the review channel configured for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Some(ReviewChannel)` - The guild has a review channel
    /// - `None` - No review channel configured for the guild
    pub async fn get(&self, guild_id: u64) -> Option<ReviewChannel> {
        self.channels
            .read()
            .await
            .get(&guild_id.to_string())
            .map(|&channel_id| ReviewChannel {
                guild_id,
                channel_id,
            })
    }

    /// Sets the review channel for a guild and persists the configuration.
    ///
    /// Replaces any channel previously set for the guild. The full configuration is
    /// written to disk before the in-memory map is updated; on a write failure the map is
    /// left untouched.
    ///
    /// # Arguments
    /// - `param` - Guild and channel to configure
    ///
    /// # Returns
    /// - `Ok(ReviewChannel)` - The stored configuration
    /// - `Err(StoreError)` - Serializing or writing the file failed
    pub async fn upsert(&self, param: UpsertReviewChannelParam) -> Result<ReviewChannel, StoreError> {
        let mut channels = self.channels.write().await;

        let mut updated = channels.clone();
        updated.insert(param.guild_id.to_string(), param.channel_id);
        write_file(&self.path, &updated).await?;
        *channels = updated;

        tracing::debug!(
            "Set review channel for guild {} to {}",
            param.guild_id,
            param.channel_id
        );

        Ok(ReviewChannel {
            guild_id: param.guild_id,
            channel_id: param.channel_id,
        })
    }

    /// Removes the review channel for a guild and persists the configuration.
    ///
    /// Does not touch the file when the guild has no channel configured.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(ReviewChannel))` - The removed configuration
    /// - `Ok(None)` - The guild had no review channel
    /// - `Err(StoreError)` - Serializing or writing the file failed
    pub async fn delete(&self, guild_id: u64) -> Result<Option<ReviewChannel>, StoreError> {
        let mut channels = self.channels.write().await;
        let key = guild_id.to_string();

        let Some(&channel_id) = channels.get(&key) else {
            return Ok(None);
        };

        let mut updated = channels.clone();
        updated.remove(&key);
        write_file(&self.path, &updated).await?;
        *channels = updated;

        tracing::debug!("Removed review channel {} for guild {}", channel_id, guild_id);

        Ok(Some(ReviewChannel {
            guild_id,
            channel_id,
        }))
    }
}

/// Reads and parses the channel file.
///
/// # Returns
/// - `Ok(Some(map))` - File read and parsed
/// - `Ok(None)` - File does not exist
/// - `Err(StoreError)` - File unreadable or not a JSON object
async fn read_file(path: &Path) -> Result<Option<BTreeMap<String, StoredChannelId>>, StoreError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let stored = serde_json::from_str(&contents).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(stored))
}

/// Writes the channel map to `path` through a temporary file and rename.
async fn write_file(path: &Path, channels: &BTreeMap<String, u64>) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(channels).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    let tmp_path = temp_path(path);
    let io_err = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };

    tokio::fs::write(&tmp_path, json).await.map_err(io_err)?;
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(io_err(e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
