use thiserror::Error;

/// Failures reading or writing the review channel file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error while reading, writing, or renaming the channel file.
    #[error("Review channel file I/O failed for '{path}': {source}")]
    Io {
        /// Path of the file being accessed
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The channel file contents could not be serialized or deserialized.
    #[error("Review channel file '{path}' is not valid JSON: {source}")]
    Json {
        /// Path of the file being accessed
        path: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
