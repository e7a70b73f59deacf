//! Reviewbot Test Utils
//!
//! Provides shared testing utilities for the review bot. This crate offers a builder for
//! creating isolated test contexts backed by a temporary directory that holds the review
//! channel file, plus factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for seeding the review channel file
//! - **TestContext**: Test environment owning the temporary directory
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for Serenity structs such as `User`
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_channel_loading() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_review_channel(123, 456)
//!         .build()
//!         .await?;
//!
//!     let path = test.channel_file();
//!     // Load the repository from `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
