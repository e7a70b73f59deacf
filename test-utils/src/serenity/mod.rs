//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for testing
//! purposes. These factories create valid Serenity objects by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::user::create_test_user;
//!
//! #[tokio::test]
//! async fn test_review_submission() {
//!     let reviewer = create_test_user(222222222, "bob", Some("Bob"));
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

// Re-export commonly used functions for convenience
pub use user::create_test_user;
