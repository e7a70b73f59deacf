//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values. The user has no
/// avatar, so its face URL is Discord's default avatar URL.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `global_name` - Optional display name shown instead of the username
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "alice", Some("Alice"));
/// assert_eq!(user.display_name(), "Alice");
///
/// let user = create_test_user(987654321, "bob", None);
/// assert_eq!(user.display_name(), "bob");
/// ```
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "bot": false,
        "system": false,
        "banner": null,
        "accent_color": null,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
