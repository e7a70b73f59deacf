use axum::{routing::get, Router};

use crate::controller::health::alive;

/// Routes of the keep-alive web server.
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}
