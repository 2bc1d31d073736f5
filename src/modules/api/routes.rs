use axum::{routing::get, Router};

use super::controller;

pub fn api_routes() -> Router {
    Router::new()
        .route("/", get(controller::root))
        .route("/users", get(controller::resource))
        .route("/comments", get(controller::resource))
        .route("/posts", get(controller::resource))
}
