//! Route table for the public, read-only surface.
//!
//! Everything here is anonymous-access; visibility of unpublished content
//! is enforced at the query layer, not per-route.

use axum::routing::get;
use axum::Router;

use crate::views::{self, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::home))
        .route("/recipes/category/{category_id}/", get(views::category))
        .route("/recipes/{id}/", get(views::recipe))
        .with_state(state)
}
