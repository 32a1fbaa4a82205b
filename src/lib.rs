pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod paths;
pub mod routes;
pub mod search;
pub mod seed;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(paths::HOME, get(routes::home))
        .route(paths::MOVIE_LIST, get(routes::movie_list))
        .route(paths::MOVIE_DETAIL, get(routes::movie_detail))
        .route(paths::SEARCH, get(routes::movie_search))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
