use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    search::GenreQuery,
    templates,
};

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::home_page(&state.config.site_title))
}

pub async fn movie_list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list().await?;
    Ok(Html(templates::movie_list_page(&state.config.site_title, &movies)))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    // Anything that is not a storable id names no movie.
    let id: i32 = id.parse().map_err(|_| AppError::NotFound)?;
    let movie = state.store.get(id).await?;
    Ok(Html(templates::movie_detail_page(&state.config.site_title, &movie)))
}

pub async fn movie_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenreQuery>,
) -> AppResult<Html<String>> {
    let movies = state.store.search_genre(&query).await?;
    Ok(Html(templates::movie_search_page(&state.config.site_title, query.term(), &movies)))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
