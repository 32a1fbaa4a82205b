//! In-process test fixture: an in-memory database behind the real router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use reelbase::{
    AppState,
    config::Config,
    db, router,
    store::{Movie, MovieStore, NewMovie},
};

pub struct TestFixture {
    pub router: Router,
    pub store: MovieStore,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}

pub async fn memory_store() -> MovieStore {
    let db = db::connect_and_migrate("sqlite::memory:").await.expect("in-memory database");
    MovieStore::new(db)
}

impl TestFixture {
    pub async fn new() -> Self {
        let store = memory_store().await;
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            _ => None,
        })
        .expect("test config");

        let state = Arc::new(AppState { config: Arc::new(config), store: store.clone() });
        Self { router: router(state), store }
    }

    pub async fn add(&self, name: &str, genre: &str, description: Option<&str>) -> Movie {
        let mut movie = NewMovie::new(name, genre);
        movie.description = description.map(str::to_string);
        self.store.create(movie).await.expect("create movie")
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse { status, body: String::from_utf8(bytes.to_vec()).unwrap() }
    }
}
