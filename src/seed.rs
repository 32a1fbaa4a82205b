use tracing::info;

use crate::{
    error::StoreError,
    store::{MovieStore, NewMovie},
};

const SAMPLE_MOVIES: &[(&str, &str, &str)] = &[
    (
        "The Shawshank Redemption",
        "Drama",
        "A man wrongfully imprisoned finds hope and redemption through the common decency of the men serving time with him.",
    ),
    (
        "The Godfather",
        "Crime",
        "The aging patriarch of an organized crime dynasty transfers control to his reluctant son.",
    ),
    (
        "Inception",
        "Sci-Fi",
        "A thief who steals secrets from dreams is given the final job of planting an idea deep within a target's subconscious.",
    ),
    (
        "The Dark Knight",
        "Action",
        "Batman faces his greatest challenge yet as the Joker wreaks havoc and chaos on Gotham City.",
    ),
    (
        "Forrest Gump",
        "Drama",
        "A man with a low IQ accomplishes great things in his life and influences the lives of those around him.",
    ),
];

pub fn sample_movies() -> Vec<NewMovie> {
    SAMPLE_MOVIES
        .iter()
        .map(|(name, genre, description)| NewMovie::new(*name, *genre).with_description(*description))
        .collect()
}

/// Replaces the whole catalog with the sample movies. Returns the resulting row count.
pub async fn populate(store: &MovieStore) -> Result<u64, StoreError> {
    let removed = store.clear().await?;
    if removed > 0 {
        info!(removed, "cleared existing movies");
    }

    for movie in sample_movies() {
        let created = store.create(movie).await?;
        info!(id = created.id, name = %created, "created movie");
    }

    let total = store.count().await?;
    info!(total, "populated database with sample movies");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn memory_store() -> MovieStore {
        MovieStore::new(db::connect_and_migrate("sqlite::memory:").await.unwrap())
    }

    #[tokio::test]
    async fn populate_inserts_sample_movies() {
        let store = memory_store().await;
        assert_eq!(populate(&store).await.unwrap(), 5);

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            [
                "The Shawshank Redemption",
                "The Godfather",
                "Inception",
                "The Dark Knight",
                "Forrest Gump",
            ]
        );
    }

    #[tokio::test]
    async fn populate_replaces_existing_rows() {
        let store = memory_store().await;
        store.create(NewMovie::new("Leftover", "Horror")).await.unwrap();

        assert_eq!(populate(&store).await.unwrap(), 5);
        assert_eq!(populate(&store).await.unwrap(), 5);
        let movies = store.list().await.unwrap();
        assert!(movies.iter().all(|m| m.name != "Leftover"));
    }

    #[test]
    fn every_sample_has_a_description() {
        assert!(sample_movies().iter().all(|m| m.description.is_some()));
        assert!(sample_movies().iter().all(|m| m.validate().is_ok()));
    }
}
