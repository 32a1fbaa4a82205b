use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::{entities::movie, error::StoreError, search::GenreQuery};

pub use migration::{GENRE_MAX_LEN, NAME_MAX_LEN};

pub type Movie = movie::Model;

/// Fields a caller supplies for a new movie; `id` and `updated` are assigned by the store.
#[derive(Clone, Debug, Default)]
pub struct NewMovie {
    pub name: String,
    pub genre: String,
    pub description: Option<String>,
}

impl NewMovie {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self { name: name.into(), genre: genre.into(), description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        check_len("name", &self.name, NAME_MAX_LEN)?;
        check_len("genre", &self.genre, GENRE_MAX_LEN)
    }
}

fn check_len(field: &str, value: &str, max: u32) -> Result<(), StoreError> {
    let len = value.chars().count();
    if len > max as usize {
        return Err(StoreError::Invalid(format!(
            "{field} is {len} characters, at most {max} allowed"
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewMovie) -> Result<Movie, StoreError> {
        new.validate()?;
        let model = movie::ActiveModel {
            name: Set(new.name),
            genre: Set(new.genre),
            description: Set(new.description),
            ..Default::default()
        };
        let created = model.insert(&self.db).await?;
        debug!(id = created.id, name = %created.name, "created movie");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<Movie, StoreError> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        self.filter(Condition::all()).await
    }

    pub async fn filter(&self, condition: Condition) -> Result<Vec<Movie>, StoreError> {
        let movies = movie::Entity::find()
            .filter(condition)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn search_genre(&self, query: &GenreQuery) -> Result<Vec<Movie>, StoreError> {
        let Some(condition) = query.condition() else {
            debug!("empty genre search, skipping query");
            return Ok(Vec::new());
        };
        let movies = self.filter(condition).await?;
        debug!(genre = %query.term(), count = movies.len(), "genre search");
        Ok(movies)
    }

    /// Writes every caller-editable field of `record` and bumps `updated`.
    pub async fn update(&self, record: Movie) -> Result<Movie, StoreError> {
        NewMovie {
            name: record.name.clone(),
            genre: record.genre.clone(),
            description: record.description.clone(),
        }
        .validate()?;

        let current = self.get(record.id).await?;
        let mut model: movie::ActiveModel = current.into();
        model.name = Set(record.name);
        model.genre = Set(record.genre);
        model.description = Set(record.description);

        let updated = model.update(&self.db).await?;
        debug!(id = updated.id, "updated movie");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "deleted movie");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    pub async fn clear(&self) -> Result<u64, StoreError> {
        let res = movie::Entity::delete_many().exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_bounds_and_degenerate_input() {
        assert!(NewMovie::new("", "").validate().is_ok());
        assert!(NewMovie::new("x".repeat(200), "y".repeat(200)).validate().is_ok());
    }

    #[test]
    fn validate_rejects_overlong_fields() {
        let err = NewMovie::new("x".repeat(201), "Drama").validate().unwrap_err();
        assert!(matches!(err, StoreError::Invalid(msg) if msg.starts_with("name")));

        let err = NewMovie::new("Heat", "g".repeat(201)).validate().unwrap_err();
        assert!(matches!(err, StoreError::Invalid(msg) if msg.starts_with("genre")));
    }

    #[test]
    fn length_is_counted_in_characters() {
        assert!(NewMovie::new("é".repeat(200), "Drama").validate().is_ok());
    }
}
