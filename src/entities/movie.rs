use std::fmt;

use sea_orm::{ActiveValue, entity::prelude::*};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub genre: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Unix microseconds of the last create or update.
    pub updated: i64,
}

impl Model {
    pub fn updated_at(&self) -> Option<jiff::Timestamp> {
        jiff::Timestamp::from_microsecond(self.updated).ok()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = jiff::Timestamp::now().as_microsecond();
        // Strictly increasing per record even when the clock has not advanced.
        let floor = match &self.updated {
            ActiveValue::Set(prev) | ActiveValue::Unchanged(prev) => prev.saturating_add(1),
            ActiveValue::NotSet => i64::MIN,
        };
        self.updated = ActiveValue::Set(now.max(floor));
        Ok(self)
    }
}
