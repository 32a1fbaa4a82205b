use sea_orm_migration::{prelude::*, schema::*};

pub const NAME_MAX_LEN: u32 = 200;
pub const GENRE_MAX_LEN: u32 = 200;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string_len(Movie::Name, NAME_MAX_LEN))
                    .col(string_len(Movie::Genre, GENRE_MAX_LEN))
                    .col(text_null(Movie::Description))
                    .col(big_integer(Movie::Updated))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_genre")
                    .table(Movie::Table)
                    .col(Movie::Genre)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Name,
    Genre,
    Description,
    Updated,
}
