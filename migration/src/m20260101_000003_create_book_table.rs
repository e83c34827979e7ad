use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_len(Book::Title, 200))
                    .col(string_len(Book::Author, 100))
                    .col(string_len(Book::Genre, 50))
                    .col(string_len(Book::TitleFolded, 200))
                    .col(string_len(Book::AuthorFolded, 100))
                    .col(string_len(Book::GenreFolded, 50))
                    .col(text(Book::Description))
                    .col(integer(Book::PublishedYear))
                    .col(string_len_null(Book::Isbn, 13).unique_key())
                    .col(double(Book::AverageRating).default(0.0))
                    .col(integer(Book::TotalReviews).default(0))
                    .col(integer(Book::AddedBy))
                    .col(
                        timestamp_with_time_zone(Book::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Book::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_added_by")
                            .from(Book::Table, Book::AddedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the newest-first listing used by every book query
        manager
            .create_index(
                Index::create()
                    .name("idx_book_created_at")
                    .table(Book::Table)
                    .col(Book::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Genre,
    TitleFolded,
    AuthorFolded,
    GenreFolded,
    Description,
    PublishedYear,
    Isbn,
    AverageRating,
    TotalReviews,
    AddedBy,
    CreatedAt,
    UpdatedAt,
}
