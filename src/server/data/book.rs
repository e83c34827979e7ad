use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, IntoCondition, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    book::{Book, BookFilter, CreateBookParams},
    pagination::Pagination,
    rating::RatingSummary,
};

pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new book with a zeroed rating summary.
    pub async fn create(&self, params: CreateBookParams) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now();

        entity::book::ActiveModel {
            title_folded: ActiveValue::Set(params.title.to_lowercase()),
            author_folded: ActiveValue::Set(params.author.to_lowercase()),
            genre_folded: ActiveValue::Set(params.genre.to_lowercase()),
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            genre: ActiveValue::Set(params.genre),
            description: ActiveValue::Set(params.description),
            published_year: ActiveValue::Set(params.published_year),
            isbn: ActiveValue::Set(params.isbn),
            average_rating: ActiveValue::Set(0.0),
            total_reviews: ActiveValue::Set(0),
            added_by: ActiveValue::Set(params.added_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Returns true if a book with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Book::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets a book by id with its owner expanded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        entity::prelude::Book::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
            .map(|(book, owner)| Book::from_entity(book, owner))
            .transpose()
    }

    /// Returns true if a book already uses the given normalized ISBN.
    pub async fn isbn_exists(&self, isbn: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Book::find()
            .filter(entity::book::Column::Isbn.eq(isbn))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of books matching the filter, newest first.
    ///
    /// Author and genre filters are case-insensitive substring matches combined with AND.
    ///
    /// # Returns
    /// - `Ok((books, total))` - The requested page and the total number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &BookFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Book>, u64), DbErr> {
        let mut query = entity::prelude::Book::find();

        if let Some(author) = &filter.author {
            query = query.filter(contains_folded(entity::book::Column::AuthorFolded, author));
        }
        if let Some(genre) = &filter.genre {
            query = query.filter(contains_folded(entity::book::Column::GenreFolded, genre));
        }

        self.fetch_page(query, pagination).await
    }

    /// Gets a page of books whose title or author contains the query, newest first.
    pub async fn search_paginated(
        &self,
        query: &str,
        pagination: &Pagination,
    ) -> Result<(Vec<Book>, u64), DbErr> {
        let select = entity::prelude::Book::find().filter(
            Condition::any()
                .add(contains_folded(entity::book::Column::TitleFolded, query))
                .add(contains_folded(entity::book::Column::AuthorFolded, query)),
        );

        self.fetch_page(select, pagination).await
    }

    /// Overwrites the stored rating summary of a book.
    ///
    /// # Returns
    /// - `Ok(())` - Summary stored
    /// - `Err(DbErr::RecordNotUpdated)` - No book with this id
    pub async fn update_rating_summary(
        &self,
        id: i32,
        summary: &RatingSummary,
    ) -> Result<(), DbErr> {
        let result = entity::prelude::Book::update_many()
            .col_expr(
                entity::book::Column::AverageRating,
                Expr::value(summary.average),
            )
            .col_expr(entity::book::Column::TotalReviews, Expr::value(summary.count))
            .col_expr(entity::book::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::book::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    async fn fetch_page(
        &self,
        select: Select<entity::book::Entity>,
        pagination: &Pagination,
    ) -> Result<(Vec<Book>, u64), DbErr> {
        let paginator = select
            .order_by_desc(entity::book::Column::CreatedAt)
            .order_by_desc(entity::book::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, pagination.limit);

        let total = paginator.num_items().await?;
        if pagination.offset().is_none() {
            return Ok((Vec::new(), total));
        }

        let books = paginator
            .fetch_page(pagination.page_index())
            .await?
            .into_iter()
            .map(|(book, owner)| Book::from_entity(book, owner))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((books, total))
    }
}

/// Matches `text` literally anywhere in a lowercased shadow column.
///
/// `%`, `_` and the escape character itself are escaped so user input never acts as a
/// wildcard.
fn contains_folded(column: entity::book::Column, text: &str) -> impl IntoCondition {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    column.like(LikeExpr::new(pattern).escape('\\'))
}
