//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// Derived fields (`average_rating`, `total_reviews`) start at zero like a freshly
/// added book, but can be overridden to set up inconsistent states on purpose.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db, user.id)
///     .title("Dune")
///     .author("Frank Herbert")
///     .genre("SciFi")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    added_by: i32,
    title: String,
    author: String,
    genre: String,
    description: String,
    published_year: i32,
    isbn: Option<String>,
    average_rating: f64,
    total_reviews: i32,
    created_at: DateTime<Utc>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - genre: `"Fiction"`
    /// - published_year: `2000`
    /// - isbn: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, added_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            added_by,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            genre: "Fiction".to_string(),
            description: format!("Description of book {}", id),
            published_year: 2000,
            isbn: None,
            average_rating: 0.0,
            total_reviews: 0,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn published_year(mut self, published_year: i32) -> Self {
        self.published_year = published_year;
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Overrides the stored rating summary.
    pub fn rating_summary(mut self, average_rating: f64, total_reviews: i32) -> Self {
        self.average_rating = average_rating;
        self.total_reviews = total_reviews;
        self
    }

    /// Sets the creation timestamp, which drives newest-first ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown `added_by`)
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            title_folded: ActiveValue::Set(self.title.to_lowercase()),
            author_folded: ActiveValue::Set(self.author.to_lowercase()),
            genre_folded: ActiveValue::Set(self.genre.to_lowercase()),
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            genre: ActiveValue::Set(self.genre),
            description: ActiveValue::Set(self.description),
            published_year: ActiveValue::Set(self.published_year),
            isbn: ActiveValue::Set(self.isbn),
            average_rating: ActiveValue::Set(self.average_rating),
            total_reviews: ActiveValue::Set(self.total_reviews),
            added_by: ActiveValue::Set(self.added_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values added by `added_by`.
pub async fn create_book(
    db: &DatabaseConnection,
    added_by: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, added_by).build().await
}
