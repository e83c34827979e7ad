use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::Pagination,
    review::{CreateReviewParams, Review},
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review.
    ///
    /// Fails with a unique constraint violation if the user already reviewed the book.
    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();

        entity::review::ActiveModel {
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            book_id: ActiveValue::Set(params.book_id),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    /// Gets a review by id with its author expanded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
            .map(|(review, user)| Review::from_entity(review, user))
            .transpose()
    }

    /// Returns true if the user has already reviewed the book.
    pub async fn exists_for_book_and_user(&self, book_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::BookId.eq(book_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the provided fields to a review and bumps `updated_at`.
    pub async fn update(
        &self,
        review: entity::review::Model,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<entity::review::Model, DbErr> {
        let mut active = review.into_active_model();

        if let Some(rating) = rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = comment {
            active.comment = ActiveValue::Set(comment);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a page of a book's reviews with authors expanded, newest first.
    ///
    /// # Returns
    /// - `Ok((reviews, total))` - The requested page and the book's total review count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated_by_book(
        &self,
        book_id: i32,
        pagination: &Pagination,
    ) -> Result<(Vec<Review>, u64), DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::BookId.eq(book_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, pagination.limit);

        let total = paginator.num_items().await?;
        if pagination.offset().is_none() {
            return Ok((Vec::new(), total));
        }

        let reviews = paginator
            .fetch_page(pagination.page_index())
            .await?
            .into_iter()
            .map(|(review, user)| Review::from_entity(review, user))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((reviews, total))
    }

    /// Gets every rating currently recorded for a book.
    pub async fn ratings_for_book(&self, book_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::BookId.eq(book_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
