//! User reference models.
//!
//! Users are owned by the identity provider. The service only reads them to expand
//! `addedBy` on books and `user` on reviews.

use crate::model::user::UserSummaryDto;

/// Identity fields of a user embedded in other resources.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl UserSummary {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }

    /// Converts to a DTO exposing only id and username.
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            email: None,
        }
    }

    /// Converts to a DTO that also exposes the email address.
    pub fn into_dto_with_email(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            email: Some(self.email),
        }
    }
}
