//! Category entity model and DTOs.

use restaurant_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub title: String,
    pub slug: String,
}

/// DTO for creating a category, also the full body of a `PUT`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub title: String,
    pub slug: String,
}

/// DTO for patching a category. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl From<CreateCategory> for UpdateCategory {
    fn from(input: CreateCategory) -> Self {
        Self {
            title: Some(input.title),
            slug: Some(input.slug),
        }
    }
}
