use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// A publication row joined with its author's handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct PublicationView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub author_handle: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RPublication {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicationCreateRes {
    pub id: i32,
}

impl RPublication {
    pub fn prepare(mut self) -> Result<Self, AppError> {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
        if self.title.is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        if self.content.is_empty() {
            return Err(AppError::Validation("content is required".into()));
        }
        Ok(self)
    }
}
