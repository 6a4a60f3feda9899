use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::error::AppError;

/// Public projection of a user row. Never carries the secret hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub handle: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserView {
    fn from(m: entity::user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            handle: m.handle,
            email: m.email,
            created_at: m.created_at,
        }
    }
}

/// What the authentication entry point needs and nothing else.
#[derive(Debug, Clone, FromQueryResult)]
pub struct Credentials {
    pub id: i32,
    pub secret_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RUserCreate {
    pub name: String,
    pub handle: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RUserUpdate {
    pub name: String,
    pub handle: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub name: String,
    pub handle: String,
    pub email: String,
    pub secret_hash: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub id: i32,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RPasswordUpdate {
    pub current: String,
    pub new: String,
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub user: Option<String>,
}

impl RUserCreate {
    /// Trims every field and rejects blanks or an implausible email.
    pub fn prepare(mut self) -> Result<Self, AppError> {
        self.name = self.name.trim().to_string();
        self.handle = self.handle.trim().to_string();
        self.email = self.email.trim().to_string();
        require("name", &self.name)?;
        require("handle", &self.handle)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        check(&self)?;
        Ok(self)
    }
}

impl RUserUpdate {
    pub fn prepare(mut self) -> Result<Self, AppError> {
        self.name = self.name.trim().to_string();
        self.handle = self.handle.trim().to_string();
        self.email = self.email.trim().to_string();
        require("name", &self.name)?;
        require("handle", &self.handle)?;
        require("email", &self.email)?;
        check(&self)?;
        Ok(self)
    }
}

impl RPasswordUpdate {
    pub fn prepare(self) -> Result<Self, AppError> {
        require("current", &self.current)?;
        require("new", &self.new)?;
        Ok(self)
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn check(payload: &impl Validate) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
