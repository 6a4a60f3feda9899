use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::password;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

/// Sign-up. The only user route outside the access guard.
#[post("")]
pub async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let body = body.into_inner().prepare()?;
    let secret_hash = password::hash(&body.password)?;

    let id = db
        .create_user(DBUserCreate {
            name: body.name,
            handle: body.handle,
            email: body.email,
            secret_hash,
        })
        .await?;
    info!("created user {id}");

    Ok(ApiResponse::Created(UserCreateRes { id }))
}
