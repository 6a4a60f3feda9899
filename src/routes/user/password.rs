use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, EmptyResult};
use crate::types::token::AuthenticatedUser;
use crate::types::user::RPasswordUpdate;
use crate::utils::{password, webutils::ensure_self};

#[post("/{id}/update-password")]
pub async fn update_password(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
    body: web::Json<RPasswordUpdate>,
) -> EmptyResult {
    let id = path.into_inner();
    ensure_self(&caller, id)?;
    let body = body.into_inner().prepare()?;

    let current_hash = db.get_secret_hash(id).await?;
    if !password::verify(&body.current, &current_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    db.update_secret_hash(id, password::hash(&body.new)?).await?;
    info!("user {id} changed password");
    Ok(ApiResponse::NoContent)
}
