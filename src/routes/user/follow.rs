use actix_web::{get, post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, EmptyResult};
use crate::types::token::AuthenticatedUser;
use crate::types::user::UserView;

#[post("/{id}/follow")]
pub async fn follow(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
) -> EmptyResult {
    db.follow(path.into_inner(), caller.id).await?;
    Ok(ApiResponse::NoContent)
}

#[post("/{id}/unfollow")]
pub async fn unfollow(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
) -> EmptyResult {
    db.unfollow(path.into_inner(), caller.id).await?;
    Ok(ApiResponse::NoContent)
}

#[get("/{id}/followers")]
pub async fn followers(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<UserView>> {
    Ok(ApiResponse::Ok(db.followers(path.into_inner()).await?))
}

#[get("/{id}/following")]
pub async fn following(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<UserView>> {
    Ok(ApiResponse::Ok(db.following(path.into_inner()).await?))
}
