use actix_web::{delete, get, post, put, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::publication::{PublicationCreateRes, PublicationView, RPublication};
use crate::types::response::{ApiResponse, ApiResult, EmptyResult};
use crate::types::token::AuthenticatedUser;

/// Only the author may change or remove a publication.
async fn ensure_author(db: &DatabaseService, caller: &AuthenticatedUser, id: i32) -> Result<(), AppError> {
    if db.get_publication(id).await?.author_id != caller.id {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

#[post("")]
pub async fn create(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    body: web::Json<RPublication>,
) -> ApiResult<PublicationCreateRes> {
    let id = db
        .create_publication(caller.id, body.into_inner().prepare()?)
        .await?;
    Ok(ApiResponse::Created(PublicationCreateRes { id }))
}

/// Caller's feed.
#[get("")]
pub async fn timeline(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
) -> ApiResult<Vec<PublicationView>> {
    Ok(ApiResponse::Ok(db.timeline(caller.id).await?))
}

#[get("/{id}")]
pub async fn get_publication(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<PublicationView> {
    Ok(ApiResponse::Ok(db.get_publication(path.into_inner()).await?))
}

#[put("/{id}")]
pub async fn update_publication(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
    body: web::Json<RPublication>,
) -> EmptyResult {
    let id = path.into_inner();
    let body = body.into_inner().prepare()?;
    ensure_author(&db, &caller, id).await?;

    db.update_publication(id, body).await?;
    Ok(ApiResponse::NoContent)
}

#[delete("/{id}")]
pub async fn delete_publication(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
) -> EmptyResult {
    let id = path.into_inner();
    ensure_author(&db, &caller, id).await?;

    db.delete_publication(id).await?;
    Ok(ApiResponse::NoContent)
}

#[post("/{id}/like")]
pub async fn like(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> EmptyResult {
    db.like_publication(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}

#[post("/{id}/unlike")]
pub async fn unlike(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> EmptyResult {
    db.unlike_publication(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
