use actix_web::{delete, get, put, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::publication::PublicationView;
use crate::types::response::{ApiResponse, ApiResult, EmptyResult};
use crate::types::token::AuthenticatedUser;
use crate::types::user::{RUserUpdate, SearchQuery, UserView};
use crate::utils::webutils::ensure_self;

#[get("")]
pub async fn search(
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<UserView>> {
    let filter = query.into_inner().user.unwrap_or_default();
    Ok(ApiResponse::Ok(db.search_users(filter.trim()).await?))
}

#[get("/{id}")]
pub async fn get_user(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<UserView> {
    Ok(ApiResponse::Ok(db.get_user_by_id(path.into_inner()).await?))
}

#[put("/{id}")]
pub async fn update_user(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
    body: web::Json<RUserUpdate>,
) -> EmptyResult {
    let id = path.into_inner();
    ensure_self(&caller, id)?;

    db.update_user(id, body.into_inner().prepare()?).await?;
    Ok(ApiResponse::NoContent)
}

#[delete("/{id}")]
pub async fn delete_user(
    db: web::Data<Arc<DatabaseService>>,
    caller: web::ReqData<AuthenticatedUser>,
    path: web::Path<i32>,
) -> EmptyResult {
    let id = path.into_inner();
    ensure_self(&caller, id)?;

    db.delete_user(id).await?;
    info!("deleted user {id}");
    Ok(ApiResponse::NoContent)
}

#[get("/{id}/publications")]
pub async fn publications(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<PublicationView>> {
    Ok(ApiResponse::Ok(db.list_publications_by_author(path.into_inner()).await?))
}
