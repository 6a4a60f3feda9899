use actix_web::get;

use crate::types::response::{ApiResponse, EmptyResult};

#[get("")]
pub async fn health(
    _req: actix_web::HttpRequest
) -> EmptyResult {
    Ok(ApiResponse::EmptyOk)
}
