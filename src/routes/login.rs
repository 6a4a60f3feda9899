use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::{password, token::TokenService};

/// Exchanges email + password for a signed identity assertion.
#[post("")]
pub async fn login(
    db: web::Data<Arc<DatabaseService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let body = body.into_inner();

    // unknown email and wrong password look the same from outside
    let credentials = match db.get_credentials_by_email(body.email.trim()).await {
        Ok(c) => c,
        Err(AppError::NotFound) => return Err(AppError::InvalidCredentials),
        Err(e) => return Err(e),
    };
    if !password::verify(&body.password, &credentials.secret_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = tokens.issue(credentials.id)?;
    info!("user {} logged in", credentials.id);

    Ok(ApiResponse::Ok(LoginRes { id: credentials.id, token }))
}
