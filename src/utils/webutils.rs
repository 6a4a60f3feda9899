use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    middleware::Next,
    web, Error, HttpMessage,
};
use tracing::warn;

use crate::types::{error::AppError, token::AuthenticatedUser};
use crate::utils::token::{extract_token, TokenService};

/// Gate for every scope that requires authentication. Runs before routing
/// reaches a handler, so a rejected request never touches the store.
pub async fn access_guard(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let verified = match req.app_data::<web::Data<TokenService>>() {
        Some(tokens) => tokens.verify(extract_token(authorization_header(&req))),
        None => Err(AppError::Internal("token service not configured".into())),
    };

    match verified {
        Ok(id) => {
            req.extensions_mut().insert(AuthenticatedUser { id });
            Ok(next.call(req).await?.map_into_left_body())
        }
        Err(e) => {
            warn!("rejected {} {}: {}", req.method(), req.path(), e);
            Ok(req.error_response(e).map_into_right_body())
        }
    }
}

fn authorization_header(req: &ServiceRequest) -> &str {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Mutations on a user record are only allowed for that user.
pub fn ensure_self(caller: &AuthenticatedUser, target: i32) -> Result<(), AppError> {
    if caller.id != target {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
