use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

use crate::types::{error::AppError, token::Claims};

/// Every assertion is good for exactly this long after issuance.
pub const TOKEN_LIFETIME_HOURS: i64 = 6;

/// Issues and verifies HMAC-signed identity assertions.
///
/// Built once from the configured secret and shared read-only across
/// workers.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // anything outside the HMAC family is refused before the signature
        // is even looked at
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: i32, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let subject = u64::try_from(user_id)
            .map_err(|_| AppError::Internal(format!("cannot issue token for id {user_id}")))?;
        let claims = Claims {
            authorized: true,
            exp: (issued_at + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
            user_id: subject,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Returns the subject of a valid assertion.
    pub fn verify(&self, raw: &str) -> Result<i32, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::MalformedToken);
        }

        let data = decode::<Claims>(raw, &self.decoding, &self.validation).map_err(|e| {
            debug!("token rejected: {e}");
            match e.kind() {
                ErrorKind::InvalidToken
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => AppError::MalformedToken,
                _ => AppError::InvalidToken,
            }
        })?;

        if !data.claims.authorized {
            return Err(AppError::InvalidToken);
        }
        i32::try_from(data.claims.user_id).map_err(|_| AppError::InvalidToken)
    }
}

/// Pulls the credential out of an `Authorization` header value.
///
/// The value must split on single spaces into exactly two parts
/// (`Bearer <token>`); anything else yields `""`, which `verify` rejects
/// as malformed.
pub fn extract_token(header: &str) -> &str {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(token), None) => token,
        _ => "",
    }
}
