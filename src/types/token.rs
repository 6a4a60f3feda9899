use serde::{Deserialize, Serialize};

/// Claim set carried inside every identity assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub authorized: bool,
    /// Unix seconds.
    pub exp: i64,
    #[serde(rename = "usuarioID")]
    pub user_id: u64,
}

/// Caller identity established by the access guard, available to handlers
/// through `web::ReqData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i32,
}
