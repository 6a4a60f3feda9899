use actix_web::{web, App};
use social_api::{
    db::database_service::DatabaseService,
    types::{error::AppError, user::DBUserCreate},
    utils::{password, token::TokenService},
};
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub tokens: TokenService,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>, tokens: TokenService) -> Self {
        TestClient { db, tokens }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.tokens.clone()))
            .configure(social_api::routes::configure_routes)
    }

    /// Inserts a user straight through the repository and hands back its id
    /// plus a freshly issued token.
    pub async fn create_test_user(&self, handle: &str) -> Result<(i32, String), AppError> {
        let secret_hash = password::hash("password123")?;

        let user_id = self.db.create_user(DBUserCreate {
            name: format!("Test {handle}"),
            handle: handle.to_string(),
            email: format!("{handle}@test.com"),
            secret_hash,
        }).await?;

        let access_token = self.tokens.issue(user_id)?;

        Ok((user_id, access_token))
    }
}
