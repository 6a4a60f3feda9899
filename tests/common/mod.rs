use sea_orm::ConnectOptions;
use social_api::db::database_service::DatabaseService;
use social_api::utils::token::TokenService;
use std::sync::Arc;

pub mod client;

pub const TEST_SECRET: &[u8] = b"integration-test-signing-secret";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub tokens: TokenService,
}

impl TestContext {
    /// Fresh in-memory SQLite database with migrations applied.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // one connection, or every pooled connection gets its own empty db
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect_with(options)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            tokens: TokenService::new(TEST_SECRET),
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use social_api::types::publication::RPublication;
    use social_api::types::user::RUserCreate;

    pub fn sample_user(handle: &str) -> RUserCreate {
        RUserCreate {
            name: format!("Test {handle}"),
            handle: handle.to_string(),
            email: format!("{handle}@test.com"),
            password: "password123".to_string(),
        }
    }

    pub fn sample_publication(title: &str) -> RPublication {
        RPublication {
            title: title.to_string(),
            content: format!("content of {title}"),
        }
    }
}
