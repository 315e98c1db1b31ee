//! Test helpers for selfguard-api-sessions integration tests.

#![allow(dead_code)]

use selfguard_core::{DeviceId, SessionId, UserId};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// Test database URL environment variable.
pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

/// Password used for all fixture users.
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Connect to the test database and apply migrations.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set so the suite can
/// run without a local Postgres.
pub async fn try_test_pool() -> Option<PgPool> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let database_url = std::env::var(TEST_DATABASE_URL_ENV).ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    selfguard_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Create a test user with [`TEST_PASSWORD`] and return its ID.
pub async fn create_test_user(pool: &PgPool) -> UserId {
    let id = Uuid::new_v4();
    let email = format!("user-{}@example.test", &id.to_string()[..8]);

    // Reduced Argon2 parameters keep the test suite fast.
    let hash = selfguard_auth::PasswordHasher::with_params(4096, 1, 1)
        .expect("valid test parameters")
        .hash(TEST_PASSWORD)
        .expect("Failed to hash test password");

    sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(&email)
        .bind(&hash)
        .execute(pool)
        .await
        .expect("Failed to create test user");

    UserId::from_uuid(id)
}

/// Create a test device and return its ID.
pub async fn create_test_device(pool: &PgPool, user_id: UserId, device_type: &str) -> DeviceId {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO devices (id, user_id, device_type, platform, browser)
        VALUES ($1, $2, $3, 'macOS', 'Firefox')
        "#,
    )
    .bind(id)
    .bind(user_id.as_uuid())
    .bind(device_type)
    .execute(pool)
    .await
    .expect("Failed to create test device");

    DeviceId::from_uuid(id)
}

/// Create an active test session and return its ID.
pub async fn create_test_session(
    pool: &PgPool,
    user_id: UserId,
    device_id: Option<DeviceId>,
) -> SessionId {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO sessions (id, user_id, device_id, ip_address)
        VALUES ($1, $2, $3, '203.0.113.7')
        "#,
    )
    .bind(id)
    .bind(user_id.as_uuid())
    .bind(device_id.map(|d| *d.as_uuid()))
    .execute(pool)
    .await
    .expect("Failed to create test session");

    SessionId::from_uuid(id)
}

/// Mark a session finished directly, bypassing the service.
pub async fn finish_session(pool: &PgPool, session_id: SessionId) {
    sqlx::query(
        "UPDATE sessions SET finished_at = NOW(), status = 'inactive' WHERE id = $1",
    )
    .bind(session_id.as_uuid())
    .execute(pool)
    .await
    .expect("Failed to finish session");
}

/// Whether the session is still active.
pub async fn is_active(pool: &PgPool, session_id: SessionId) -> bool {
    let row: (Option<chrono::DateTime<chrono::Utc>>,) =
        sqlx::query_as("SELECT finished_at FROM sessions WHERE id = $1")
            .bind(session_id.as_uuid())
            .fetch_one(pool)
            .await
            .expect("Failed to fetch session");
    row.0.is_none()
}
