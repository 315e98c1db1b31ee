//! Test helpers for selfguard-db integration tests.
//!
//! Database-backed tests run against `TEST_DATABASE_URL` and are
//! skipped when it is not set, so the unit suite stays green without a
//! local Postgres.

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// Test database URL environment variable.
pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

/// Connect to the test database and apply migrations.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn try_test_pool() -> Option<PgPool> {
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

/// Create a test user with the given password and return its ID.
pub async fn create_test_user(pool: &PgPool, password: &str) -> Uuid {
    let id = Uuid::new_v4();
    let email = format!("user-{}@example.test", &id.to_string()[..8]);

    // Reduced Argon2 parameters keep the test suite fast.
    let hash = selfguard_auth::PasswordHasher::with_params(4096, 1, 1)
        .expect("valid test parameters")
        .hash(password)
        .expect("Failed to hash test password");

    sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(&email)
        .bind(&hash)
        .execute(pool)
        .await
        .expect("Failed to create test user");

    id
}

/// Create a test device for a user and return its ID.
pub async fn create_test_device(pool: &PgPool, user_id: Uuid, device_type: &str) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO devices (id, user_id, device_type, platform, browser)
        VALUES ($1, $2, $3, 'macOS', 'Firefox')
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(device_type)
    .execute(pool)
    .await
    .expect("Failed to create test device");

    id
}

/// Create an active test session and return its ID.
pub async fn create_test_session(pool: &PgPool, user_id: Uuid, device_id: Option<Uuid>) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO sessions (id, user_id, device_id, ip_address)
        VALUES ($1, $2, $3, '203.0.113.7')
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(device_id)
    .execute(pool)
    .await
    .expect("Failed to create test session");

    id
}

/// Fetch `finished_at` for a session.
pub async fn finished_at(pool: &PgPool, session_id: Uuid) -> Option<chrono::DateTime<chrono::Utc>> {
    let row: (Option<chrono::DateTime<chrono::Utc>>,) =
        sqlx::query_as("SELECT finished_at FROM sessions WHERE id = $1")
            .bind(session_id)
            .fetch_one(pool)
            .await
            .expect("Failed to fetch session");
    row.0
}
