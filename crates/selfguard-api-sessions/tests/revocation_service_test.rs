//! Integration tests for the revocation service.
//!
//! Cover the ownership, idempotence, and current-session safety
//! invariants end to end. Require `TEST_DATABASE_URL`; each test is a
//! no-op without it.

mod common;

use common::TEST_PASSWORD;
use selfguard_api_sessions::{
    ApiSessionsError, RequestContext, RevocationEvent, RevocationService,
};

macro_rules! require_pool {
    () => {
        match common::try_test_pool().await {
            Some(pool) => pool,
            None => {
                eprintln!("skipping: TEST_DATABASE_URL not set");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_wrong_password_is_rejected_and_nothing_changes() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let current = common::create_test_session(&pool, user, None).await;
    let other = common::create_test_session(&pool, user, None).await;
    let ctx = RequestContext::new(user, current, None);

    let err = service
        .end_all_other_sessions(&ctx, "not the password")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiSessionsError::InvalidCredentials));

    assert!(common::is_active(&pool, current).await);
    assert!(common::is_active(&pool, other).await);
}

#[tokio::test]
async fn test_blank_password_is_a_field_validation_error() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let current = common::create_test_session(&pool, user, None).await;
    let ctx = RequestContext::new(user, current, None);

    let err = service.end_all_other_sessions(&ctx, "").await.unwrap_err();
    match err {
        ApiSessionsError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("password"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_end_session_on_foreign_session_is_a_noop() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let victim = common::create_test_user(&pool).await;

    let current = common::create_test_session(&pool, user, None).await;
    let foreign = common::create_test_session(&pool, victim, None).await;
    let ctx = RequestContext::new(user, current, None);

    // Succeeds (benign no-op) but must not touch the other user's row.
    let event = service
        .end_session(&ctx, foreign, TEST_PASSWORD)
        .await
        .unwrap();
    assert_eq!(event, RevocationEvent::SessionEnded);
    assert!(common::is_active(&pool, foreign).await);
}

#[tokio::test]
async fn test_end_session_twice_converges() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let current = common::create_test_session(&pool, user, None).await;
    let target = common::create_test_session(&pool, user, None).await;
    let ctx = RequestContext::new(user, current, None);

    let first = service.end_session(&ctx, target, TEST_PASSWORD).await.unwrap();
    let second = service.end_session(&ctx, target, TEST_PASSWORD).await.unwrap();

    assert_eq!(first, RevocationEvent::SessionEnded);
    assert_eq!(second, RevocationEvent::SessionEnded);
    assert!(!common::is_active(&pool, target).await);
}

#[tokio::test]
async fn test_end_all_other_sessions_scenario() {
    // User has sessions {A(current), B(active), C(finished)}.
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let a = common::create_test_session(&pool, user, None).await;
    let b = common::create_test_session(&pool, user, None).await;
    let c = common::create_test_session(&pool, user, None).await;
    common::finish_session(&pool, c).await;

    let ctx = RequestContext::new(user, a, None);
    let event = service
        .end_all_other_sessions(&ctx, TEST_PASSWORD)
        .await
        .unwrap();

    // Only B transitions; A stays active, C was already terminal.
    assert_eq!(event, RevocationEvent::AllSessionsEnded { ended: 1 });
    assert!(common::is_active(&pool, a).await);
    assert!(!common::is_active(&pool, b).await);
    assert!(!common::is_active(&pool, c).await);
}

#[tokio::test]
async fn test_sign_out_device_spares_other_users_on_shared_device() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let other_user = common::create_test_user(&pool).await;

    let device = common::create_test_device(&pool, user, "desktop").await;
    let current = common::create_test_session(&pool, user, None).await;
    let mine = common::create_test_session(&pool, user, Some(device)).await;
    let theirs = common::create_test_session(&pool, other_user, Some(device)).await;

    let ctx = RequestContext::new(user, current, None);
    let event = service
        .sign_out_device(&ctx, device, TEST_PASSWORD)
        .await
        .unwrap();

    assert_eq!(event, RevocationEvent::DeviceSignedOut { ended: 1 });
    assert!(!common::is_active(&pool, mine).await);
    assert!(common::is_active(&pool, theirs).await);
}

#[tokio::test]
async fn test_sign_out_unknown_device_is_a_noop() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let victim = common::create_test_user(&pool).await;
    let foreign_device = common::create_test_device(&pool, victim, "phone").await;
    let victim_session =
        common::create_test_session(&pool, victim, Some(foreign_device)).await;

    let current = common::create_test_session(&pool, user, None).await;
    let ctx = RequestContext::new(user, current, None);

    let event = service
        .sign_out_device(&ctx, foreign_device, TEST_PASSWORD)
        .await
        .unwrap();

    assert_eq!(event, RevocationEvent::DeviceSignedOut { ended: 0 });
    assert!(common::is_active(&pool, victim_session).await);
}

#[tokio::test]
async fn test_sign_out_all_other_devices_scenario() {
    // Devices {D1(current, sessions=[A]), D2(sessions=[B])}.
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let d1 = common::create_test_device(&pool, user, "desktop").await;
    let d2 = common::create_test_device(&pool, user, "phone").await;

    let a = common::create_test_session(&pool, user, Some(d1)).await;
    let b = common::create_test_session(&pool, user, Some(d2)).await;

    let ctx = RequestContext::new(user, a, Some(d1));
    let event = service
        .sign_out_all_other_devices(&ctx, TEST_PASSWORD)
        .await
        .unwrap();

    assert_eq!(event, RevocationEvent::AllDevicesSignedOut { ended: 1 });
    assert!(common::is_active(&pool, a).await);
    assert!(!common::is_active(&pool, b).await);
}

#[tokio::test]
async fn test_listings_flag_current_and_order_devices() {
    let pool = require_pool!();
    let service = RevocationService::new(pool.clone());

    let user = common::create_test_user(&pool).await;
    let d1 = common::create_test_device(&pool, user, "phone").await;
    let d2 = common::create_test_device(&pool, user, "desktop").await;

    let s1 = common::create_test_session(&pool, user, Some(d1)).await;
    let _s2 = common::create_test_session(&pool, user, Some(d2)).await;

    let ctx = RequestContext::new(user, s1, Some(d1));

    let sessions = service.list_sessions(&ctx).await.unwrap();
    assert_eq!(sessions.len(), 2);
    let current: Vec<_> = sessions.iter().filter(|s| s.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, *s1.as_uuid());

    let devices = service.list_devices(&ctx).await.unwrap();
    assert_eq!(devices.len(), 2);
    // Current device sorts first even though d2 was registered later.
    assert_eq!(devices[0].id, *d1.as_uuid());
    assert!(devices[0].is_current);
    assert_eq!(devices[0].sessions.len(), 1);
    assert!(devices[0].sessions[0].is_current);
}
