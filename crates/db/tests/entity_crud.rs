//! Integration tests for the entity repositories.
//!
//! Exercises seed data, CRUD paths, unique constraints, login bookkeeping,
//! session lifecycle, and submission ownership scoping against a real
//! database.

use chrono::{Duration, Utc};
use listforge_db::models::platform::{CreatePlatform, UpdatePlatform};
use listforge_db::models::session::CreateSession;
use listforge_db::models::submission::CreateSubmission;
use listforge_db::models::user::{CreateUser, UpdateUser};
use listforge_db::repositories::{
    CategoryRepo, ModelRepo, PlatformRepo, RoleRepo, SessionRepo, SubmissionRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn user_role_id(pool: &PgPool) -> i64 {
    RoleRepo::find_by_name(pool, "user")
        .await
        .unwrap()
        .expect("seeded user role")
        .id
}

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    let role_id = user_role_id(pool).await;
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
            role_id,
        },
    )
    .await
    .unwrap()
    .id
}

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn roles_are_seeded(pool: PgPool) {
    let roles = RoleRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["admin", "user"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn categories_are_seeded(pool: PgPool) {
    let categories = CategoryRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Description", "Keywords"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn models_are_seeded(pool: PgPool) {
    let models = ModelRepo::list(&pool).await.unwrap();
    assert!(!models.is_empty());
    assert!(ModelRepo::find_by_id(&pool, models[0].id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_role_resolves_to_unknown(pool: PgPool) {
    let name = RoleRepo::resolve_name(&pool, 9_999).await.unwrap();
    assert_eq!(name, "unknown");
}

// ---------------------------------------------------------------------------
// Platforms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn platform_crud_roundtrip(pool: PgPool) {
    let created = PlatformRepo::create(
        &pool,
        &CreatePlatform {
            name: "Etsy".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.name, "Etsy");

    let listed = PlatformRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);

    let renamed = PlatformRepo::update(
        &pool,
        created.id,
        &UpdatePlatform {
            name: "Etsy EU".to_string(),
        },
    )
    .await
    .unwrap()
    .expect("platform exists");
    assert_eq!(renamed.name, "Etsy EU");

    assert!(PlatformRepo::delete(&pool, created.id).await.unwrap());
    assert!(PlatformRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_platform_name_rejected(pool: PgPool) {
    let input = CreatePlatform {
        name: "Etsy".to_string(),
    };
    PlatformRepo::create(&pool, &input).await.unwrap();

    let err = PlatformRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_unique_violation(&err, "uq_platforms_name"));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_platform_returns_none(pool: PgPool) {
    let result = PlatformRepo::update(
        &pool,
        42,
        &UpdatePlatform {
            name: "Ghost".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn user_create_and_lookup(pool: PgPool) {
    let id = seed_user(&pool, "maker@example.com").await;

    let by_email = UserRepo::find_by_email(&pool, "maker@example.com")
        .await
        .unwrap()
        .expect("user by email");
    assert_eq!(by_email.id, id);
    assert!(by_email.is_active);
    assert_eq!(by_email.failed_login_count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_rejected(pool: PgPool) {
    seed_user(&pool, "maker@example.com").await;
    let role_id = user_role_id(&pool).await;

    let err = UserRepo::create(
        &pool,
        &CreateUser {
            email: "maker@example.com".to_string(),
            password_hash: "$argon2id$other".to_string(),
            role_id,
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err, "uq_users_email"));
}

#[sqlx::test(migrations = "./migrations")]
async fn login_bookkeeping_roundtrip(pool: PgPool) {
    let id = seed_user(&pool, "maker@example.com").await;

    UserRepo::increment_failed_login(&pool, id).await.unwrap();
    UserRepo::increment_failed_login(&pool, id).await.unwrap();
    UserRepo::lock_account(&pool, id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();

    let locked = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(locked.failed_login_count, 2);
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, id).await.unwrap();

    let recovered = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(recovered.failed_login_count, 0);
    assert!(recovered.locked_until.is_none());
    assert!(recovered.last_login_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn deactivate_user_is_idempotent(pool: PgPool) {
    let id = seed_user(&pool, "maker@example.com").await;

    assert!(UserRepo::deactivate(&pool, id).await.unwrap());
    // Already inactive: no row updated.
    assert!(!UserRepo::deactivate(&pool, id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn user_role_can_be_changed(pool: PgPool) {
    let id = seed_user(&pool, "maker@example.com").await;
    let admin_role = RoleRepo::find_by_name(&pool, "admin")
        .await
        .unwrap()
        .unwrap();

    let updated = UserRepo::update(
        &pool,
        id,
        &UpdateUser {
            email: None,
            role_id: Some(admin_role.id),
            is_active: None,
        },
    )
    .await
    .unwrap()
    .expect("user exists");

    assert_eq!(updated.role_id, admin_role.id);
    assert_eq!(updated.email, "maker@example.com", "unset fields untouched");
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn session_lifecycle(pool: PgPool) {
    let user_id = seed_user(&pool, "maker@example.com").await;

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id,
            refresh_token_hash: "abc123".to_string(),
            expires_at: Utc::now() + Duration::days(7),
            user_agent: None,
            ip_address: None,
        },
    )
    .await
    .unwrap();

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .expect("active session");
    assert_eq!(found.id, session.id);

    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn expired_session_not_returned(pool: PgPool) {
    let user_id = seed_user(&pool, "maker@example.com").await;

    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id,
            refresh_token_hash: "expired".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
            user_agent: None,
            ip_address: None,
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "expired")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn revoke_all_clears_every_session(pool: PgPool) {
    let user_id = seed_user(&pool, "maker@example.com").await;

    for hash in ["one", "two", "three"] {
        SessionRepo::create(
            &pool,
            &CreateSession {
                user_id,
                refresh_token_hash: hash.to_string(),
                expires_at: Utc::now() + Duration::days(7),
                user_agent: None,
                ip_address: None,
            },
        )
        .await
        .unwrap();
    }

    let revoked = SessionRepo::revoke_all_for_user(&pool, user_id).await.unwrap();
    assert_eq!(revoked, 3);
}

// ---------------------------------------------------------------------------
// Product submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn submission_create_defaults_to_pending(pool: PgPool) {
    let user_id = seed_user(&pool, "maker@example.com").await;
    let platform = PlatformRepo::create(
        &pool,
        &CreatePlatform {
            name: "Etsy".to_string(),
        },
    )
    .await
    .unwrap();

    let submission = SubmissionRepo::create(
        &pool,
        &CreateSubmission {
            user_id,
            platform_id: platform.id,
            description: Some("Articulated dragon, 20cm".to_string()),
            stl_url: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(submission.status, "pending");
    assert!(submission.response.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn submission_without_content_rejected(pool: PgPool) {
    let user_id = seed_user(&pool, "maker@example.com").await;
    let platform = PlatformRepo::create(
        &pool,
        &CreatePlatform {
            name: "Etsy".to_string(),
        },
    )
    .await
    .unwrap();

    let err = SubmissionRepo::create(
        &pool,
        &CreateSubmission {
            user_id,
            platform_id: platform.id,
            description: None,
            stl_url: None,
        },
    )
    .await
    .unwrap_err();

    // Check constraint: at least one of description / stl_url.
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23514"));
        }
        other => panic!("expected check violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn submissions_are_scoped_to_their_owner(pool: PgPool) {
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;
    let platform = PlatformRepo::create(
        &pool,
        &CreatePlatform {
            name: "Etsy".to_string(),
        },
    )
    .await
    .unwrap();

    let submission = SubmissionRepo::create(
        &pool,
        &CreateSubmission {
            user_id: alice,
            platform_id: platform.id,
            description: None,
            stl_url: Some("https://files.example.com/dragon.stl".to_string()),
        },
    )
    .await
    .unwrap();

    let alices = SubmissionRepo::list_for_user(&pool, alice).await.unwrap();
    assert_eq!(alices.len(), 1);
    assert!(SubmissionRepo::list_for_user(&pool, bob).await.unwrap().is_empty());

    // Bob cannot see Alice's submission by id either.
    assert!(SubmissionRepo::find_for_user(&pool, submission.id, bob)
        .await
        .unwrap()
        .is_none());
    assert!(SubmissionRepo::find_for_user(&pool, submission.id, alice)
        .await
        .unwrap()
        .is_some());
}
