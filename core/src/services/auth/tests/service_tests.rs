//! Unit tests for authentication service

use chrono::{Duration, Utc};
use sso_shared::config::MIN_BCRYPT_COST;
use std::sync::Arc;
use tracing::Span;

use crate::domain::entities::app::App;
use crate::errors::AuthError;
use crate::repositories::{
    AppRepository, MockAppRepository, MockUserRepository, UserRepository,
};
use crate::services::auth::{AuthService, AuthServiceConfig, PasswordHasher, MAX_PASSWORD_BYTES};
use crate::services::token::{decode_token, JwtTokenIssuer, TokenIssuer};

use super::mocks::*;

const APP_SECRET: &str = "test-secret";

fn test_config() -> AuthServiceConfig {
    AuthServiceConfig {
        bcrypt_cost: MIN_BCRYPT_COST,
    }
}

fn test_app() -> App {
    App::new(1, "test-app", APP_SECRET)
}

fn build_service<U, A, T>(users: U, apps: A, issuer: T) -> AuthService<U, A, T>
where
    U: UserRepository,
    A: AppRepository,
    T: TokenIssuer,
{
    AuthService::new(
        Arc::new(users),
        Arc::new(apps),
        Arc::new(issuer),
        test_config(),
        Span::none(),
    )
}

fn default_service() -> (
    AuthService<MockUserRepository, MockAppRepository, JwtTokenIssuer>,
    MockUserRepository,
) {
    let users = MockUserRepository::new();
    let service = build_service(
        users.clone(),
        MockAppRepository::with_apps([test_app()]),
        JwtTokenIssuer::new(Duration::hours(1)),
    );
    (service, users)
}

#[tokio::test]
async fn test_register_returns_new_id() {
    let (service, users) = default_service();

    let id = service.register("a@x.com", "pw123456").await.unwrap();

    assert_eq!(id, 1);
    let stored = users.user("a@x.com").await.unwrap();
    assert_ne!(stored.pass_hash, "pw123456");
    assert!(bcrypt::verify("pw123456", &stored.pass_hash).unwrap());
}

#[tokio::test]
async fn test_register_uses_configured_cost() {
    let (service, users) = default_service();

    service.register("a@x.com", "pw123456").await.unwrap();

    let stored = users.user("a@x.com").await.unwrap();
    assert!(stored.pass_hash.starts_with("$2b$04$"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (service, users) = default_service();

    service.register("a@x.com", "first-password").await.unwrap();
    let result = service.register("a@x.com", "second-password").await;

    assert_eq!(result, Err(AuthError::UserExists));
    assert_eq!(users.count().await, 1);
}

#[tokio::test]
async fn test_concurrent_register_same_email() {
    let (service, users) = default_service();

    let (first, second) = tokio::join!(
        service.register("a@x.com", "pw-one"),
        service.register("a@x.com", "pw-two"),
    );

    assert!(first.is_ok() ^ second.is_ok());
    let failure = if first.is_ok() { second } else { first };
    assert_eq!(failure, Err(AuthError::UserExists));
    assert_eq!(users.count().await, 1);
}

#[tokio::test]
async fn test_register_rejects_empty_input() {
    let (service, users) = default_service();

    assert_eq!(
        service.register("", "pw123456").await,
        Err(AuthError::invalid_argument("email"))
    );
    assert_eq!(
        service.register("a@x.com", "").await,
        Err(AuthError::invalid_argument("password"))
    );
    assert_eq!(users.count().await, 0);
}

#[tokio::test]
async fn test_register_rejects_password_longer_than_bcrypt_input() {
    let (service, users) = default_service();
    let too_long = format!("{}REGISTERED", "a".repeat(MAX_PASSWORD_BYTES));

    assert_eq!(
        service.register("a@x.com", &too_long).await,
        Err(AuthError::argument_too_long("password", MAX_PASSWORD_BYTES))
    );
    assert_eq!(users.count().await, 0);

    // Exactly at the limit is still accepted
    let at_limit = "a".repeat(MAX_PASSWORD_BYTES);
    assert!(service.register("a@x.com", &at_limit).await.is_ok());
}

#[tokio::test]
async fn test_login_rejects_password_sharing_bcrypt_prefix() {
    let (service, _users) = default_service();
    let prefix = "a".repeat(MAX_PASSWORD_BYTES);

    service.register("a@x.com", &prefix).await.unwrap();

    let result = service
        .login("a@x.com", &format!("{}totally-different", prefix), 1)
        .await;
    assert_eq!(
        result,
        Err(AuthError::argument_too_long("password", MAX_PASSWORD_BYTES))
    );

    // Multi-byte characters count by bytes, not chars
    let wide = "é".repeat(MAX_PASSWORD_BYTES / 2 + 1);
    assert!(matches!(
        service.login("a@x.com", &wide, 1).await,
        Err(AuthError::InvalidArgument { .. })
    ));
}

#[tokio::test]
async fn test_register_storage_failure_is_internal() {
    let service = build_service(
        FailingUserRepository,
        MockAppRepository::new(),
        JwtTokenIssuer::default(),
    );

    let result = service.register("a@x.com", "pw123456").await;
    assert_eq!(result, Err(AuthError::Internal));
}

#[tokio::test]
async fn test_login_issues_token_for_app() {
    let (service, _) = default_service();
    let id = service.register("a@x.com", "pw123456").await.unwrap();

    let before = Utc::now().timestamp();
    let token = service.login("a@x.com", "pw123456", 1).await.unwrap();
    let after = Utc::now().timestamp();

    let claims = decode_token(&token, APP_SECRET).expect("token signed with app secret");
    assert_eq!(claims.uid, id);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.app_id, 1);
    assert!(claims.exp >= before + 3600 && claims.exp <= after + 3600);
}

#[tokio::test]
async fn test_login_tokens_are_scoped_per_app() {
    let users = MockUserRepository::new();
    let service = build_service(
        users,
        MockAppRepository::with_apps([test_app(), App::new(2, "other-app", "other-secret")]),
        JwtTokenIssuer::default(),
    );
    service.register("a@x.com", "pw123456").await.unwrap();

    let token = service.login("a@x.com", "pw123456", 2).await.unwrap();

    assert_eq!(decode_token(&token, "other-secret").unwrap().app_id, 2);
    assert!(decode_token(&token, APP_SECRET).is_err());
}

#[tokio::test]
async fn test_login_unknown_email_and_wrong_password_are_indistinguishable() {
    let (service, _) = default_service();
    service.register("a@x.com", "pw123456").await.unwrap();

    let unknown = service.login("nobody@x.com", "pw123456", 1).await.unwrap_err();
    let wrong = service.login("a@x.com", "wrong-password", 1).await.unwrap_err();

    assert_eq!(unknown, AuthError::InvalidCredentials);
    assert_eq!(wrong, AuthError::InvalidCredentials);
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_login_unknown_app() {
    let (service, _) = default_service();
    service.register("a@x.com", "pw123456").await.unwrap();

    let result = service.login("a@x.com", "pw123456", 42).await;
    assert_eq!(result, Err(AuthError::InvalidAppId));
}

#[tokio::test]
async fn test_login_checks_credentials_before_app() {
    let (service, _) = default_service();
    service.register("a@x.com", "pw123456").await.unwrap();

    let result = service.login("a@x.com", "wrong-password", 42).await;
    assert_eq!(result, Err(AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_rejects_empty_input() {
    let (service, _) = default_service();

    assert_eq!(
        service.login("", "pw123456", 1).await,
        Err(AuthError::invalid_argument("email"))
    );
    assert_eq!(
        service.login("a@x.com", "", 1).await,
        Err(AuthError::invalid_argument("password"))
    );
}

#[tokio::test]
async fn test_login_malformed_stored_hash_is_internal() {
    let users = MockUserRepository::new();
    users.save_user("a@x.com", "not-a-bcrypt-hash").await.unwrap();
    let service = build_service(
        users,
        MockAppRepository::with_apps([test_app()]),
        JwtTokenIssuer::default(),
    );

    let result = service.login("a@x.com", "pw123456", 1).await;
    assert_eq!(result, Err(AuthError::Internal));
}

#[tokio::test]
async fn test_login_storage_failures_are_internal() {
    let service = build_service(
        FailingUserRepository,
        MockAppRepository::with_apps([test_app()]),
        JwtTokenIssuer::default(),
    );
    assert_eq!(
        service.login("a@x.com", "pw123456", 1).await,
        Err(AuthError::Internal)
    );

    let users = MockUserRepository::new();
    let service = build_service(users, FailingAppRepository, JwtTokenIssuer::default());
    service.register("a@x.com", "pw123456").await.unwrap();
    assert_eq!(
        service.login("a@x.com", "pw123456", 1).await,
        Err(AuthError::Internal)
    );
}

#[tokio::test]
async fn test_login_signing_failure_is_internal() {
    let service = build_service(
        MockUserRepository::new(),
        MockAppRepository::with_apps([test_app()]),
        FailingTokenIssuer,
    );
    service.register("a@x.com", "pw123456").await.unwrap();

    let result = service.login("a@x.com", "pw123456", 1).await;
    assert_eq!(result, Err(AuthError::Internal));
}

#[tokio::test]
async fn test_login_returns_issuer_output() {
    let service = build_service(
        MockUserRepository::new(),
        MockAppRepository::with_apps([test_app()]),
        StaticTokenIssuer("static-token"),
    );
    service.register("a@x.com", "pw123456").await.unwrap();

    let token = service.login("a@x.com", "pw123456", 1).await.unwrap();
    assert_eq!(token, "static-token");
}

#[tokio::test]
async fn test_is_admin() {
    let (service, users) = default_service();
    let id = service.register("a@x.com", "pw123456").await.unwrap();

    assert_eq!(service.is_admin(id).await, Ok(false));

    users.set_admin(id, true).await;
    assert_eq!(service.is_admin(id).await, Ok(true));
}

#[tokio::test]
async fn test_is_admin_unknown_user() {
    let (service, _) = default_service();
    assert_eq!(service.is_admin(999).await, Err(AuthError::UserNotFound));
}

#[tokio::test]
async fn test_is_admin_storage_failure_is_internal() {
    let service = build_service(
        FailingUserRepository,
        MockAppRepository::new(),
        JwtTokenIssuer::default(),
    );
    assert_eq!(service.is_admin(1).await, Err(AuthError::Internal));
}

#[tokio::test]
async fn test_one_hour_ttl_scenario() {
    let (service, _) = default_service();

    let id = service.register("a@x.com", "pw123456").await.unwrap();
    assert_eq!(id, 1);

    let token = service.login("a@x.com", "pw123456", 1).await.unwrap();
    let claims = decode_token(&token, APP_SECRET).unwrap();
    assert_eq!(claims.uid, 1);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.app_id, 1);
    assert!((claims.exp - (Utc::now().timestamp() + 3600)).abs() <= 1);

    assert_eq!(
        service.login("a@x.com", "wrong", 1).await,
        Err(AuthError::InvalidCredentials)
    );
}

#[tokio::test]
async fn test_operations_run_under_supplied_span() {
    let span = tracing::info_span!("tenant", deployment = "test");
    let service = AuthService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockAppRepository::with_apps([test_app()])),
        Arc::new(JwtTokenIssuer::default()),
        test_config(),
        span,
    );

    let id = service.register("a@x.com", "pw123456").await.unwrap();
    assert!(service.login("a@x.com", "pw123456", 1).await.is_ok());
    assert_eq!(service.is_admin(id).await, Ok(false));
}

#[tokio::test]
async fn test_warm_up_builds_reference_hash() {
    let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
    assert!(!hasher.is_warm());

    hasher.warm_up().await.unwrap();
    assert!(hasher.is_warm());

    // Dummy verification reuses the prebuilt hash
    hasher.verify_dummy("whatever").await.unwrap();
    assert!(hasher.is_warm());

    let (service, _users) = default_service();
    assert_eq!(service.warm_up().await, Ok(()));
    assert_eq!(
        service.login("nobody@x.com", "pw123456", 1).await,
        Err(AuthError::InvalidCredentials)
    );
}
