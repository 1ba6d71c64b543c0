use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::RegisterParam,
    service::auth::AuthService,
    util::jwt::{self, JwtConfig},
};

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "service-test-secret".to_string(),
        expiry_hours: 1,
    }
}

fn register_param(email: &str) -> RegisterParam {
    RegisterParam {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Jana Novakova".to_string(),
        phone_number: None,
        drivers_license: Some("CZ123456".to_string()),
    }
}

/// Tests that registration issues a token for a USER and login accepts the same password.
///
/// Expected: token subject matches the user id on both calls
#[tokio::test]
async fn register_then_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();
    let service = AuthService::new(db, &config);

    let (user, token) = service.register(register_param("jana@example.com")).await?;
    assert_eq!(user.role, entity::user::UserRole::User);
    assert!(user.is_active);
    assert_eq!(jwt::validate_token(&token, &config)?.sub, user.id);

    let (logged_in, token) = service.login("jana@example.com", "correct horse").await?;
    assert_eq!(logged_in.id, user.id);
    assert_eq!(jwt::validate_token(&token, &config)?.sub, user.id);

    Ok(())
}

/// Tests registering the same email twice.
///
/// Expected: Conflict "User already exists"
#[tokio::test]
async fn duplicate_email_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();
    let service = AuthService::new(db, &config);

    service.register(register_param("dup@example.com")).await?;
    match service.register(register_param("dup@example.com")).await {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, "User already exists"),
        other => panic!("expected Conflict, got {:?}", other.map(|(u, _)| u.id)),
    }

    Ok(())
}

/// Tests that unknown emails and wrong passwords are indistinguishable.
///
/// Expected: InvalidCredentials for both
#[tokio::test]
async fn bad_credentials_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();
    let service = AuthService::new(db, &config);

    service.register(register_param("known@example.com")).await?;

    for (email, password) in [
        ("known@example.com", "wrong password"),
        ("nobody@example.com", "correct horse"),
    ] {
        let result = service.login(email, password).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests logging in to a deactivated account.
///
/// Expected: UserDeactivated even with the right password
#[tokio::test]
async fn deactivated_account_cannot_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let hash = crate::server::util::password::hash_password("secret pass")?;
    let user = factory::user::UserFactory::new(db)
        .email("off@example.com")
        .password_hash(hash)
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db, &config)
        .login("off@example.com", "secret pass")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserDeactivated(id))) if id == user.id
    ));

    Ok(())
}
