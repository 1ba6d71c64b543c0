use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository stores the user with zeroed totals, active status
/// and the requested role.
///
/// Expected: Ok with user created and totals at zero
#[tokio::test]
async fn creates_user_with_zero_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("jana@example.com")).await?;

    assert_eq!(user.email, "jana@example.com");
    assert_eq!(user.role, UserRole::User);
    assert!(user.is_active);
    assert_eq!(user.total_trips, 0);
    assert_eq!(user.total_spent, 0.0);

    Ok(())
}

/// Tests registering the same email twice.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("dup@example.com")).await?;
    let result = repo.create(create_param("dup@example.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests upserting an existing account.
///
/// Verifies that a second upsert with the same email updates the role and name
/// instead of inserting a new row.
///
/// Expected: Ok with the same id and the new role
#[tokio::test]
async fn upsert_updates_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(create_param("admin@example.com")).await?;
    let second = repo
        .upsert(CreateUserParam {
            name: "Admin User".to_string(),
            role: UserRole::Admin,
            ..create_param("admin@example.com")
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.role, UserRole::Admin);
    assert_eq!(second.name, "Admin User");
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests reading credentials by email.
///
/// Expected: Ok(Some) with the stored hash for a known email, Ok(None) otherwise
#[tokio::test]
async fn finds_credentials_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("petr@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("petr@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, stored.id);
    assert_eq!(credentials.password_hash, "stored-hash");
    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}
