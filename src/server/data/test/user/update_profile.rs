use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok with the phone number set and the name unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Original Name")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParam {
                phone_number: Some("+420 777 123 456".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Original Name");
    assert_eq!(updated.phone_number.as_deref(), Some("+420 777 123 456"));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            999,
            UpdateProfileParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deactivating and reactivating an account.
///
/// Expected: Ok with `is_active` following each call
#[tokio::test]
async fn toggles_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let deactivated = repo.set_active(user.id, false).await?.unwrap();
    assert!(!deactivated.is_active);

    let reactivated = repo.set_active(user.id, true).await?.unwrap();
    assert!(reactivated.is_active);

    assert!(repo.set_active(999, false).await?.is_none());

    Ok(())
}
