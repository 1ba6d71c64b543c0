use super::*;

/// Tests paging through users.
///
/// Verifies the page count is rounded up and that the last page holds the remainder.
///
/// Expected: Ok with 5 users over 3 pages of 2
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let filter = UserFilter::default();

    let first = repo
        .get_paginated(&filter, PageParam { page: 1, limit: 2 })
        .await?;
    assert_eq!(first.total, 5);
    assert_eq!(first.pages, 3);
    assert_eq!(first.items.len(), 2);

    let last = repo
        .get_paginated(&filter, PageParam { page: 3, limit: 2 })
        .await?;
    assert_eq!(last.items.len(), 1);

    let beyond = repo
        .get_paginated(&filter, PageParam { page: 4, limit: 2 })
        .await?;
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 5);

    Ok(())
}

/// Tests searching by name or email, ignoring ASCII case.
///
/// Expected: Ok with only the matching users
#[tokio::test]
async fn filters_by_search_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Karel Svoboda")
        .email("karel@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Eva Dvorakova")
        .email("eva.svobodova@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Tomas Novak")
        .email("tomas@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let page = repo
        .get_paginated(
            &UserFilter {
                search: Some("SVOBOD".to_string()),
                role: None,
            },
            PageParam { page: 1, limit: 20 },
        )
        .await?;

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|u| u.name != "Tomas Novak"));

    Ok(())
}

/// Tests filtering by role.
///
/// Expected: Ok with only the admin returned
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let page = repo
        .get_paginated(
            &UserFilter {
                search: None,
                role: Some(UserRole::Admin),
            },
            PageParam { page: 1, limit: 20 },
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, admin.id);

    Ok(())
}

/// Tests ordering users by spend.
///
/// Expected: Ok with the biggest spender first
#[tokio::test]
async fn orders_top_users_by_spend() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).total_spent(10.0).build().await?;
    let big = factory::user::UserFactory::new(db)
        .total_spent(500.0)
        .build()
        .await?;
    factory::user::UserFactory::new(db).total_spent(50.0).build().await?;

    let repo = UserRepository::new(db);
    let top = repo.top_by_spent(2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, big.id);
    assert_eq!(top[1].total_spent, 50.0);

    Ok(())
}
