use super::*;

/// Tests paging through users ordered by id.
///
/// Expected: 2 users on page 0, 1 on page 1, total of 3
#[tokio::test]
async fn pages_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let (page, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        page.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let (page, total) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, third.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: empty page, total still reported
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let (page, total) = UserRepository::new(db).get_all_paginated(5, 10).await?;

    assert!(page.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
