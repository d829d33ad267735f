use super::*;

/// Tests reading history in posting order.
///
/// Expected: messages of the chat oldest first, other chats excluded
#[tokio::test]
async fn returns_chat_history_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, chat) = factory::helpers::create_active_chat(db).await?;
    let (other_user, _, _, other_chat) = factory::helpers::create_active_chat(db).await?;

    let first = factory::create_message(db, chat.id, user.id, "first").await?;
    factory::create_message(db, other_chat.id, other_user.id, "elsewhere").await?;
    let second = factory::create_message(db, chat.id, user.id, "second").await?;

    let history = MessageRepository::new(db).get_by_chat(chat.id).await?;

    assert_eq!(
        history.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}
