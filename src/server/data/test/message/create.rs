use super::*;

/// Tests storing a reply.
///
/// Expected: Ok(Message) with the reply target and a timestamp set
#[tokio::test]
async fn stores_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, chat) = factory::helpers::create_active_chat(db).await?;
    let original = factory::create_message(db, chat.id, user.id, "Where is the clock tower?").await?;

    let reply = MessageRepository::new(db)
        .create(CreateMessageParam {
            chat_id: chat.id,
            user_id: user.id,
            content_type: "text".to_string(),
            text: Some("North of the bridge".to_string()),
            reply_to: Some(original.id),
        })
        .await?;

    assert_eq!(reply.reply_to, Some(original.id));
    assert!(reply.date >= original.date);

    Ok(())
}
