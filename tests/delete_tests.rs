//! Delete operation tests
mod common;

use common::{extract_id_from_response, get_test_handler};

#[tokio::test]
async fn test_delete_removes_the_record() {
    let (handler, _file) = get_test_handler();

    let reply = handler
        .handle_create("Short-lived".to_string(), None, None, None)
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);

    let reply = handler.handle_delete(id.clone()).await.unwrap();
    assert!(reply.contains("deleted"));

    let list = handler.handle_list(None, None, None).await.unwrap();
    assert_eq!(list, "No todos found");

    let result = handler.handle_show(id).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_missing_id_fails() {
    let (handler, _file) = get_test_handler();

    let result = handler.handle_delete("#42".to_string()).await;
    assert!(result.is_err());
    assert!(format!("{:?}", result.unwrap_err()).contains("not found"));
}

#[tokio::test]
async fn test_delete_twice_fails_the_second_time() {
    let (handler, _file) = get_test_handler();

    let reply = handler
        .handle_create("Once only".to_string(), None, None, None)
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);

    handler.handle_delete(id.clone()).await.unwrap();
    let result = handler.handle_delete(id).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (handler, _file) = get_test_handler();

    let reply = handler
        .handle_create("First".to_string(), None, None, None)
        .await
        .unwrap();
    let first_id = extract_id_from_response(&reply);
    assert_eq!(first_id, "#1");

    handler.handle_delete(first_id).await.unwrap();

    let reply = handler
        .handle_create("Second".to_string(), None, None, None)
        .await
        .unwrap();
    assert_eq!(extract_id_from_response(&reply), "#2");
}
