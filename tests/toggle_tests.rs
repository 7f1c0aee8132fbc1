//! Toggle operation tests
mod common;

use common::{day, extract_id_from_response, get_test_handler, get_test_handler_at, reopen_handler_at};

#[tokio::test]
async fn test_toggle_marks_pending_todo_completed() {
    let (handler, _file) = get_test_handler();

    let reply = handler
        .handle_create("Flip me".to_string(), None, None, None)
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);

    let reply = handler.handle_toggle(id.clone()).await.unwrap();
    assert!(reply.contains("marked as Completed"));

    let list = handler
        .handle_list(Some("completed".to_string()), None, None)
        .await
        .unwrap();
    assert!(list.contains("Flip me"));
}

#[tokio::test]
async fn test_toggle_twice_returns_to_pending() {
    let (handler, _file) = get_test_handler();

    let reply = handler
        .handle_create("There and back".to_string(), None, None, None)
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);

    handler.handle_toggle(id.clone()).await.unwrap();
    let reply = handler.handle_toggle(id.clone()).await.unwrap();
    assert!(reply.contains("marked as Pending"));

    let shown = handler.handle_show(id).await.unwrap();
    assert!(shown.contains("Status: Pending"));
}

#[tokio::test]
async fn test_toggle_missing_id_fails() {
    let (handler, _file) = get_test_handler();

    let result = handler.handle_toggle("#42".to_string()).await;
    assert!(result.is_err());
    assert!(format!("{:?}", result.unwrap_err()).contains("not found"));
}

#[tokio::test]
async fn test_toggle_skips_validation_on_an_overdue_record() {
    let (handler, file) = get_test_handler_at(day(2026, 3, 15));

    let reply = handler
        .handle_create(
            "Goes stale".to_string(),
            None,
            Some("2026-03-16".to_string()),
            None,
        )
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);
    drop(handler);

    // Five days later the record is overdue; update would reject it, but
    // the completion flip persists it unchanged
    let handler = reopen_handler_at(&file, day(2026, 3, 20));
    let reply = handler.handle_toggle(id.clone()).await.unwrap();
    assert!(reply.contains("marked as Completed"));

    let reply = handler.handle_toggle(id).await.unwrap();
    assert!(reply.contains("marked as Pending"));
}

#[tokio::test]
async fn test_toggle_persists_across_reload() {
    let (handler, file) = get_test_handler_at(day(2026, 3, 15));

    let reply = handler
        .handle_create("Durable flip".to_string(), None, None, None)
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);

    handler.handle_toggle(id.clone()).await.unwrap();
    drop(handler);

    let handler = reopen_handler_at(&file, day(2026, 3, 15));
    let shown = handler.handle_show(id).await.unwrap();
    assert!(shown.contains("Status: Completed"));
}

#[tokio::test]
async fn test_toggle_accepts_untrimmed_id() {
    let (handler, _file) = get_test_handler();

    let reply = handler
        .handle_create("Sloppy caller".to_string(), None, None, None)
        .await
        .unwrap();
    let id = extract_id_from_response(&reply);

    let result = handler.handle_toggle(format!(" {} ", id)).await;
    assert!(result.is_ok());
}
