use assert_matches::assert_matches;
use uuid::Uuid;

use notification_cell::models::NotificationError;
use notification_cell::NotificationService;

#[tokio::test]
async fn test_notify_appends_unread_notification() {
    let service = NotificationService::new();
    let user = Uuid::new_v4();

    let notification = service.notify(user, "Your appointment has been confirmed.").await;

    assert_eq!(notification.user_id, user);
    assert!(!notification.read);
    assert_eq!(service.unread_count(user).await, 1);
}

#[tokio::test]
async fn test_listing_is_newest_first_and_scoped_to_user() {
    let service = NotificationService::new();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    service.notify(user, "first").await;
    service.notify(other, "someone else's").await;
    service.notify(user, "second").await;
    service.notify(user, "third").await;

    let listed = service.list_for_user(user).await;
    let messages: Vec<&str> = listed.iter().map(|n| n.message.as_str()).collect();

    assert_eq!(messages, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_mark_read_flips_the_flag_once() {
    let service = NotificationService::new();
    let user = Uuid::new_v4();

    let notification = service.notify(user, "pending confirmation").await;
    assert_eq!(service.unread_count(user).await, 1);

    let updated = service.mark_read(notification.id).await.unwrap();
    assert!(updated.read);
    assert_eq!(service.unread_count(user).await, 0);

    // Marking again is harmless.
    let again = service.mark_read(notification.id).await.unwrap();
    assert!(again.read);
}

#[tokio::test]
async fn test_mark_read_on_unknown_id_is_not_found() {
    let service = NotificationService::new();

    assert_matches!(
        service.mark_read(Uuid::new_v4()).await,
        Err(NotificationError::NotFound)
    );
}
