use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Notification, NotificationError};

/// Append-only notification log. Emission never fails; notifications are
/// owned by their recipient afterwards for read-state mutation only.
pub struct NotificationService {
    // Append order is creation order, so reverse iteration is newest-first.
    records: RwLock<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Append a new unread notification for `user_id`.
    pub async fn notify(&self, user_id: Uuid, message: impl Into<String>) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id,
            message: message.into(),
            read: false,
            created_at: chrono::Utc::now(),
        };

        debug!("Notifying user {}: {}", user_id, notification.message);
        self.records.write().await.push(notification.clone());
        notification
    }

    pub async fn mark_read(&self, notification_id: Uuid) -> Result<Notification, NotificationError> {
        let mut records = self.records.write().await;
        let notification = records
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or(NotificationError::NotFound)?;

        notification.read = true;
        Ok(notification.clone())
    }

    /// All notifications for a user, newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Notification> {
        self.records
            .read()
            .await
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn unread_count(&self, user_id: Uuid) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
