use std::time::Duration;

use uuid::Uuid;

use super::types::NotificationEvent;

pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);
pub const SLIDE_OUT_DURATION: Duration = Duration::from_millis(300);
pub const WELCOME_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNotification {
    pub id: Uuid,
    pub event: NotificationEvent,
    pub leaving: bool,
}

/// Banners currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    entries: Vec<ActiveNotification>,
}

impl NotificationQueue {
    pub fn push(&mut self, event: NotificationEvent) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(ActiveNotification {
            id,
            event,
            leaving: false,
        });
        id
    }

    /// Marks a banner as sliding out. Returns false when it is already gone.
    pub fn begin_dismiss(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[ActiveNotification] {
        &self.entries
    }
}
