/// How long a notification stays visible.
pub const NOTIFICATION_TTL_MS: u64 = 2_000;

pub const MSG_ENTER_TEXT: &str = "Please enter text";
pub const MSG_SAVED: &str = "Saved";
pub const MSG_ALREADY_SAVED: &str = "Already saved";
pub const MSG_REMOVED: &str = "Removed";
pub const MSG_COPIED: &str = "Copied to clipboard";
pub const MSG_COPY_FAILED: &str = "Copy failed";
pub const MSG_GENERATION_FAILED: &str = "Could not generate queries";
pub const MSG_SUGGESTIONS_FAILED: &str = "Could not load suggestions";

pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub expires_at_ms: u64,
}

/// Stack of visible notifications on a logical clock.
///
/// Every `push` acquires a new slot; slots are released by `expire` once the
/// clock reaches their deadline. Nothing here reads wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationPool {
    active: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationPool {
    pub fn push(&mut self, message: impl Into<String>, now_ms: u64) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.active.push(Notification {
            id,
            message: message.into(),
            expires_at_ms: now_ms.saturating_add(NOTIFICATION_TTL_MS),
        });
        id
    }

    /// Drops every notification whose deadline has passed. Returns how many
    /// were released.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.active.len();
        self.active.retain(|n| n.expires_at_ms > now_ms);
        before - self.active.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_stack_and_expire_independently() {
        let mut pool = NotificationPool::default();
        let first = pool.push("Saved", 0);
        let second = pool.push("Removed", 1_500);
        assert_ne!(first, second);
        assert_eq!(pool.active().len(), 2);

        assert_eq!(pool.expire(1_999), 0);
        assert_eq!(pool.expire(2_000), 1);
        assert_eq!(pool.active()[0].message, "Removed");

        assert_eq!(pool.expire(3_500), 1);
        assert!(pool.active().is_empty());
    }

    #[test]
    fn identical_messages_get_separate_slots() {
        let mut pool = NotificationPool::default();
        pool.push("Saved", 10);
        pool.push("Saved", 10);
        assert_eq!(pool.active().len(), 2);
    }
}
