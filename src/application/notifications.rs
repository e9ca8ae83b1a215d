//! Notifications published after (or instead of) a command.

use uuid::Uuid;

use crate::mediator::Notification;

/// Announces that a company should be considered deleted. Listeners do the
/// actual removal; the publisher does not learn whether it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyDeletedNotification {
    pub id: Uuid,
    pub track_changes: bool,
}

impl Notification for CompanyDeletedNotification {}
