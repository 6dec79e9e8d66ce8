use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a notification; drives colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// BEM modifier appended to the notification/toast class.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification--info",
            NotificationKind::Success => "notification--success",
            NotificationKind::Warning => "notification--warning",
            NotificationKind::Error => "notification--error",
        }
    }

    /// Icon name understood by the frontend `icon()` helper.
    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "check-circle",
            NotificationKind::Warning => "alert-triangle",
            NotificationKind::Error => "alert-circle",
        }
    }
}

/// One entry of the notification feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppNotification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub read: bool,
}

impl AppNotification {
    pub fn new(kind: NotificationKind, title: &str, body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            body: body.to_string(),
            created_at: chrono::Utc::now(),
            read: false,
        }
    }
}
