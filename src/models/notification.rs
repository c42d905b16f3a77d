use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to trigger a notification.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Like,
    Comment,
    Bookmark,
    Interest,
    /// Kinds added server-side after this client shipped.
    #[serde(other)]
    Unknown,
}

/// Minimal actor reference embedded in a notification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationActor {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub username: String,
}

/// Minimal idea reference embedded in a notification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationIdea {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// One entry in the notification feed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default, rename = "actorId")]
    pub actor: Option<NotificationActor>,
    #[serde(default, rename = "ideaId")]
    pub idea: Option<NotificationIdea>,
    #[serde(default, rename = "readAt")]
    pub read_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// One-line human summary, e.g. `ada liked "Solar kettle"`.
    pub fn render_text(&self) -> String {
        let actor = self
            .actor
            .as_ref()
            .map(|a| a.username.as_str())
            .unwrap_or("Someone");
        let title = self
            .idea
            .as_ref()
            .and_then(|i| i.title.as_deref())
            .unwrap_or("your idea");

        match self.kind {
            NotificationKind::Like => format!("{actor} liked \"{title}\""),
            NotificationKind::Comment => format!("{actor} commented on \"{title}\""),
            NotificationKind::Bookmark => format!("{actor} bookmarked \"{title}\""),
            NotificationKind::Interest => format!("{actor} showed interest in \"{title}\""),
            NotificationKind::Unknown => "New notification".to_string(),
        }
    }
}
