use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An idea post as the platform serves it.
///
/// The platform omits sections the caller isn't allowed to see (or that
/// simply don't exist yet), so everything beyond the core fields is
/// optional or defaulted.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub is_monetizable: bool,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<IdeaAuthor>,
    #[serde(default)]
    pub stats: Option<IdeaStats>,
    #[serde(default)]
    pub ai_review: Option<AiReview>,
}

/// The idea's author, populated by the server on listings and detail views.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IdeaAuthor {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Engagement counters attached to an idea.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdeaStats {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub bookmark_count: u64,
    #[serde(default)]
    pub view_count: u64,
}

/// The optional machine-generated review of an idea.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AiReview {
    pub feasibility_score: f64,
    pub profit_potential_score: f64,
    pub analysis_text: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on an idea.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    pub content: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<IdeaAuthor>,
}

/// The writable fields of an idea, for create and update calls.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub visibility: String,
    pub is_monetizable: bool,
    pub license_type: String,
}
