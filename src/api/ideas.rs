//! Idea endpoints: browsing, authoring, and the per-idea toggles
//! (like, bookmark, company interest) and comments.

use serde::Deserialize;
use serde_json::json;

use super::{query_string, ApiClient, OkResponse};
use crate::error::ClientError;
use crate::models::{Comment, Idea, IdeaDraft};

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdeaSort {
    #[default]
    New,
    Hot,
}

impl IdeaSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaSort::New => "new",
            IdeaSort::Hot => "hot",
        }
    }
}

/// Filters for the public idea listing.
#[derive(Debug, Clone)]
pub struct IdeaQuery {
    pub sort: IdeaSort,
    pub keyword: Option<String>,
    pub tag: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for IdeaQuery {
    fn default() -> Self {
        Self {
            sort: IdeaSort::New,
            keyword: None,
            tag: None,
            page: 1,
            limit: 10,
        }
    }
}

impl IdeaQuery {
    fn to_query_string(&self) -> String {
        let page = self.page.max(1).to_string();
        let limit = self.limit.to_string();
        let mut pairs: Vec<(&str, &str)> = vec![("sort", self.sort.as_str())];
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            pairs.push(("keyword", keyword));
        }
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.trim().is_empty()) {
            pairs.push(("tag", tag));
        }
        pairs.push(("page", &page));
        pairs.push(("limit", &limit));
        query_string(&pairs)
    }
}

/// `GET /api/ideas` envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPage {
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "one")]
    pub total_pages: u64,
}

fn one() -> u64 {
    1
}

/// `GET /api/ideas/:id` envelope; like/bookmark flags are present only for
/// authenticated callers.
#[derive(Debug, Deserialize)]
pub struct IdeaDetail {
    pub idea: Idea,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub bookmarked: bool,
}

#[derive(Debug, Deserialize)]
struct IdeaEnvelope {
    idea: Idea,
}

#[derive(Debug, Deserialize)]
struct CommentsEnvelope {
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
struct IdeasEnvelope {
    #[serde(default)]
    ideas: Vec<Idea>,
}

/// Result of toggling a like.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u64,
}

/// Result of toggling a bookmark.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkState {
    pub bookmarked: bool,
    pub bookmark_count: u64,
}

/// Result of posting a comment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPosted {
    pub comment: Comment,
    #[serde(default)]
    pub comment_count: u64,
}

#[derive(Debug, Deserialize)]
struct InterestEnvelope {
    interested: bool,
}

impl ApiClient {
    /// Browse the public idea listing.
    pub async fn list_ideas(&self, query: &IdeaQuery) -> Result<IdeaPage, ClientError> {
        self.get(&format!("/api/ideas?{}", query.to_query_string()))
            .await
    }

    /// Fetch one idea plus the caller's like/bookmark flags.
    pub async fn get_idea(&self, id: &str) -> Result<IdeaDetail, ClientError> {
        self.get(&format!("/api/ideas/{id}")).await
    }

    /// Publish a new idea.
    pub async fn create_idea(&self, draft: &IdeaDraft) -> Result<Idea, ClientError> {
        let res: IdeaEnvelope = self
            .post("/api/ideas", Some(serde_json::to_value(draft)?))
            .await?;
        Ok(res.idea)
    }

    /// Replace an idea's writable fields.
    pub async fn update_idea(&self, id: &str, draft: &IdeaDraft) -> Result<(), ClientError> {
        let _: OkResponse = self
            .put(&format!("/api/ideas/{id}"), Some(serde_json::to_value(draft)?))
            .await?;
        Ok(())
    }

    /// The caller's own ideas, regardless of visibility.
    pub async fn my_ideas(&self) -> Result<Vec<Idea>, ClientError> {
        let res: IdeasEnvelope = self.get("/api/ideas/mine").await?;
        Ok(res.ideas)
    }

    pub async fn toggle_like(&self, id: &str) -> Result<LikeState, ClientError> {
        self.post(&format!("/api/ideas/{id}/like"), None).await
    }

    pub async fn toggle_bookmark(&self, id: &str) -> Result<BookmarkState, ClientError> {
        self.post(&format!("/api/ideas/{id}/bookmark"), None).await
    }

    /// Toggle company interest in an idea, with an optional message to the author.
    pub async fn express_interest(&self, id: &str, message: &str) -> Result<bool, ClientError> {
        let res: InterestEnvelope = self
            .post(
                &format!("/api/ideas/{id}/interest"),
                Some(json!({ "message": message })),
            )
            .await?;
        Ok(res.interested)
    }

    pub async fn comments(&self, id: &str) -> Result<Vec<Comment>, ClientError> {
        let res: CommentsEnvelope = self.get(&format!("/api/ideas/{id}/comments")).await?;
        Ok(res.comments)
    }

    pub async fn add_comment(&self, id: &str, content: &str) -> Result<CommentPosted, ClientError> {
        self.post(
            &format!("/api/ideas/{id}/comments"),
            Some(json!({ "content": content })),
        )
        .await
    }

    /// Ask the platform to generate its automated review of an idea.
    pub async fn request_ai_review(&self, id: &str) -> Result<(), ClientError> {
        let _: OkResponse = self.post(&format!("/api/ideas/{id}/ai-review"), None).await?;
        Ok(())
    }
}
