//! Endpoints scoped to the signed-in account: liked/bookmarked libraries
//! and the interest inbox (both sides of it).

use chrono::{DateTime, Utc};
use futures::try_join;
use serde::Deserialize;

use super::ApiClient;
use crate::error::ClientError;
use crate::models::idea::IdeaAuthor;
use crate::models::Idea;

#[derive(Debug, Deserialize)]
struct IdeasEnvelope {
    #[serde(default)]
    ideas: Vec<Idea>,
}

#[derive(Debug, Deserialize)]
struct InterestsEnvelope {
    #[serde(default)]
    interests: Vec<InterestRecord>,
}

/// A company's expression of interest in one of the caller's ideas.
#[derive(Debug, Deserialize, Clone)]
pub struct InterestRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub company: Option<IdeaAuthor>,
    #[serde(default)]
    pub idea: Option<Idea>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    pub async fn liked_ideas(&self) -> Result<Vec<Idea>, ClientError> {
        let res: IdeasEnvelope = self.get("/api/me/likes").await?;
        Ok(res.ideas)
    }

    pub async fn bookmarked_ideas(&self) -> Result<Vec<Idea>, ClientError> {
        let res: IdeasEnvelope = self.get("/api/me/bookmarks").await?;
        Ok(res.ideas)
    }

    /// Both halves of the personal library, fetched concurrently.
    pub async fn library(&self) -> Result<(Vec<Idea>, Vec<Idea>), ClientError> {
        try_join!(self.liked_ideas(), self.bookmarked_ideas())
    }

    /// Interest a creator has received on their ideas.
    pub async fn received_interests(&self) -> Result<Vec<InterestRecord>, ClientError> {
        let res: InterestsEnvelope = self.get("/api/me/received-interests").await?;
        Ok(res.interests)
    }

    /// Ideas the calling company has expressed interest in.
    pub async fn company_interests(&self) -> Result<Vec<Idea>, ClientError> {
        let res: IdeasEnvelope = self.get("/api/company/interests").await?;
        Ok(res.ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::store::MemoryStore;
    use mockito::Server;
    use std::sync::Arc;

    /// Test that library() fetches likes and bookmarks and pairs them up.
    #[tokio::test]
    async fn test_library_fetches_both_lists() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/me/likes")
            .with_status(200)
            .with_body(r#"{"ideas":[{"_id":"a","title":"liked"}]}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/me/bookmarks")
            .with_status(200)
            .with_body(r#"{"ideas":[{"_id":"b","title":"kept"}]}"#)
            .create_async()
            .await;

        let client = ApiClient::new(
            &ApiConfig {
                base_url: server.url(),
            },
            Arc::new(MemoryStore::new()),
        );
        let (liked, bookmarked) = client.library().await.unwrap();
        assert_eq!(liked[0].title, "liked");
        assert_eq!(bookmarked[0].title, "kept");
    }
}
