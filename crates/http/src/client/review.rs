//! Review API client methods

use super::{ClientError, EssayClient};
use essays_core::types::{Review, ReviewRequest};
use essays_core::validation::validate_review;
use reqwest::Method;

impl EssayClient {
    /// Submit a review for an essay as the logged-in user
    pub async fn submit_review(
        &self,
        essay_id: i64,
        rank: i64,
        content: &str,
    ) -> Result<Review, ClientError> {
        let rank = validate_review(rank, content)?;
        let author = self.session().username().ok_or(ClientError::NotLoggedIn)?;

        let request = self.request(Method::POST, "/review").json(&ReviewRequest {
            essay_id,
            rank,
            content: content.trim().to_string(),
            author,
        });
        self.execute(request).await
    }

    /// Global review feed
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ClientError> {
        let request = self.request(Method::GET, "/review");
        self.execute(request).await
    }

    /// Reviews written by `author`
    pub async fn reviews_by_author(&self, author: &str) -> Result<Vec<Review>, ClientError> {
        let request = self
            .request(Method::GET, "/reviews")
            .query(&[("author", author)]);
        self.execute(request).await
    }
}
