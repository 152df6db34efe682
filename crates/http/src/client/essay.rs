//! Essay API client methods

use super::{ClientError, EssayClient};
use essays_core::types::{Essay, EssayRequest, EssayWithReviews};
use essays_core::validation::validate_essay_content;
use reqwest::Method;

impl EssayClient {
    /// List essays, optionally filtered by a search term.
    ///
    /// A blank term is the same as no term.
    pub async fn list_essays(&self, search: Option<&str>) -> Result<Vec<Essay>, ClientError> {
        let mut request = self.request(Method::GET, "/essay");
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            request = request.query(&[("search", term)]);
        }
        self.execute(request).await
    }

    /// Get an author's essay together with its reviews
    pub async fn get_essay(&self, author: &str) -> Result<EssayWithReviews, ClientError> {
        let request = self.request_segments(Method::GET, &["essay", author])?;
        self.execute(request).await
    }

    /// Publish the logged-in user's essay, replacing any previous one
    pub async fn publish_essay(&self, content: &str) -> Result<Essay, ClientError> {
        validate_essay_content(content)?;
        let author = self.session().username().ok_or(ClientError::NotLoggedIn)?;

        let request = self.request(Method::POST, "/essay").json(&EssayRequest {
            content: content.to_string(),
            author,
        });
        self.execute(request).await
    }
}
