//! CLI commands

use clap::Subcommand;
use essays_core::validation::validate_review;
use essays_core::{Credentials, Navigation, Route, guard};
use essays_http::{ClientError, EssayClient};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::views;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an account and log in
    Register { username: String, password: String },

    /// Log in with an existing account
    Login { username: String, password: String },

    /// Forget the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// List essays
    Essays {
        /// Only essays matching this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Show an author's essay and its reviews
    Essay { author: String },

    /// Show your own essay
    MyEssay,

    /// Publish or replace your essay from a text file
    Publish { file: PathBuf },

    /// Review an author's essay, content read from a text file
    Review {
        author: String,
        /// 1 (best) to 3 (worst)
        #[arg(long, default_value_t = 1)]
        rank: i64,
        file: PathBuf,
    },

    /// Latest reviews from everyone
    Reviews,

    /// Reviews you have written
    MyReviews,
}

/// Why a command produced no view
#[derive(Debug, Error)]
pub enum ViewError {
    /// Shown to the user as-is
    #[error("{0}")]
    Failed(String),

    #[error("Not logged in, redirected to {0}. Run `login <username> <password>` first.")]
    Redirected(Route),
}

impl ViewError {
    fn from_client(error: &ClientError, fallback: &str) -> Self {
        debug!("Action failed: {error}");
        Self::Failed(error.user_message(fallback))
    }
}

pub type ViewResult = Result<String, ViewError>;

/// Runs commands against one client and its session
pub struct App {
    client: EssayClient,
}

impl App {
    pub fn new(client: EssayClient) -> Self {
        Self { client }
    }

    /// Pass a navigation through the route guard
    fn navigate(&self, route: Route) -> Result<Route, ViewError> {
        match guard(route, self.client.session()) {
            Navigation::Allow(route) => Ok(route),
            Navigation::Redirect(to) => Err(ViewError::Redirected(to)),
        }
    }

    fn current_username(&self) -> Result<String, ViewError> {
        self.client
            .session()
            .username()
            .ok_or_else(|| ViewError::Failed("No username stored, please login again.".into()))
    }

    pub async fn execute(&self, command: Command) -> ViewResult {
        match command {
            Command::Register { username, password } => {
                let credentials = Credentials::new(username, password);
                self.client
                    .register(&credentials)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Registration failed"))?;
                Ok(format!("Registered and logged in as {}", credentials.username))
            }
            Command::Login { username, password } => {
                let credentials = Credentials::new(username, password);
                self.client
                    .login(&credentials)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Login failed"))?;
                Ok(format!("Logged in as {}", credentials.username))
            }
            Command::Logout => {
                self.client.logout();
                Ok("Logged out".to_string())
            }
            Command::Whoami => {
                let session = self.client.session();
                Ok(match (session.is_authenticated(), session.username()) {
                    (true, Some(name)) => format!("Logged in as {name}"),
                    (true, None) => "Logged in".to_string(),
                    (false, Some(name)) => format!("Not logged in (last user: {name})"),
                    (false, None) => "Not logged in".to_string(),
                })
            }
            Command::Essays { search } => {
                let essays = self
                    .client
                    .list_essays(search.as_deref())
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Error loading essays"))?;
                Ok(views::essay_list(&essays, search.as_deref()))
            }
            Command::Essay { author } => {
                let essay = self
                    .client
                    .get_essay(&author)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Error loading essay"))?;
                Ok(views::essay_detail(
                    &essay,
                    self.client.session().is_authenticated(),
                ))
            }
            Command::MyEssay => {
                self.navigate(Route::MyEssay)?;
                let username = self.current_username()?;
                match self.client.get_essay(&username).await {
                    Ok(essay) => Ok(views::my_essay(Some(&essay))),
                    // The backend answers 400 when the author has no essay.
                    Err(e) if matches!(e.status(), Some(400 | 404)) => Ok(views::my_essay(None)),
                    Err(e) => Err(ViewError::from_client(&e, "Error loading essay")),
                }
            }
            Command::Publish { file } => {
                self.navigate(Route::MyEssay)?;
                let content = read_text(&file).await?;
                let essay = self
                    .client
                    .publish_essay(&content)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Failed to publish."))?;
                Ok(format!(
                    "Essay published successfully! ({} characters by {})",
                    essay.content.trim().chars().count(),
                    essay.author
                ))
            }
            Command::Review { author, rank, file } => {
                if !self.client.session().is_authenticated() {
                    return Err(ViewError::Redirected(Route::Login));
                }
                let content = read_text(&file).await?;
                validate_review(rank, &content)
                    .map_err(|e| ViewError::Failed(e.to_string()))?;

                let essay = self
                    .client
                    .get_essay(&author)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Error loading essay"))?;
                self.client
                    .submit_review(essay.id, rank, &content)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Failed to submit review."))?;
                Ok("Review submitted!".to_string())
            }
            Command::Reviews => {
                let reviews = self
                    .client
                    .list_reviews()
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Error loading reviews"))?;
                Ok(views::review_feed(&reviews))
            }
            Command::MyReviews => {
                self.navigate(Route::MyReviews)?;
                let username = self.current_username()?;
                let reviews = self
                    .client
                    .reviews_by_author(&username)
                    .await
                    .map_err(|e| ViewError::from_client(&e, "Error loading reviews"))?;
                Ok(views::my_reviews(&reviews))
            }
        }
    }
}

async fn read_text(path: &PathBuf) -> Result<String, ViewError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ViewError::Failed(format!("Failed to read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use essays_core::Session;
    use std::sync::Arc;

    fn app(session: Arc<Session>) -> App {
        // Nothing listens here; tests below never reach the network.
        let client = EssayClient::builder()
            .base_url("http://127.0.0.1:9")
            .session(session)
            .build()
            .unwrap();
        App::new(client)
    }

    #[tokio::test]
    async fn test_protected_views_redirect_when_logged_out() {
        let app = app(Arc::new(Session::in_memory()));

        for command in [
            Command::MyEssay,
            Command::MyReviews,
            Command::Publish {
                file: PathBuf::from("essay.txt"),
            },
        ] {
            let result = app.execute(command).await;
            assert!(matches!(result, Err(ViewError::Redirected(Route::Login))));
        }
    }

    #[tokio::test]
    async fn test_review_requires_login() {
        let app = app(Arc::new(Session::in_memory()));
        let result = app
            .execute(Command::Review {
                author: "bob".into(),
                rank: 1,
                file: PathBuf::from("review.txt"),
            })
            .await;
        assert!(matches!(result, Err(ViewError::Redirected(Route::Login))));
    }

    #[tokio::test]
    async fn test_review_validated_before_network() {
        let session = Arc::new(Session::in_memory());
        session.establish("tok", "alice").unwrap();
        let app = app(session);

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("review.txt");
        std::fs::write(&file, "too short").unwrap();

        let result = app
            .execute(Command::Review {
                author: "bob".into(),
                rank: 2,
                file,
            })
            .await;
        match result {
            Err(ViewError::Failed(message)) => {
                assert_eq!(message, "Review content length must be 256-1024 characters.")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_validation_message() {
        let app = app(Arc::new(Session::in_memory()));
        let result = app
            .execute(Command::Login {
                username: "ab 12".into(),
                password: "pw".into(),
            })
            .await;
        match result {
            Err(ViewError::Failed(message)) => {
                assert_eq!(message, "Username must be alphanumeric and non-empty")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_whoami_and_logout() {
        let session = Arc::new(Session::in_memory());
        session.establish("tok", "alice").unwrap();
        let app = app(session);

        assert_eq!(
            app.execute(Command::Whoami).await.unwrap(),
            "Logged in as alice"
        );
        assert_eq!(app.execute(Command::Logout).await.unwrap(), "Logged out");
        assert_eq!(app.execute(Command::Whoami).await.unwrap(), "Not logged in");
    }
}
