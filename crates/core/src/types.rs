//! Wire types shared by the client and the views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Reviewer-assigned quality tier, 1 (best) to 3 (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const BEST: Rank = Rank(1);
    pub const WORST: Rank = Rank(3);

    /// Numeric value in `1..=3`
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rank {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1..=3 => Ok(Rank(value as u8)),
            other => Err(ValidationError::RankOutOfRange(other)),
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Register/login body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Body returned by register, login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error payload the backend attaches to non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Essay as returned by `GET /essay/{author}`, reviews embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayWithReviews {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl EssayWithReviews {
    /// Best (numerically lowest) rank among the reviews
    pub fn best_rank(&self) -> Option<Rank> {
        self.reviews.iter().map(|r| r.rank).min()
    }

    pub fn standing(&self) -> ReviewStanding {
        ReviewStanding::from_best_rank(self.best_rank())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(rename = "essayId")]
    pub essay_id: i64,
    pub rank: Rank,
    pub content: String,
    // The per-author listing omits the author field.
    #[serde(default)]
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssayRequest {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    #[serde(rename = "essayId")]
    pub essay_id: i64,
    pub rank: Rank,
    pub content: String,
    pub author: String,
}

/// Hint shown above an essay, derived from the best review it has received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStanding {
    Unreviewed,
    BestRank(Rank),
}

impl ReviewStanding {
    pub fn from_best_rank(best: Option<Rank>) -> Self {
        best.map_or(Self::Unreviewed, Self::BestRank)
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Unreviewed => "This essay has no reviews yet, rank it as high as you can",
            Self::BestRank(rank) => match rank.get() {
                3 => "There is a rank 3 review, you can help the author by ranking the essay higher (1 or 2)",
                2 => "There is a rank 2 review, you can help the author by ranking the essay higher (1)",
                _ => "There is a rank 1 review, GIVE YOUR VOTE TO ANOTHER ESSAY",
            },
        }
    }
}

impl fmt::Display for ReviewStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
