//! Essays client core types and utilities

pub mod error;
pub mod guard;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult, ValidationError};
pub use guard::{Navigation, Route, guard};
pub use session::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{
    Credentials, Essay, EssayRequest, EssayWithReviews, Rank, Review, ReviewRequest,
    ReviewStanding, TokenResponse,
};
