// Access traits for the remote table store.
// Each repository is responsible for a single table.
// Related records are only referenced by their id.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The store rejected the request: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait BathroomRepo {
    fn all_bathrooms(&self) -> Result<Vec<Bathroom>>;
    fn get_bathroom(&self, id: &str) -> Result<Bathroom>;

    /// Returns the stored bathroom including its new id.
    fn create_bathroom(&self, bathroom: &BathroomDraft) -> Result<Bathroom>;
}

pub trait ReviewRepo {
    // Newest first
    fn load_reviews_of_bathroom(&self, bathroom_id: &str) -> Result<Vec<Review>>;

    /// Returns the stored review including id and creation time.
    fn create_review(&self, review: &ReviewDraft) -> Result<Review>;
}
