use crate::{
    entities::RatingContext,
    identity, repositories,
    util::validate::{BathroomInvalidation, ReviewInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is missing")]
    Name,
    #[error("The building is missing")]
    Building,
    #[error("No location has been selected")]
    MissingLocation,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The {0} rating is out of range")]
    RatingValue(RatingContext),
    #[error("Missing bathroom id")]
    MissingBathroom,
    #[error("This device has already reviewed the bathroom recently")]
    DuplicateReview,
    #[error(transparent)]
    Identity(#[from] identity::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Coarse classification of errors for presenting them to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    RemoteWrite,
    PlatformUnsupported,
    NotFound,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Name
            | Self::Building
            | Self::MissingLocation
            | Self::InvalidPosition
            | Self::RatingValue(_)
            | Self::MissingBathroom => ErrorKind::Validation,
            Self::DuplicateReview => ErrorKind::RemoteWrite,
            Self::Identity(_) => ErrorKind::PlatformUnsupported,
            Self::Repo(repositories::Error::NotFound) => ErrorKind::NotFound,
            Self::Repo(_) => ErrorKind::RemoteWrite,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingLocation => "Please select a location on the map".into(),
            Self::DuplicateReview | Self::Repo(repositories::Error::AlreadyExists) => {
                "Error submitting review. You may have already reviewed this bathroom recently."
                    .into()
            }
            Self::Identity(_) => "Review submission unavailable".into(),
            Self::Repo(repositories::Error::NotFound) => "Bathroom not found".into(),
            err => err.to_string(),
        }
    }
}

impl From<BathroomInvalidation> for Error {
    fn from(err: BathroomInvalidation) -> Self {
        match err {
            BathroomInvalidation::Name => Self::Name,
            BathroomInvalidation::Building => Self::Building,
            BathroomInvalidation::Position => Self::InvalidPosition,
        }
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::RatingValue(ctx) => Self::RatingValue(ctx),
            ReviewInvalidation::Bathroom => Self::MissingBathroom,
        }
    }
}
