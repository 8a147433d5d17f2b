use slugloo_core::{
    identity, repositories::Error as RepoError, usecases::Error as ParameterError,
    usecases::ErrorKind,
};
use std::io;
use thiserror::Error;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<identity::Error> for AppError {
    fn from(err: identity::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] ParameterError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// `None` for errors outside of the business logic.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Business(err) => Some(err.kind()),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Business(err) => err.user_message(),
            err => err.to_string(),
        }
    }
}
