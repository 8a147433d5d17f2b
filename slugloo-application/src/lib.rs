#[macro_use]
extern crate log;

mod add_bathroom;
mod list_bathrooms;
mod show_bathroom;
mod submit_review;

pub mod prelude {
    pub use super::{add_bathroom::*, list_bathrooms::*, show_bathroom::*, submit_review::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use slugloo_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
