mod bathroom_details;
mod create_new_bathroom;
mod error;
mod load_bathrooms;
mod review_bathroom;
mod search;

#[cfg(test)]
pub mod tests;

pub use self::{
    bathroom_details::*,
    create_new_bathroom::*,
    error::{Error, ErrorKind},
    load_bathrooms::*,
    review_bathroom::*,
    search::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
