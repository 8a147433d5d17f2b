pub mod entities {
    pub use slugloo_entities::{
        bathroom::*, device::*, geo::*, id::*, rating::*, review::*, time::*,
    };
}

pub mod gateways;
pub mod identity;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;
