#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # slugloo-entities
//!
//! Reusable, agnostic domain entities for SlugLoo.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod bathroom;
pub mod device;
pub mod geo;
pub mod id;
pub mod rating;
pub mod review;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
