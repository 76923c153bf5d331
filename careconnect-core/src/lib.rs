//! Pure domain logic of the careconnect front-end: the data model served by
//! the facility API, form validation, payload normalization and the tag
//! editor. Nothing in this crate performs I/O.

pub mod models;
pub mod normalize;
pub mod tags;
pub mod validate;
