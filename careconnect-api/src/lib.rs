//! The action dispatcher of the careconnect front-end: it executes the
//! create/link/list operations against the external facility API and maps
//! HTTP outcomes onto the result shape the forms consume.

pub mod actions;
pub mod dispatcher;
pub mod error;
pub mod gate;

pub use dispatcher::{ApiClient, Navigator, Outcome, Route};
pub use error::ApiError;
pub use gate::SubmitGate;
