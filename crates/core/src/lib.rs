//! Domain types and pure logic for the Skyview academic results service.
//!
//! Nothing in this crate touches the database or the network. The `db`
//! crate persists these types and the `api` crate exposes them over HTTP.

pub mod co_scholastic;
pub mod error;
pub mod exam;
pub mod exam_config;
pub mod grading;
pub mod marks;
pub mod pagination;
pub mod types;
pub mod validation;
