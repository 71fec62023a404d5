//! Validation API services.
//!
//! # Services
//!
//! - [`upload`] - Multipart PDF upload with progress (`XMLHttpRequest`)
//! - [`health`] - API reachability probe (`gloo-net`)

pub mod health;
pub mod upload;

pub use health::*;
pub use upload::*;
