//! Core types: form state, request payload, and generation result.

pub mod form;
pub mod request;
pub mod result;

pub use form::*;
pub use request::*;
pub use result::*;
