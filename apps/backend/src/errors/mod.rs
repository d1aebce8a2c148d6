//! Error codes for the resume centre backend.

pub mod error_code;

pub use error_code::ErrorCode;
