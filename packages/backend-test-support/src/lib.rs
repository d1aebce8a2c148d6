//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: idempotent logging
//! setup, raw token minting (including tokens the backend itself would never
//! issue) and assertions on the JSON error contract.

pub mod error_body;
pub mod logging;
pub mod tokens;
