pub mod auth_context;

pub use crate::auth::context::AuthContext;
