pub mod claims;
pub mod context;
pub mod jwt;
pub mod role;

pub use claims::TokenClaims;
pub use context::AuthContext;
pub use jwt::{mint_access_token, verify_access_token, TokenRejection};
pub use role::{RequiredRole, ADMIN_ROLE};
