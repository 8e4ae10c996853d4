//! Admin authentication: JWT tokens and the route guard middleware

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{ADMIN_TOKEN_COOKIE, CurrentAdmin, require_admin};
