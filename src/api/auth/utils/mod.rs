pub mod cache;
pub mod token;
pub use cache::{SessionData, SessionManager};
pub use token::{BearerToken, add_bearer_to_headers};
