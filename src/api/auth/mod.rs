pub mod utils;
pub use utils::{BearerToken, SessionData, SessionManager};
