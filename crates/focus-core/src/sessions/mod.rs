pub mod errors;
pub mod lifecycle;
mod lock;
pub mod store;
pub mod types;

pub use errors::SessionError;
pub use lifecycle::SessionSummary;
pub use store::{SessionListing, SessionStore};
pub use types::{Drift, Session, SessionId, SessionStatus};
