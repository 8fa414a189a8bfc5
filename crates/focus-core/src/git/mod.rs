//! Version-control collaborator.
//!
//! Sessions only store the branch name they get back; the lifecycle calls
//! into `VersionControl` for the start, resume, merge and abandon steps.

pub mod cli;
pub mod errors;
pub mod naming;
pub mod traits;

pub use cli::GitCli;
pub use errors::GitError;
pub use naming::{branch_name, slugify};
pub use traits::VersionControl;
