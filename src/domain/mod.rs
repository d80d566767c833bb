//! Domain value objects and types.
//!
//! Type-safe wrappers for the configured sender and recipient. These are
//! validated once at startup so a bad address fails fast instead of on
//! the first submission.

pub mod errors;
pub mod mailbox;

pub use errors::ValidationError;
pub use mailbox::Mailbox;
