//! External collaborator clients.

pub mod identity;

pub use identity::{HttpIdentityProvider, IdentityError, IdentityProvider};
