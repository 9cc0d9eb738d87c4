// libemv/src/transport/mod.rs

//! The link to the card and its test double.

pub mod guard;
pub mod mock;
pub mod traits;

pub use guard::ConnectionGuard;
pub use mock::MockTransport;
pub use traits::Transport;
