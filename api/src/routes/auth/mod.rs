//! Phone sign-in: request a code, then exchange it for an access token

pub mod send_code;
pub mod verify_code;

pub use send_code::send_code;
pub use verify_code::verify_code;
