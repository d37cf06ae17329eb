pub mod code;
pub mod errors;
pub mod game;
pub mod messages;

// Re-export all types
pub use code::*;
pub use errors::*;
pub use game::*;
pub use messages::*;
