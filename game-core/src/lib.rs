pub mod codegen;
pub mod history;
pub mod scoring;
pub mod service;
pub mod session;

// Re-export main components
pub use codegen::*;
pub use history::*;
pub use scoring::*;
pub use service::*;
pub use session::*;
