//! API models for requests and responses

pub mod template;
pub mod upload;

// Re-export commonly used types
pub use template::*;
pub use upload::*;
