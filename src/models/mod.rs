/// Data models for the formrelay handler
pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::*;
pub use response::*;
