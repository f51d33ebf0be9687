/// Mail-send capability and configuration services
pub mod config;
pub mod ses;

// Re-export service types
pub use config::{InputShape, RelayConfig};
pub use ses::{EmailSender, MockEmailSender, SesEmailSender};
