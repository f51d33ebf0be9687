/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
// ============================================================================
// Size Limits
// ============================================================================
/// Maximum subject length in characters, measured on the raw value
pub const MAX_SUBJECT_LENGTH: usize = 120;

/// Maximum body length in characters, measured on the raw value
pub const MAX_BODY_LENGTH: usize = 2000;

/// Default limit on the number of fields in the subject/body-bearing mapping
pub const DEFAULT_MAX_FIELDS: usize = 2;

// ============================================================================
// Addresses
// ============================================================================

/// Fixed sender address for relayed submissions
pub const FROM_ADDRESS: &str = "webform@acme.com";

/// Fixed recipient address for relayed submissions
pub const TO_ADDRESS: &str = "contact@acme.com";
