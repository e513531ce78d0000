//! # Error Types
//!
//! Validation errors for retail-core.
//!
//! ## Where Errors Live (and Where They Don't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart operations (cart.rs)      → total functions, NO error path    │
//! │  UI-layer validators (validation.rs) → ValidationError (this file)  │
//! │  Storage (retail-store)         → StoreError (separate crate)       │
//! │                                                                     │
//! │  The cart never rejects input; callers that want guard rails run    │
//! │  the validators first and surface the message themselves.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input does not meet the UI-layer guard rails.
/// Each variant maps to a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Requested quantity exceeds the reported stock ceiling.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
