//! Account system for Gatehouse
//!
//! Provides username/password accounts, biometric sign-in and a per-account profile,
//! all held by a single [`AccountStore`] persisted to a blob store.

pub mod errors;
pub mod persistence;
pub mod store;
pub mod types;
pub mod validation;


pub use errors::AccountError;
pub use persistence::STORAGE_KEY;
pub use store::AccountStore;
pub use types::*;
pub use validation::{
    MIN_PASSWORD_LENGTH, ValidationIssue, ValidationReport, validate_sign_in, validate_sign_up,
};
