//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every bounded context agrees on:
//! - The error classification ([`error::kind::ErrorKind`]) and the
//!   problem-details error type ([`error::app_error::AppError`])
//! - Typed database identifiers ([`id::Id`])
//!
//! Only things whose meaning is identical in `auth` and `shopping` belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
