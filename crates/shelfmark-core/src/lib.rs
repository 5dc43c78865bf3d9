//! Core domain model for shelfmark.
//!
//! This crate defines the form records for user registration and book
//! creation, their validation rules, the fixed genre catalogue, and the
//! classified outcome of a submission. Nothing here performs I/O.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod form;
pub mod genre;
pub mod messages;
pub mod outcome;
pub mod validation;

pub use error::{Error, Result};
pub use form::book::{BookField, BookForm, NewBook};
pub use form::registration::{RegisterRequest, RegistrationField, RegistrationForm};
pub use genre::Genre;
pub use outcome::{StatusClass, SubmissionOutcome};
pub use validation::ValidationErrors;
