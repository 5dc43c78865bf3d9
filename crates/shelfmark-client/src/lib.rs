//! Client side of shelfmark.
//!
//! Wraps the backend REST API in a single-shot HTTP gateway and drives
//! the registration and book creation forms through it: validate
//! locally, send one request, classify the response into a
//! [`SubmissionOutcome`] with the message shown to the user.
//!
//! [`SubmissionOutcome`]: shelfmark_core::SubmissionOutcome

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod navigate;
pub mod token;

pub use config::Config;
pub use controller::book::BookController;
pub use controller::registration::RegistrationController;
pub use controller::SubmitFlag;
pub use error::{ClientError, ClientResult};
pub use gateway::{ApiClient, ApiResponse, Gateway};
pub use navigate::{Navigator, RouteHistory, LOGIN_ROUTE};
pub use token::{FileTokenStore, StaticToken, TokenSource};
