use shelfmark_core::{messages, BookField, BookForm, StatusClass, SubmissionOutcome, ValidationErrors};

use crate::controller::SubmitFlag;
use crate::gateway::{ApiResponse, Gateway, Method};
use crate::token::TokenSource;

pub const BOOKS_PATH: &str = "/api/v1/books";

/// Drives the book creation form.
///
/// Validation errors are shown inline next to each field; the message
/// line is reserved for the server's answer. A successful submission
/// resets every field, the cover URL included.
#[derive(Debug)]
pub struct BookController<G> {
    gateway: G,
    tokens: Box<dyn TokenSource>,
    form: BookForm,
    errors: ValidationErrors<BookField>,
    message: Option<String>,
    submitting: SubmitFlag,
}

impl<G: Gateway> BookController<G> {
    pub fn new(gateway: G, tokens: Box<dyn TokenSource>) -> Self {
        Self {
            gateway,
            tokens,
            form: BookForm::default(),
            errors: ValidationErrors::new(),
            message: None,
            submitting: SubmitFlag::default(),
        }
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors<BookField> {
        &self.errors
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    pub fn submitting_flag(&self) -> SubmitFlag {
        self.submitting.clone()
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        self.submitting.label()
    }

    pub fn update_field(&mut self, field: BookField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> shelfmark_core::Result<()> {
        self.form.update_named(name, value)
    }

    pub fn validate(&self) -> ValidationErrors<BookField> {
        self.form.validate()
    }

    /// Validate and, if the form is clean, send the new book.
    ///
    /// The bearer token is looked up at submit time and attached only
    /// when one exists.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let payload = match self.form.validated() {
            Ok(payload) => payload,
            Err(errors) => {
                log::debug!("Book form rejected locally: {} field(s)", errors.len());
                self.errors = errors;
                return SubmissionOutcome::ValidationFailed { message: None };
            }
        };

        self.errors.clear();
        self.message = None;
        let _submitting = self.submitting.raise();

        let token = self.tokens.token();
        log::info!(
            "Creating book {:?} ({})",
            payload.title,
            if token.is_some() { "authenticated" } else { "anonymous" }
        );

        let outcome = match self
            .gateway
            .send(Method::POST, BOOKS_PATH, Some(&payload), token.as_deref())
            .await
        {
            Ok(response) => interpret(&response),
            Err(e) => {
                log::warn!("Book creation request failed: {}", e);
                SubmissionOutcome::NetworkError {
                    message: Some(messages::BOOK_CREATE_FAILED.to_string()),
                }
            }
        };

        if outcome.is_success() {
            self.form.reset();
        }
        self.message = outcome.message().map(str::to_string);
        outcome
    }
}

fn interpret(response: &ApiResponse) -> SubmissionOutcome {
    match response.class() {
        StatusClass::Success => SubmissionOutcome::Success {
            message: Some(messages::BOOK_CREATED.to_string()),
        },
        StatusClass::Unauthorized => SubmissionOutcome::Unauthorized {
            message: Some(messages::LOGIN_REQUIRED.to_string()),
        },
        StatusClass::Conflict | StatusClass::Failure => {
            log::warn!("Book creation failed with status {}", response.status);
            SubmissionOutcome::ServerError {
                status: response.status,
                message: Some(messages::BOOK_CREATE_FAILED.to_string()),
            }
        }
    }
}
