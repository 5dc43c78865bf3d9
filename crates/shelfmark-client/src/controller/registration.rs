use shelfmark_core::{
    messages, RegistrationField, RegistrationForm, StatusClass, SubmissionOutcome,
    ValidationErrors,
};

use crate::controller::SubmitFlag;
use crate::gateway::{ApiResponse, Gateway, Method};
use crate::navigate::{Navigator, LOGIN_ROUTE};

pub const REGISTER_PATH: &str = "/api/v1/auth/register";

/// Drives the sign-up form.
///
/// The page shows a single error banner, so validation failures surface
/// the first failing field's message through [`message`](Self::message)
/// as well as through [`errors`](Self::errors).
#[derive(Debug)]
pub struct RegistrationController<G> {
    gateway: G,
    form: RegistrationForm,
    errors: ValidationErrors<RegistrationField>,
    message: Option<String>,
    submitting: SubmitFlag,
}

impl<G: Gateway> RegistrationController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            form: RegistrationForm::default(),
            errors: ValidationErrors::new(),
            message: None,
            submitting: SubmitFlag::default(),
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors<RegistrationField> {
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

    pub fn update_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> shelfmark_core::Result<()> {
        self.form.update_named(name, value)
    }

    pub fn validate(&self) -> ValidationErrors<RegistrationField> {
        self.form.validate()
    }

    /// Validate and, if the form is clean, send the registration.
    ///
    /// On success the navigator is sent to the login route exactly once.
    pub async fn submit<N>(&mut self, navigator: &mut N) -> SubmissionOutcome
    where
        N: Navigator + ?Sized,
    {
        self.message = None;

        let errors = self.form.validate();
        if !errors.is_empty() {
            let message = errors.first_message().map(str::to_string);
            log::debug!("Registration rejected locally: {:?}", message);
            self.errors = errors;
            self.message.clone_from(&message);
            return SubmissionOutcome::ValidationFailed { message };
        }
        self.errors.clear();

        let _submitting = self.submitting.raise();
        let payload = self.form.payload();
        log::info!("Registering {}", payload.email);

        let outcome = match self
            .gateway
            .send(Method::POST, REGISTER_PATH, Some(&payload), None)
            .await
        {
            Ok(response) => interpret(&response),
            Err(e) => {
                log::warn!("Registration request failed: {}", e);
                SubmissionOutcome::NetworkError {
                    message: Some(messages::SIGN_UP_NETWORK_ERROR.to_string()),
                }
            }
        };

        self.message = outcome.message().map(str::to_string);
        if outcome.is_success() {
            navigator.navigate(LOGIN_ROUTE);
        }
        outcome
    }
}

fn interpret(response: &ApiResponse) -> SubmissionOutcome {
    match response.class() {
        StatusClass::Success => SubmissionOutcome::Success {
            message: Some(messages::SIGN_UP_COMPLETED.to_string()),
        },
        StatusClass::Unauthorized => SubmissionOutcome::Unauthorized {
            message: Some(messages::LOGIN_REQUIRED.to_string()),
        },
        StatusClass::Conflict => SubmissionOutcome::Conflict {
            message: Some(messages::EMAIL_IN_USE.to_string()),
        },
        StatusClass::Failure => {
            log::warn!("Registration failed with status {}", response.status);
            SubmissionOutcome::ServerError {
                status: response.status,
                message: Some(
                    response
                        .message()
                        .unwrap_or(messages::SIGN_UP_FAILED)
                        .to_string(),
                ),
            }
        }
    }
}
