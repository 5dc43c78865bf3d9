use anyhow::Result;
use shelfmark_client::{ApiClient, Config, RegistrationController, RouteHistory};
use shelfmark_core::RegistrationField;

use super::{finish, print_field_errors};

pub async fn run_register(
    config: &Config,
    email: String,
    password: String,
    password_confirm: String,
    name: String,
) -> Result<()> {
    log::info!("Starting registration");

    let client = ApiClient::from_config(config)?;
    let mut controller = RegistrationController::new(client);
    controller.update_field(RegistrationField::Email, email);
    controller.update_field(RegistrationField::Password, password);
    controller.update_field(RegistrationField::PasswordConfirm, password_confirm);
    controller.update_field(RegistrationField::Name, name);

    let mut history = RouteHistory::new();
    let outcome = controller.submit(&mut history).await;

    print_field_errors(controller.errors(), RegistrationField::wire_name);
    finish(&outcome)?;

    if let Some(route) = history.current() {
        println!("  Next: log in ({})", route);
    }
    Ok(())
}
