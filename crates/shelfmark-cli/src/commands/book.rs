use anyhow::Result;
use shelfmark_client::{
    ApiClient, BookController, Config, FileTokenStore, StaticToken, TokenSource,
};
use shelfmark_core::BookField;

use super::{finish, print_field_errors};

/// Field values for a new book, as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub cover_url: String,
}

pub async fn run_create_book(config: &Config, book: BookInput, token: Option<String>) -> Result<()> {
    log::info!("Starting book creation");

    let tokens: Box<dyn TokenSource> = match token {
        Some(token) => Box::new(StaticToken::new(Some(token))),
        None => Box::new(FileTokenStore::new(&config.token_path)),
    };

    let client = ApiClient::from_config(config)?;
    let mut controller = BookController::new(client, tokens);
    controller.update_field(BookField::Title, book.title);
    controller.update_field(BookField::Author, book.author);
    controller.update_field(BookField::Description, book.description);
    controller.update_field(BookField::Genre, book.genre);
    controller.update_field(BookField::CoverUrl, book.cover_url);

    if let Some(cover) = controller.form().cover_preview() {
        println!("  Cover: {}", cover);
    }
    println!("  [{}]", controller.submit_label());

    let outcome = controller.submit().await;

    print_field_errors(controller.errors(), BookField::wire_name);
    finish(&outcome)
}
