use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::form::is_blank;
use crate::genre::Genre;
use crate::messages;
use crate::validation::ValidationErrors;

/// Fields of the book creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BookField {
    Title,
    Author,
    Description,
    Genre,
    CoverUrl,
}

impl BookField {
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Description => "description",
            Self::Genre => "genre",
            Self::CoverUrl => "coverUrl",
        }
    }
}

impl FromStr for BookField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "description" => Ok(Self::Description),
            "genre" => Ok(Self::Genre),
            "coverUrl" | "cover_url" => Ok(Self::CoverUrl),
            _ => Err(Error::UnknownField {
                form: "book",
                name: s.to_string(),
            }),
        }
    }
}

/// Current values of the book creation form.
///
/// `genre` holds the raw selection; an empty string means nothing has
/// been chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub cover_url: String,
}

/// Body of `POST /api/v1/books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: Genre,
    pub cover_url: String,
}

impl BookForm {
    pub fn update_field(&mut self, field: BookField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Description => self.description = value,
            BookField::Genre => self.genre = value,
            BookField::CoverUrl => self.cover_url = value,
        }
    }

    /// Update a field addressed by its wire name.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Description => &self.description,
            BookField::Genre => &self.genre,
            BookField::CoverUrl => &self.cover_url,
        }
    }

    pub fn validate(&self) -> ValidationErrors<BookField> {
        self.validated().err().unwrap_or_default()
    }

    /// Validate the form and, when it is clean, build the request body.
    pub fn validated(&self) -> std::result::Result<NewBook, ValidationErrors<BookField>> {
        let mut errors = ValidationErrors::new();

        if is_blank(&self.title) {
            errors.insert(BookField::Title, messages::TITLE_REQUIRED);
        }
        if is_blank(&self.description) {
            errors.insert(BookField::Description, messages::DESCRIPTION_REQUIRED);
        }
        // Anything outside the catalogue counts as "not selected".
        let genre = self.genre.parse::<Genre>();
        if genre.is_err() {
            errors.insert(BookField::Genre, messages::GENRE_REQUIRED);
        }

        match genre {
            Ok(genre) if errors.is_empty() => Ok(NewBook {
                title: self.title.clone(),
                author: self.author.clone(),
                description: self.description.clone(),
                genre,
                cover_url: self.cover_url.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// URL to preview the cover from, when one has been entered.
    pub fn cover_preview(&self) -> Option<&str> {
        (!is_blank(&self.cover_url)).then_some(self.cover_url.as_str())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
