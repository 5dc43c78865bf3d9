use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown field `{name}` on the {form} form")]
    UnknownField { form: &'static str, name: String },

    #[error("unknown genre: {0}")]
    UnknownGenre(String),
}

pub type Result<T> = std::result::Result<T, Error>;
