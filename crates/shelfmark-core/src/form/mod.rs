//! Form records.
//!
//! Each form is an explicit struct of string fields plus a field enum
//! that names them. Fields are addressable by enum or by the wire name
//! the backend and the page markup use (`passwordConfirm`,
//! `coverUrl`, ...).

pub mod book;
pub mod registration;

/// True when `value` has no non-whitespace content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
