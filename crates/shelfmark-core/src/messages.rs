//! User-facing message strings.
//!
//! The registration page speaks English and the book page speaks Korean;
//! the strings are kept exactly as the backend's users know them.

/// Shown for any 401 response, on either form.
pub const LOGIN_REQUIRED: &str = "로그인이 필요합니다.";

// Registration
pub const REQUIRED_FIELDS: &str = "Please fill in all required fields.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const EMAIL_IN_USE: &str = "Email is already in use.";
pub const SIGN_UP_COMPLETED: &str = "Sign up completed. Please log in.";
pub const SIGN_UP_FAILED: &str = "Sign up failed. Please try again.";
pub const SIGN_UP_NETWORK_ERROR: &str = "An error occurred during sign up. Please try again.";

// Book creation
pub const TITLE_REQUIRED: &str = "제목은 필수입니다.";
pub const DESCRIPTION_REQUIRED: &str = "소개는 필수입니다.";
pub const GENRE_REQUIRED: &str = "장르를 선택해 주세요.";
pub const BOOK_CREATED: &str = "도서 등록 요청이 완료되었습니다.";
pub const BOOK_CREATE_FAILED: &str = "등록 중 오류가 발생했습니다.";

pub const SUBMIT_IDLE: &str = "등록하기";
pub const SUBMIT_BUSY: &str = "등록 중...";
