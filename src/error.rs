use std::{error::Error, fmt::Display};

/// Error returned when a case style or casing locale name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  /// The name does not match any known case style.
  UnknownCaseType(String),
  /// The name does not match any supported casing locale.
  UnknownLocale(String),
}

impl Error for ParseError {}

impl Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ParseError::UnknownCaseType(name) => write!(f, "unrecognized case style: '{}'", name),
      ParseError::UnknownLocale(name) => write!(f, "unrecognized casing locale: '{}'", name),
    }
  }
}
