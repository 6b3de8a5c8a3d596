//! # casefold
//!
//! Splits identifiers and free-form text into words, rebuilds them in a chosen casing convention,
//! and guesses which convention a string already follows.
//!
//! ```
//! use casefold::{convert, detect, CaseType, CasingLocale};
//!
//! assert_eq!("http_server_2", convert("HTTPServer2", CaseType::SnakeCase, CasingLocale::Invariant));
//! assert_eq!(CaseType::PascalCase, detect("HelloWorld"));
//! ```
//!
//! All functions are pure. Case folding is done through an explicit [`CasingLocale`]; use
//! [`CasingLocale::default()`] (invariant rules) when no particular locale applies.

mod case;
mod detect;
mod error;
mod options;
mod tokenizer;
pub mod format;

pub use case::*;
pub use detect::*;
pub use error::*;
pub use format::*;
pub use options::*;
pub use tokenizer::*;

use log::trace;

/// The casefold version according to the crate metadata.
pub const CASEFOLD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// String type used for individual word tokens.
pub type InternalString = smartstring::alias::CompactString;

/// Converts `input` to the casing style `case`.
///
/// [`CaseType::None`] returns `input` unchanged, without tokenizing it.
pub fn convert(input: &str, case: CaseType, locale: CasingLocale) -> String {
  if input.is_empty() {
    return String::new()
  }

  trace!("converting {:?} to {}", input, case);

  match case {
    CaseType::None => input.to_owned(),
    CaseType::CamelCase => to_camel_case(input, locale),
    CaseType::PascalCase => to_pascal_case(input, locale),
    CaseType::SnakeCase => to_snake_case(input, locale),
    CaseType::KebabCase => to_kebab_case(input, locale),
    CaseType::UpperCase => to_upper_case(input, locale),
    CaseType::LowerCase => to_lower_case(input, locale),
    CaseType::TitleCase => to_title_case(input, locale),
    CaseType::SentenceCase => to_sentence_case(input, locale),
  }
}

/// Converts `input` to the casing style `case`, applying the acronym rules in `options`.
///
/// camelCase and Sentence case ignore `options`.
pub fn convert_with(input: &str, case: CaseType, options: &CaseOptions, locale: CasingLocale) -> String {
  if options.is_default() {
    return convert(input, case, locale)
  }

  if input.is_empty() {
    return String::new()
  }

  trace!("converting {:?} to {} with {:?}", input, case, options);

  match case {
    CaseType::None => input.to_owned(),
    CaseType::CamelCase => to_camel_case(input, locale),
    CaseType::PascalCase => to_pascal_case_with(input, locale, options),
    CaseType::SnakeCase => to_snake_case_with(input, locale, options),
    CaseType::KebabCase => to_kebab_case_with(input, locale, options),
    CaseType::UpperCase => to_upper_case_with(input, locale, options),
    CaseType::LowerCase => to_lower_case_with(input, locale, options),
    CaseType::TitleCase => to_title_case_with(input, locale, options),
    CaseType::SentenceCase => to_sentence_case(input, locale),
  }
}

/// Adds casing conversions and detection to string types, using invariant casing rules.
///
/// ```
/// use casefold::{Casing, CaseType};
///
/// assert_eq!("hello-world", "HelloWorld".to_case(CaseType::KebabCase));
/// assert_eq!(CaseType::SnakeCase, "hello_world".case_type());
/// ```
pub trait Casing {
  /// Converts the string to the casing style `case`.
  fn to_case(&self, case: CaseType) -> String;

  /// Converts the string to the casing style `case` with acronym options.
  fn to_case_with(&self, case: CaseType, options: &CaseOptions) -> String;

  /// Detects the casing style of the string.
  fn case_type(&self) -> CaseType;

  /// Splits the string into word tokens.
  fn words(&self) -> Tokens;
}

impl<T: AsRef<str> + ?Sized> Casing for T {
  #[inline]
  fn to_case(&self, case: CaseType) -> String {
    convert(self.as_ref(), case, CasingLocale::Invariant)
  }

  #[inline]
  fn to_case_with(&self, case: CaseType, options: &CaseOptions) -> String {
    convert_with(self.as_ref(), case, options, CasingLocale::Invariant)
  }

  #[inline]
  fn case_type(&self) -> CaseType {
    detect(self.as_ref())
  }

  #[inline]
  fn words(&self) -> Tokens {
    tokenize(self.as_ref())
  }
}
