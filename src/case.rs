use std::{fmt::Display, str::FromStr};

use crate::ParseError;

/// A casing convention that text can be converted to or detected as.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CaseType {
  /// No conversion; also returned when detection is inconclusive.
  None,
  /// `helloWorld`
  CamelCase,
  /// `HelloWorld`
  PascalCase,
  /// `hello_world`
  SnakeCase,
  /// `hello-world`
  KebabCase,
  /// `HELLO WORLD`
  UpperCase,
  /// `hello world`
  LowerCase,
  /// `Hello World`
  TitleCase,
  /// `Hello world`
  SentenceCase,
}

impl CaseType {
  /// Every case type, in declaration order.
  pub const ALL: [CaseType; 9] = [
    CaseType::None,
    CaseType::CamelCase,
    CaseType::PascalCase,
    CaseType::SnakeCase,
    CaseType::KebabCase,
    CaseType::UpperCase,
    CaseType::LowerCase,
    CaseType::TitleCase,
    CaseType::SentenceCase,
  ];

  /// Gets the conventional name of the style, written in that style.
  #[inline]
  pub fn name(&self) -> &'static str {
    match self {
      CaseType::None => "none",
      CaseType::CamelCase => "camelCase",
      CaseType::PascalCase => "PascalCase",
      CaseType::SnakeCase => "snake_case",
      CaseType::KebabCase => "kebab-case",
      CaseType::UpperCase => "UPPER CASE",
      CaseType::LowerCase => "lower case",
      CaseType::TitleCase => "Title Case",
      CaseType::SentenceCase => "Sentence case",
    }
  }

  /// Returns `true` if the style is written as space-separated words.
  #[inline]
  pub fn is_spaced(&self) -> bool {
    matches!(self, CaseType::UpperCase | CaseType::LowerCase | CaseType::TitleCase | CaseType::SentenceCase)
  }
}

impl Default for CaseType {
  fn default() -> Self {
    Self::None
  }
}

impl Display for CaseType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for CaseType {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = s.trim().to_ascii_lowercase();
    Ok(match key.as_str() {
      "none" => Self::None,
      "camel" | "camelcase" | "camel_case" | "camel-case" => Self::CamelCase,
      "pascal" | "pascalcase" | "pascal_case" | "pascal-case" => Self::PascalCase,
      "snake" | "snakecase" | "snake_case" | "snake-case" => Self::SnakeCase,
      "kebab" | "kebabcase" | "kebab_case" | "kebab-case" => Self::KebabCase,
      "upper" | "uppercase" | "upper case" | "upper_case" | "upper-case" => Self::UpperCase,
      "lower" | "lowercase" | "lower case" | "lower_case" | "lower-case" => Self::LowerCase,
      "title" | "titlecase" | "title case" | "title_case" | "title-case" => Self::TitleCase,
      "sentence" | "sentencecase" | "sentence case" | "sentence_case" | "sentence-case" => Self::SentenceCase,
      _ => return Err(ParseError::UnknownCaseType(s.to_owned())),
    })
  }
}
