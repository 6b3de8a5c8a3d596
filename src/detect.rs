//! Guesses the casing convention of a string from its raw character structure.
//!
//! Detection never tokenizes. The rules run in a fixed order and the first match wins:
//!
//! 1. Empty input is [`CaseType::None`].
//! 2. Hyphens without underscores mean kebab-case.
//! 3. Underscores without hyphens mean snake_case.
//! 4. A single glued word starting lowercase with some uppercase is camelCase; one starting
//!    uppercase with both upper- and lowercase letters is PascalCase.
//! 5. Spaced text is UPPER CASE or lower case when only one letter case appears, otherwise
//!    Title Case if enough words start with a capital, and Sentence case if not.
//! 6. Anything else is [`CaseType::None`].

use log::trace;

use crate::{is_acronym, CaseOptions, CaseType};
use crate::tokenizer::{is_lower_letter, is_upper_letter};

/// Detects the most likely casing convention of `input`.
///
/// ```
/// use casefold::{detect, CaseType};
///
/// assert_eq!(CaseType::KebabCase, detect("hello-world"));
/// assert_eq!(CaseType::None, detect("hello"));
/// ```
pub fn detect(input: &str) -> CaseType {
  let detected = detect_structure(input);
  trace!("detected {:?} for {:?}", detected, input);
  detected
}

/// Detects the casing convention of `input`, then prefers Title Case over the spaced styles when
/// `preserve_acronyms_in_title_casing` is set and some space-separated word is an acronym.
pub fn detect_with(input: &str, options: &CaseOptions) -> CaseType {
  let detected = detect(input);
  if !options.preserve_acronyms_in_title_casing {
    return detected
  }

  match detected {
    CaseType::SentenceCase | CaseType::LowerCase | CaseType::UpperCase | CaseType::TitleCase => {
      if spaced_words(input).any(is_acronym) {
        trace!("acronym found in {:?}, treating as title case", input);
        return CaseType::TitleCase
      }
      detected
    },
    other => other,
  }
}

#[inline]
fn spaced_words(input: &str) -> impl Iterator<Item = &str> {
  input.split(' ').filter(|word| !word.is_empty())
}

fn detect_structure(input: &str) -> CaseType {
  let first = match input.chars().next() {
    Some(c) => c,
    None => return CaseType::None,
  };

  let has_hyphen = input.contains('-');
  let has_underscore = input.contains('_');
  let has_space = input.contains(' ');
  let has_upper = input.chars().any(is_upper_letter);
  let has_lower = input.chars().any(is_lower_letter);

  if has_hyphen && !has_underscore {
    return CaseType::KebabCase
  }

  if has_underscore && !has_hyphen {
    return CaseType::SnakeCase
  }

  if !has_space && !has_hyphen && !has_underscore {
    if is_lower_letter(first) && has_upper {
      return CaseType::CamelCase
    }
    if is_upper_letter(first) && has_upper && has_lower {
      return CaseType::PascalCase
    }
  }

  if has_space {
    if has_upper && !has_lower {
      return CaseType::UpperCase
    }
    if has_lower && !has_upper {
      return CaseType::LowerCase
    }

    let mut word_count = 0usize;
    let mut capitalized = 0usize;
    for word in spaced_words(input) {
      word_count += 1;
      if word.chars().next().map_or(false, is_upper_letter) {
        capitalized += 1;
      }
    }

    return if capitalized >= (word_count / 2).max(1) {
      CaseType::TitleCase
    } else {
      CaseType::SentenceCase
    }
  }

  CaseType::None
}
