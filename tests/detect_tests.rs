/*
  Detection Tests

  These tests verify that `detect` applies its structural rules in order,
  and that `detect_with` biases spaced text with acronyms toward Title Case.

*/

use casefold::*;

use assert_matches::*;

macro_rules! test_detect {
  ($input:literal, $expected:expr) => {{
    assert_eq!($expected, detect($input), "detecting {:?}", $input);
  }};
  ($input:literal with $options:expr, $expected:expr) => {{
    assert_eq!($expected, detect_with($input, &$options), "detecting {:?} with {:?}", $input, $options);
  }};
}

#[test]
fn empty_input() {
  test_detect!("", CaseType::None);
  test_detect!("" with CaseOptions::preserve_all(), CaseType::None);
}

#[test]
fn kebab() {
  test_detect!("hello-world", CaseType::KebabCase);
  test_detect!("-", CaseType::KebabCase);
}

#[test]
fn snake() {
  test_detect!("hello_world", CaseType::SnakeCase);
  test_detect!("HELLO_WORLD", CaseType::SnakeCase);
}

#[test]
fn delimiters_outrank_spaces() {
  test_detect!("my-var name", CaseType::KebabCase);
  test_detect!("foo_bar Baz", CaseType::SnakeCase);
}

#[test]
fn hyphen_and_underscore_together() {
  test_detect!("hello_world-x", CaseType::None);
  test_detect!("hello_world-x Foo", CaseType::TitleCase);
}

#[test]
fn camel() {
  test_detect!("helloWorld", CaseType::CamelCase);
  test_detect!("iPhone", CaseType::CamelCase);
}

#[test]
fn pascal() {
  test_detect!("HelloWorld", CaseType::PascalCase);
  test_detect!("Hello", CaseType::PascalCase);
  test_detect!("HTTPServer", CaseType::PascalCase);
}

#[test]
fn glued_word_without_transitions() {
  test_detect!("hello", CaseType::None);
  test_detect!("HELLO", CaseType::None);
  test_detect!("x1", CaseType::None);
  test_detect!("1234", CaseType::None);
}

#[test]
fn cased_symbols_are_not_letters() {
  test_detect!("xⅫ", CaseType::None);
  test_detect!("Ⓐbc", CaseType::None);
  test_detect!("ªB", CaseType::None);
  test_detect!("HELLO ⓦⓞⓡⓛⓓ", CaseType::UpperCase);
  test_detect!("Ⓗello world", CaseType::SentenceCase);
}

#[test]
fn upper_and_lower() {
  test_detect!("HELLO WORLD", CaseType::UpperCase);
  test_detect!("hello world", CaseType::LowerCase);
  test_detect!("hello 42", CaseType::LowerCase);
}

#[test]
fn title_threshold() {
  test_detect!("Hello World", CaseType::TitleCase);
  // Half of the words (rounded down, at least one) is enough
  test_detect!("Hello world", CaseType::TitleCase);
  test_detect!("Hello big world", CaseType::TitleCase);
  test_detect!("THE Quick fox", CaseType::TitleCase);
  test_detect!("1st Place", CaseType::TitleCase);
}

#[test]
fn sentence_below_threshold() {
  test_detect!("The quick brown fox", CaseType::SentenceCase);
  test_detect!("hello World foo bar", CaseType::SentenceCase);
}

#[test]
fn repeated_spaces_are_ignored() {
  test_detect!("The   quick brown  fox", CaseType::SentenceCase);
}

#[test]
fn acronym_bias_prefers_title() {
  let options = CaseOptions::new().with_title_casing_acronyms(true);
  test_detect!("parse the HTTP response", CaseType::SentenceCase);
  test_detect!("parse the HTTP response" with options, CaseType::TitleCase);
  test_detect!("HELLO WORLD" with options, CaseType::TitleCase);
  test_detect!("HTTP Server" with options, CaseType::TitleCase);
}

#[test]
fn acronym_bias_needs_a_real_acronym() {
  let options = CaseOptions::new().with_title_casing_acronyms(true);
  test_detect!("hello world" with options, CaseType::LowerCase);
  test_detect!("A B" with options, CaseType::UpperCase);
  test_detect!("The quick brown fox" with options, CaseType::SentenceCase);
}

#[test]
fn acronym_bias_leaves_glued_styles_alone() {
  let options = CaseOptions::new().with_title_casing_acronyms(true);
  test_detect!("HTTP_server" with options, CaseType::SnakeCase);
  test_detect!("myHTTPServer" with options, CaseType::CamelCase);
  test_detect!("HELLO" with options, CaseType::None);
}

#[test]
fn other_options_do_not_bias() {
  let options = CaseOptions::new().with_delimited_acronyms(true).with_plain_acronyms(true);
  test_detect!("parse the HTTP response" with options, CaseType::SentenceCase);
}

#[test]
fn case_type_names() {
  for case in CaseType::ALL {
    assert_eq!(Ok(case), case.to_string().parse::<CaseType>());
  }
  assert_eq!(Ok(CaseType::SnakeCase), "SnakeCase".parse::<CaseType>());
  assert_eq!(Ok(CaseType::KebabCase), "kebab".parse::<CaseType>());
  assert_eq!(Ok(CaseType::UpperCase), "UPPER CASE".parse::<CaseType>());
  assert_eq!("Title Case", CaseType::TitleCase.to_string());
  assert_matches!("shouty".parse::<CaseType>(), Err(ParseError::UnknownCaseType(name)) if name == "shouty");
}

#[test]
fn detected_styles_are_never_glued_for_spaced_text() {
  for input in ["Hello World", "hello world", "HELLO WORLD", "The quick brown fox"] {
    assert_matches!(detect(input), CaseType::UpperCase | CaseType::LowerCase | CaseType::TitleCase | CaseType::SentenceCase);
  }
}

#[test]
fn spaced_styles() {
  assert!(CaseType::SentenceCase.is_spaced());
  assert!(!CaseType::KebabCase.is_spaced());
  assert_eq!(CaseType::None, CaseType::default());
}
