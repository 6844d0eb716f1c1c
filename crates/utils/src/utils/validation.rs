use crate::error::{ClubhouseErrorType, ClubhouseResult};
use regex::Regex;
use std::sync::LazyLock;

const CLUB_NAME_MIN_LENGTH: usize = 3;
const CLUB_NAME_MAX_LENGTH: usize = 21;
const CLUB_DESCRIPTION_MAX_LENGTH: usize = 300;
const POST_TITLE_MAX_LENGTH: usize = 200;
const BODY_MAX_LENGTH: usize = 10000;
const POST_BODY_MAX_LENGTH: usize = 50000;

fn has_newline(name: &str) -> bool {
  name.contains('\n')
}

pub fn is_valid_club_name(name: &str) -> ClubhouseResult<()> {
  #[allow(clippy::expect_used)]
  static VALID_CLUB_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

  min_length_check(name, CLUB_NAME_MIN_LENGTH, ClubhouseErrorType::InvalidClubName)?;
  max_length_check(name, CLUB_NAME_MAX_LENGTH, ClubhouseErrorType::InvalidClubName)?;
  if VALID_CLUB_NAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(ClubhouseErrorType::InvalidClubName.into())
  }
}

pub fn is_valid_club_description(description: &str) -> ClubhouseResult<()> {
  max_length_check(
    description,
    CLUB_DESCRIPTION_MAX_LENGTH,
    ClubhouseErrorType::InvalidClubDescription,
  )
}

/// Post titles must be non-blank single lines
pub fn is_valid_post_title(title: &str) -> ClubhouseResult<()> {
  let check = !title.trim().is_empty()
    && title.chars().count() <= POST_TITLE_MAX_LENGTH
    && !has_newline(title);
  if check {
    Ok(())
  } else {
    Err(ClubhouseErrorType::InvalidPostTitle.into())
  }
}

pub fn is_valid_post_body_field(body: &str) -> ClubhouseResult<()> {
  max_length_check(body, POST_BODY_MAX_LENGTH, ClubhouseErrorType::InvalidBodyField)
}

pub fn is_valid_comment_content(content: &str) -> ClubhouseResult<()> {
  min_length_check(content.trim(), 1, ClubhouseErrorType::InvalidBodyField)?;
  max_length_check(content, BODY_MAX_LENGTH, ClubhouseErrorType::InvalidBodyField)
}

fn min_length_check(
  item: &str,
  min_length: usize,
  error_type: ClubhouseErrorType,
) -> ClubhouseResult<()> {
  if item.chars().count() < min_length {
    Err(error_type.into())
  } else {
    Ok(())
  }
}

fn max_length_check(
  item: &str,
  max_length: usize,
  error_type: ClubhouseErrorType,
) -> ClubhouseResult<()> {
  if item.chars().count() > max_length {
    Err(error_type.into())
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_club_name() {
    assert!(is_valid_club_name("rust").is_ok());
    assert!(is_valid_club_name("rust_lang_2024").is_ok());
    assert!(is_valid_club_name("abc").is_ok());
    assert!(is_valid_club_name("a_twenty_one_chars_ok").is_ok());
  }

  #[test]
  fn test_invalid_club_name() {
    assert!(is_valid_club_name("ab").is_err());
    assert!(is_valid_club_name("this_name_is_way_too_long").is_err());
    assert!(is_valid_club_name("has space").is_err());
    assert!(is_valid_club_name("bad-dash").is_err());
    assert!(is_valid_club_name("").is_err());
  }

  #[test]
  fn test_valid_post_title() {
    assert!(is_valid_post_title("A first post").is_ok());
    assert!(is_valid_post_title("   ").is_err());
    assert!(is_valid_post_title("two\nlines").is_err());
    assert!(is_valid_post_title(&"x".repeat(POST_TITLE_MAX_LENGTH + 1)).is_err());
  }

  #[test]
  fn test_valid_comment_content() {
    assert!(is_valid_comment_content("nice post").is_ok());
    assert!(is_valid_comment_content(" \n ").is_err());
    assert!(is_valid_comment_content(&"x".repeat(BODY_MAX_LENGTH + 1)).is_err());
  }

  #[test]
  fn test_valid_body_and_description() {
    assert!(is_valid_post_body_field("body").is_ok());
    assert!(is_valid_post_body_field(&"x".repeat(POST_BODY_MAX_LENGTH + 1)).is_err());
    assert!(is_valid_club_description("all about rust").is_ok());
    assert!(is_valid_club_description(&"x".repeat(CLUB_DESCRIPTION_MAX_LENGTH + 1)).is_err());
  }
}
