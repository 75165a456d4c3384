use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(?:-[A-Za-z]+)*$").unwrap());
static VALUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").unwrap());
static RATING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*{1,5}$").unwrap());

/// Structured result of parsing one raw tag input. At most one of
/// `value`/`rating` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTagInput {
    pub name: String,
    pub value: Option<String>,
    pub rating: Option<i16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyInput,
    InvalidName,
    InvalidPayload,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput => write!(f, "Tag is required"),
            ValidationError::InvalidName => write!(
                f,
                "Invalid tag name. Use letters only with single '-' separators (e.g., dinner-with-family)."
            ),
            ValidationError::InvalidPayload => write!(
                f,
                "Invalid value or rating. Use words/digits with '-', or 1-5 stars."
            ),
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

pub fn parse_input(raw_input: &str) -> Result<ParsedTagInput, ValidationError> {
    let input = raw_input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let (name, payload) = match input.split_once(':') {
        Some((name, payload)) => (name, Some(payload)),
        None => (input, None),
    };
    if !is_valid_name(name) {
        return Err(ValidationError::InvalidName);
    }

    let payload = match payload {
        Some(payload) => payload,
        None => {
            return Ok(ParsedTagInput {
                name: name.to_string(),
                value: None,
                rating: None,
            })
        }
    };

    // A star run occupies the value slot, so it is matched before the
    // generic value grammar. The 1-5 bound rejects six stars outright.
    if RATING_REGEX.is_match(payload) {
        return Ok(ParsedTagInput {
            name: name.to_string(),
            value: None,
            rating: Some(payload.len() as i16),
        });
    }

    if VALUE_REGEX.is_match(payload) {
        return Ok(ParsedTagInput {
            name: name.to_string(),
            value: Some(payload.to_string()),
            rating: None,
        });
    }

    Err(ValidationError::InvalidPayload)
}
