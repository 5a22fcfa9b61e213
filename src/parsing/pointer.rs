use super::token::decode_token;
use crate::error::PointerError;
use crate::{EMPTY_POINTER, SEPARATOR};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A parsed JSON Pointer. Tokens stay encoded until resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pointer {
    raw: String,
    tokens: Vec<String>,
}

impl Pointer {
    /// Parse a pointer string.
    ///
    /// The empty string is the root reference. Any other input must start with `/`.
    pub fn new(pointer: &str) -> Result<Self, PointerError> {
        let tokens = parse_pointer_string(pointer)?;
        log::trace!("parsed pointer {pointer:?} into {} token(s)", tokens.len());
        Ok(Pointer {
            raw: pointer.to_string(),
            tokens,
        })
    }

    /// The pointer to the whole document
    pub fn root() -> Self {
        Pointer {
            raw: EMPTY_POINTER.to_string(),
            tokens: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the original pointer string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Reference tokens as they appear in the pointer string
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Reference tokens with `~1` and `~0` expanded
    pub fn decoded_tokens(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.tokens.iter().map(|token| decode_token(token))
    }
}

fn parse_pointer_string(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer == EMPTY_POINTER {
        return Ok(Vec::new());
    }
    if !pointer.starts_with(SEPARATOR) {
        return Err(PointerError::InvalidPointerSyntax {
            pointer: pointer.to_string(),
        });
    }
    // The leading separator always yields an empty first element
    Ok(pointer
        .split(SEPARATOR)
        .skip(1)
        .map(str::to_string)
        .collect())
}

impl Default for Pointer {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::new(s)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Pointer::new(value)
    }
}

impl TryFrom<String> for Pointer {
    type Error = PointerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let tokens = parse_pointer_string(&value)?;
        Ok(Pointer { raw: value, tokens })
    }
}

impl From<Pointer> for String {
    fn from(pointer: Pointer) -> Self {
        pointer.raw
    }
}
