use super::pointer::Pointer;
use super::token::decode_token;
use crate::error::{PointerError, ValueKind};
use serde_json::Value;

/// Walk `document` along the tokens of `pointer`.
pub fn resolve<'a>(document: &'a Value, pointer: &Pointer) -> Result<&'a Value, PointerError> {
    if document.is_null() {
        return Err(PointerError::NilDocument);
    }

    let mut current = document;
    for (position, encoded) in pointer.tokens().enumerate() {
        let token = decode_token(encoded);
        log::trace!("resolving token {position} {token:?} against {}", ValueKind::of(current));

        current = match current {
            Value::Object(map) => match map.get(&*token) {
                Some(value) => value,
                None => {
                    return Err(PointerError::ReferenceNotFound {
                        token: token.into_owned(),
                        position,
                    });
                }
            },
            Value::Array(arr) => step_into_array(arr, &token, position)?,
            other => {
                return Err(PointerError::CannotTraverseScalar {
                    token: token.into_owned(),
                    position,
                    kind: ValueKind::of(other),
                });
            }
        };
    }

    Ok(current)
}

fn step_into_array<'a>(
    arr: &'a [Value],
    token: &str,
    position: usize,
) -> Result<&'a Value, PointerError> {
    let index: i64 = token.parse().map_err(|_| PointerError::NotAnArrayIndex {
        token: token.to_string(),
        position,
    })?;

    usize::try_from(index)
        .ok()
        .and_then(|i| arr.get(i))
        .ok_or(PointerError::IndexOutOfBounds {
            index,
            len: arr.len(),
            position,
        })
}
