//! JSON Pointer ([RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901)) evaluation over
//! [`serde_json::Value`] documents.
//!
//! A [`Pointer`] is parsed once and can be resolved against any number of documents.
//!
//! ```
//! use json_pointer_eval::{Pointer, PointerError};
//! use serde_json::json;
//!
//! let doc = json!({ "foo": { "bar": "baz" }, "array": [1, 2, 3] });
//!
//! let pointer = Pointer::new("/foo/bar").unwrap();
//! assert_eq!(pointer.get_value(&doc).unwrap(), &json!("baz"));
//!
//! let out_of_range = Pointer::new("/array/3").unwrap();
//! assert!(matches!(
//!     out_of_range.get_value(&doc),
//!     Err(PointerError::IndexOutOfBounds { index: 3, len: 3, .. })
//! ));
//! ```

pub mod error;
mod parsing;

pub use error::{PointerError, ValueKind};
pub use parsing::pointer::Pointer;
pub use parsing::resolving::resolve;
pub use parsing::token::decode_token;

/// The root reference
pub const EMPTY_POINTER: &str = "";
pub const SEPARATOR: &str = "/";
pub const ESCAPE: &str = "~";
/// Encoded form of `/` inside a reference token
pub const ENCODED_SEPARATOR: &str = "~1";
/// Encoded form of `~` inside a reference token
pub const ENCODED_TILDE: &str = "~0";
