pub(crate) mod pointer;
pub(crate) mod resolving;
pub(crate) mod token;

use crate::error::PointerError;
use pointer::Pointer;
use serde::de::DeserializeOwned;
use serde_json::Value;

impl Pointer {
    /// Resolve this pointer against `document`.
    pub fn get_value<'a>(&self, document: &'a Value) -> Result<&'a Value, PointerError> {
        resolving::resolve(document, self)
    }

    /// Resolve this pointer and deserialize the referenced value into `T`.
    pub fn get_value_as<T>(&self, document: &Value) -> Result<T, PointerError>
    where
        T: DeserializeOwned,
    {
        let value = self.get_value(document)?;
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn contains(&self, document: &Value) -> bool {
        self.get_value(document).is_ok()
    }
}
