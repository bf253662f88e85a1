use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use serde::de;

pub fn from_str<T>(s: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    serde_json_wasm::from_str(s).map_err(|error| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("Can't deserialize JSON: {error:?}"),
        )
    })
}
