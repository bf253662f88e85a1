use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::Element;

pub const DEFAULT_ERROR_MESSAGE: &str =
    "Ocurrió un error al cargar la página. Actualiza la página e intenta de nuevo.";

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error holding both what is displayed to users and what is logged for developers.
pub struct Error {
    msg: String,
    technical_msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: &str, technical_msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: technical_msg.to_owned(),
            parent: None,
        }
    }

    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: msg.to_owned(),
            parent: Some(Box::new(parent)),
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.technical_msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.technical_msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE,
            &value
                .as_string()
                .unwrap_or_else(|| format!("Unknown error has happened: {value:?}")),
        )
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        let text = format!("A cast has failed for element: {element:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}

impl From<consulta_membresias::error::ApplicationError> for Error {
    fn from(error: consulta_membresias::error::ApplicationError) -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE, &format!("{error:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_display_user_message_and_debug_technical_message() {
        let parent = Error::new("parent message", "parent technical message");
        let error = Error::from_parent("Something went wrong.", parent);

        assert_eq!("Something went wrong.", error.to_string());
        assert_eq!(
            "Something went wrong.: caused by:\nparent technical message",
            format!("{error:?}")
        );
    }
}
