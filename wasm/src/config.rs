use crate::Result;
use crate::error::Error;
use crate::json;
use crate::utils::get_element_by_id;
use consulta_membresias::config::FirestoreConfig;
use web_sys::Document;

pub const FIRESTORE_CONFIG_ELEMENT_ID: &str = "firestore-config";

const CONFIG_ERROR_MESSAGE: &str =
    "La consulta no está disponible en este momento. Intenta más tarde.";

/// The host page publishes the document store location as JSON, in
/// `<script type="application/json" id="firestore-config">`.
pub fn read_firestore_config(document: &Document) -> Result<FirestoreConfig> {
    let element = get_element_by_id(document, FIRESTORE_CONFIG_ELEMENT_ID)
        .map_err(|error| Error::from_parent(CONFIG_ERROR_MESSAGE, error))?;
    let text = element.text_content().unwrap_or_default();
    parse_firestore_config(&text)
}

pub fn parse_firestore_config(text: &str) -> Result<FirestoreConfig> {
    json::from_str::<FirestoreConfig>(text)
        .map_err(|error| Error::from_parent(CONFIG_ERROR_MESSAGE, error))?
        .validate()
        .map_err(|error| {
            Error::new(
                CONFIG_ERROR_MESSAGE,
                &format!("Invalid document store configuration: {error:?}"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_parse_configuration() {
        let config = parse_firestore_config(r#"{"projectId":"gimnasio","apiKey":"abc"}"#).unwrap();

        assert_eq!("gimnasio", config.project_id());
        assert_eq!(&Some("abc".to_owned()), config.api_key());
    }

    #[wasm_bindgen_test]
    fn should_reject_configuration_without_project_id() {
        let error = parse_firestore_config(r#"{"projectId":"  "}"#).unwrap_err();

        assert_eq!(CONFIG_ERROR_MESSAGE, error.msg());
    }

    #[wasm_bindgen_test]
    fn should_reject_malformed_configuration() {
        assert!(parse_firestore_config("not json").is_err());
    }
}
