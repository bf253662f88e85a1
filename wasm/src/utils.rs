use crate::Result;
use crate::error::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| {
        Error::new(
            crate::error::DEFAULT_ERROR_MESSAGE,
            "No global `window` exists",
        )
    })
}

pub fn get_document() -> Result<Document> {
    get_window()?.document().ok_or_else(|| {
        Error::new(
            crate::error::DEFAULT_ERROR_MESSAGE,
            "Should have a document on window",
        )
    })
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    document.get_element_by_id(id).ok_or_else(|| {
        Error::new(
            crate::error::DEFAULT_ERROR_MESSAGE,
            &format!("`{id}` element does not exist"),
        )
    })
}

pub fn get_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    Ok(get_element_by_id(document, id)?.dyn_into::<T>()?)
}

pub fn create_element(document: &Document, name: &str) -> Result<Element> {
    Ok(document.create_element(name)?)
}

pub fn create_element_with_class(
    document: &Document,
    name: &str,
    class: &str,
    text: Option<&str>,
) -> Result<Element> {
    let element = create_element(document, name)?;
    element.set_class_name(class);
    if let Some(text) = text {
        element.set_text_content(Some(text));
    }
    Ok(element)
}

pub fn append_child(container: &Element, child: &Element) -> Result<()> {
    container.append_child(child)?;
    Ok(())
}

pub fn clear_element(element: &Element) {
    element.set_inner_html("");
}

pub fn add_class(element: &Element, class_name: &str) -> Result<()> {
    Ok(element.class_list().add_1(class_name)?)
}

pub fn remove_class(element: &Element, class_name: &str) -> Result<()> {
    Ok(element.class_list().remove_1(class_name)?)
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    Ok(element.set_attribute(name, value)?)
}

/// Whether `node` is `container` itself or one of its descendants.
pub fn contains(container: &Element, node: Option<&Node>) -> bool {
    node.is_some() && container.contains(node)
}

/// Rendering failures are logged: they must never break the page.
pub fn log_on_error(result: Result<()>) {
    if let Err(error) = result {
        log::error!("{error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_get_window() {
        assert!(get_window().is_ok());
    }

    #[wasm_bindgen_test]
    fn should_fail_to_get_missing_element() {
        let document = get_document().unwrap();
        assert!(get_element_by_id(&document, "this-id-does-not-exist").is_err());
    }

    #[wasm_bindgen_test]
    fn should_create_element_with_class_and_text() {
        let document = get_document().unwrap();
        let element =
            create_element_with_class(&document, "span", "nombre", Some("<b>Ana</b>")).unwrap();

        assert_eq!("nombre", element.class_name());
        assert_eq!(Some("<b>Ana</b>".to_owned()), element.text_content());
        assert_eq!(0, element.child_element_count());
    }

    #[wasm_bindgen_test]
    fn should_tell_whether_a_node_is_contained() {
        let document = get_document().unwrap();
        let container = create_element(&document, "div").unwrap();
        let child = create_element(&document, "span").unwrap();
        let outsider = create_element(&document, "span").unwrap();
        append_child(&container, &child).unwrap();

        assert!(contains(&container, Some(&*child)));
        assert!(contains(&container, Some(&*container)));
        assert!(!contains(&container, Some(&*outsider)));
        assert!(!contains(&container, None));
    }

    #[wasm_bindgen_test]
    fn should_toggle_class() {
        let document = get_document().unwrap();
        let element = create_element(&document, "div").unwrap();

        add_class(&element, "visible").unwrap();
        assert!(element.class_list().contains("visible"));

        remove_class(&element, "visible").unwrap();
        assert!(!element.class_list().contains("visible"));
    }
}
