use crate::Result;
use crate::card_creator::create_membership_card;
use crate::utils::{
    add_class, append_child, clear_element, get_element_by_id, get_element_by_id_dyn,
    log_on_error, remove_class,
};
use consulta_membresias::membership::MembershipCard;
use consulta_membresias::membership::look_up::{LookupView, StatusLevel};
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

pub const FORM_ID: &str = "consulta-form";
pub const PHONE_NUMBER_INPUT_ID: &str = "telefono";
pub const STATUS_ID: &str = "status";
pub const RESULT_ID: &str = "resultado";
pub const SUBMIT_BUTTON_ID: &str = "btn-consultar";

const STATUS_INFO_CLASS_NAME: &str = "status--info";
const STATUS_ERROR_CLASS_NAME: &str = "status--error";
const VISIBLE_CLASS_NAME: &str = "visible";

/// The elements of the look-up form, as published by the host page.
pub struct LookupBindings {
    document: Document,
    form: HtmlFormElement,
    phone_number_input: HtmlInputElement,
    status: Element,
    result: Element,
    submit_button: HtmlButtonElement,
}

impl LookupBindings {
    pub fn bind(document: &Document) -> Result<Self> {
        Ok(Self {
            document: document.clone(),
            form: get_element_by_id_dyn(document, FORM_ID)?,
            phone_number_input: get_element_by_id_dyn(document, PHONE_NUMBER_INPUT_ID)?,
            status: get_element_by_id(document, STATUS_ID)?,
            result: get_element_by_id(document, RESULT_ID)?,
            submit_button: get_element_by_id_dyn(document, SUBMIT_BUTTON_ID)?,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn phone_number(&self) -> String {
        self.phone_number_input.value()
    }

    fn render_status(&self, message: &str, level: StatusLevel) -> Result<()> {
        self.status.set_text_content(Some(message));
        remove_class(&self.status, STATUS_INFO_CLASS_NAME)?;
        remove_class(&self.status, STATUS_ERROR_CLASS_NAME)?;
        match level {
            StatusLevel::Info => add_class(&self.status, STATUS_INFO_CLASS_NAME),
            StatusLevel::Error => add_class(&self.status, STATUS_ERROR_CLASS_NAME),
        }
    }

    fn render_result(&self, card: &MembershipCard) -> Result<()> {
        clear_element(&self.result);
        for element in create_membership_card(&self.document, card)? {
            append_child(&self.result, &element)?;
        }
        add_class(&self.result, VISIBLE_CLASS_NAME)
    }
}

impl LookupView for LookupBindings {
    fn set_status(&self, message: &str, level: StatusLevel) {
        log_on_error(self.render_status(message, level));
    }

    fn clear_result(&self) {
        log_on_error(remove_class(&self.result, VISIBLE_CLASS_NAME));
        clear_element(&self.result);
    }

    fn show_result(&self, card: &MembershipCard) {
        log_on_error(self.render_result(card));
    }

    fn set_busy(&self, busy: bool) {
        self.submit_button.set_disabled(busy);
    }
}
