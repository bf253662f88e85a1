use crate::Result;
use crate::card_creator::{create_plan_item, create_plans_placeholder};
use crate::utils::{
    add_class, append_child, clear_element, contains, get_element_by_id, log_on_error,
    remove_class, set_attribute,
};
use consulta_membresias::plans::PlanRow;
use consulta_membresias::plans::panel::{PlansPlaceholder, PlansView};
use web_sys::{Document, Element, Node};

pub const TRIGGER_ID: &str = "btn-planes";
pub const PANEL_ID: &str = "panel-planes";
pub const LIST_ID: &str = "panel-planes-lista";
pub const CLOSE_BUTTON_ID: &str = "btn-cerrar-planes";

const VISIBLE_CLASS_NAME: &str = "visible";

/// The floating plans panel and the buttons driving it.
pub struct PlansBindings {
    document: Document,
    trigger: Element,
    panel: Element,
    list: Element,
    close_button: Element,
}

impl PlansBindings {
    pub fn bind(document: &Document) -> Result<Self> {
        Ok(Self {
            document: document.clone(),
            trigger: get_element_by_id(document, TRIGGER_ID)?,
            panel: get_element_by_id(document, PANEL_ID)?,
            list: get_element_by_id(document, LIST_ID)?,
            close_button: get_element_by_id(document, CLOSE_BUTTON_ID)?,
        })
    }

    pub fn trigger(&self) -> &Element {
        &self.trigger
    }

    pub fn close_button(&self) -> &Element {
        &self.close_button
    }

    pub fn is_inside_panel(&self, node: Option<&Node>) -> bool {
        contains(&self.panel, node)
    }

    pub fn is_inside_trigger(&self, node: Option<&Node>) -> bool {
        contains(&self.trigger, node)
    }

    fn render_panel_open(&self, open: bool) -> Result<()> {
        if open {
            add_class(&self.panel, VISIBLE_CLASS_NAME)?;
        } else {
            remove_class(&self.panel, VISIBLE_CLASS_NAME)?;
        }
        set_attribute(&self.panel, "aria-hidden", &(!open).to_string())?;
        set_attribute(&self.trigger, "aria-expanded", &open.to_string())
    }

    fn render_placeholder(&self, placeholder: PlansPlaceholder) -> Result<()> {
        clear_element(&self.list);
        append_child(
            &self.list,
            &create_plans_placeholder(&self.document, placeholder)?,
        )
    }

    fn render_plans(&self, plans: &[PlanRow]) -> Result<()> {
        clear_element(&self.list);
        for plan in plans {
            append_child(&self.list, &create_plan_item(&self.document, plan)?)?;
        }
        Ok(())
    }
}

impl PlansView for PlansBindings {
    fn set_panel_open(&self, open: bool) {
        log_on_error(self.render_panel_open(open));
    }

    fn show_placeholder(&self, placeholder: PlansPlaceholder) {
        log_on_error(self.render_placeholder(placeholder));
    }

    fn show_plans(&self, plans: &[PlanRow]) {
        log_on_error(self.render_plans(plans));
    }
}
