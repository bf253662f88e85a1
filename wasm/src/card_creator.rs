use crate::Result;
use crate::utils::{append_child, create_element, create_element_with_class};
use consulta_membresias::membership::MembershipCard;
use consulta_membresias::plans::PlanRow;
use consulta_membresias::plans::panel::PlansPlaceholder;
use web_sys::{Document, Element};

pub const END_DATE_LABEL: &str = "Fecha de vencimiento:";

/// Build the content of the result region: name and status badge, then the end date.
pub fn create_membership_card(document: &Document, card: &MembershipCard) -> Result<Vec<Element>> {
    let header = create_element_with_class(document, "div", "resultado-header", None)?;
    let name = create_element_with_class(
        document,
        "div",
        "resultado-nombre",
        Some(card.full_name().as_str()),
    )?;
    let badge = create_element_with_class(
        document,
        "span",
        &format!("badge-estado {}", card.status().css_class()),
        Some(card.status().label()),
    )?;
    append_child(&header, &name)?;
    append_child(&header, &badge)?;

    let end_date = create_element_with_class(document, "p", "resultado-item", None)?;
    let label = create_element(document, "strong")?;
    label.set_text_content(Some(END_DATE_LABEL));
    append_child(&end_date, &label)?;
    end_date.append_with_str_1(&format!(" {}", card.end_date()))?;

    Ok(vec![header, end_date])
}

pub fn create_plan_item(document: &Document, plan: &PlanRow) -> Result<Element> {
    let item = create_element_with_class(document, "div", "panel-plan-item", None)?;
    let name = create_element_with_class(
        document,
        "span",
        "nombre",
        Some(plan.name().as_str()),
    )?;
    let details = create_element_with_class(
        document,
        "span",
        "precio-dias",
        Some(plan.details().as_str()),
    )?;
    append_child(&item, &name)?;
    append_child(&item, &details)?;
    Ok(item)
}

pub fn create_plans_placeholder(
    document: &Document,
    placeholder: PlansPlaceholder,
) -> Result<Element> {
    create_element_with_class(
        document,
        "p",
        placeholder.css_class(),
        Some(placeholder.text()),
    )
}
