mod card_creator;
mod config;
mod error;
mod json;
mod lookup;
mod plans_panel;
mod utils;

use crate::config::read_firestore_config;
use crate::error::Result;
use crate::lookup::LookupBindings;
use crate::plans_panel::PlansBindings;
use crate::utils::get_document;
use consulta_membresias::gateway::firestore::FirestoreClient;
use consulta_membresias::membership::look_up::{LookupController, LookupView, StatusLevel};
use consulta_membresias::plans::panel::PlansPanelController;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, Node};

type Lookup = LookupController<FirestoreClient, LookupBindings>;
type PlansPanel = PlansPanelController<FirestoreClient, PlansBindings>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
    if let Err(error) = init_page() {
        log::error!("{error:?}");
    }
}

fn init_page() -> Result<()> {
    let document = get_document()?;
    let lookup_bindings = LookupBindings::bind(&document)?;
    let plans_bindings = PlansBindings::bind(&document)?;

    let client = match read_firestore_config(&document)
        .and_then(|config| Ok(FirestoreClient::new(config)?))
    {
        Ok(client) => client,
        Err(error) => {
            lookup_bindings.set_status(error.msg(), StatusLevel::Error);
            return Err(error);
        }
    };

    let lookup = Rc::new(LookupController::new(client.clone(), lookup_bindings));
    let plans_panel = Rc::new(PlansPanelController::new(client, plans_bindings));

    add_submit_listener(&lookup)?;
    add_plans_panel_listeners(&document, &plans_panel)?;

    lookup.show_welcome();
    log::info!("Membership look-up page is ready.");
    Ok(())
}

fn add_listener(
    target: &EventTarget,
    event_type: &str,
    handler: impl Fn(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(_)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// region Look-up form
fn add_submit_listener(lookup: &Rc<Lookup>) -> Result<()> {
    let form = lookup.view().form().clone();
    let lookup = lookup.clone();
    add_listener(&form, "submit", move |event: Event| {
        event.prevent_default();
        let lookup = lookup.clone();
        spawn_local(async move {
            let phone_number = lookup.view().phone_number();
            let outcome = lookup.submit(&phone_number).await;
            log::debug!("Look-up done [outcome: {outcome:?}]");
        });
    })
}
// endregion

// region Plans panel
fn add_plans_panel_listeners(document: &Document, plans_panel: &Rc<PlansPanel>) -> Result<()> {
    let trigger = plans_panel.view().trigger().clone();
    let panel = plans_panel.clone();
    add_listener(&trigger, "click", move |_: Event| {
        let panel = panel.clone();
        spawn_local(async move {
            panel.toggle().await;
        });
    })?;

    let close_button = plans_panel.view().close_button().clone();
    let panel = plans_panel.clone();
    add_listener(&close_button, "click", move |_: Event| {
        panel.close();
    })?;

    let panel = plans_panel.clone();
    add_listener(document, "click", move |event: Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok());
        let view = panel.view();
        panel.on_document_click(
            view.is_inside_panel(target.as_ref()),
            view.is_inside_trigger(target.as_ref()),
        );
    })
}
// endregion
