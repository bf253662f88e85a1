use crate::gateway::{FieldValue, QueryGateway};
use crate::plans::{ACTIVE_FIELD, PLANS_COLLECTION, PlanRow, plan_from_document};
use crate::tools::request_sequence::RequestSequence;
use dto::plan::{PlanRecord, sort_by_duration};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlansPlaceholder {
    Loading,
    Empty,
    Failed,
}

impl PlansPlaceholder {
    pub fn text(&self) -> &'static str {
        match self {
            PlansPlaceholder::Loading => "Cargando planes…",
            PlansPlaceholder::Empty => "No hay planes disponibles.",
            PlansPlaceholder::Failed => "No se pudieron cargar los planes. Intenta más tarde.",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PlansPlaceholder::Loading => "panel-planes-cargando",
            PlansPlaceholder::Empty | PlansPlaceholder::Failed => "panel-planes-error",
        }
    }
}

/// The floating panel listing the plans.
pub trait PlansView {
    fn set_panel_open(&self, open: bool);
    fn show_placeholder(&self, placeholder: PlansPlaceholder);
    fn show_plans(&self, plans: &[PlanRow]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, PartialEq)]
pub enum PlansOutcome {
    Loaded(Vec<PlanRow>),
    Empty,
    Failed,
    Superseded,
}

pub struct PlansPanelController<G: QueryGateway, V: PlansView> {
    gateway: G,
    view: V,
    state: Cell<PanelState>,
    requests: RequestSequence,
}

impl<G: QueryGateway, V: PlansView> PlansPanelController<G, V> {
    pub fn new(gateway: G, view: V) -> Self {
        Self {
            gateway,
            view,
            state: Cell::new(PanelState::Closed),
            requests: RequestSequence::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state() == PanelState::Open
    }

    /// Close the panel when it's open, open it and load the plans otherwise.
    pub async fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open().await;
        }
    }

    /// The plans are loaded again each time the panel gets opened.
    pub async fn open(&self) -> PlansOutcome {
        self.state.set(PanelState::Open);
        self.view.set_panel_open(true);
        self.load_plans().await
    }

    pub fn close(&self) {
        self.state.set(PanelState::Closed);
        self.view.set_panel_open(false);
    }

    /// A click anywhere in the page closes the panel, unless it hits the panel or its trigger.
    pub fn on_document_click(&self, inside_panel: bool, inside_trigger: bool) {
        if self.is_open() && !inside_panel && !inside_trigger {
            self.close();
        }
    }

    pub async fn load_plans(&self) -> PlansOutcome {
        self.view.show_placeholder(PlansPlaceholder::Loading);
        let ticket = self.requests.issue();

        let result = self
            .gateway
            .query_equals(PLANS_COLLECTION, ACTIVE_FIELD, FieldValue::from(true))
            .await;

        if !self.requests.is_latest(ticket) {
            debug!("Ignoring the response to a superseded plans loading.");
            return PlansOutcome::Superseded;
        }

        match result {
            Ok(documents) if documents.is_empty() => {
                self.view.show_placeholder(PlansPlaceholder::Empty);
                PlansOutcome::Empty
            }
            Ok(documents) => {
                let mut plans = documents
                    .iter()
                    .map(plan_from_document)
                    .collect::<Vec<PlanRecord>>();
                sort_by_duration(&mut plans);
                let rows = plans.iter().map(PlanRow::from).collect::<Vec<_>>();
                self.view.show_plans(&rows);
                PlansOutcome::Loaded(rows)
            }
            Err(error) => {
                error!("Error while loading plans: {error:?}");
                self.view.show_placeholder(PlansPlaceholder::Failed);
                PlansOutcome::Failed
            }
        }
    }
}
