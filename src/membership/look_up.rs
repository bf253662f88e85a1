use crate::gateway::{FieldValue, QueryGateway};
use crate::membership::{
    MEMBERSHIPS_COLLECTION, MembershipCard, PHONE_FIELD, membership_from_document,
};
use crate::tools::request_sequence::{RequestSequence, RequestTicket};
use dto::phone_number::normalize_phone_number;

pub const WELCOME_MESSAGE: &str = "Escribe tu número de celular y presiona Consultar.";
pub const INVALID_PHONE_NUMBER_MESSAGE: &str = "Ingresa un número de celular válido.";
pub const SEARCHING_MESSAGE: &str = "Buscando membresía...";
pub const NOT_FOUND_MESSAGE: &str = "No se encontró ninguna membresía con ese número de celular.";
pub const FOUND_MESSAGE: &str = "Membresía encontrada.";
pub const LOOK_UP_ERROR_MESSAGE: &str =
    "Ocurrió un error al consultar la membresía. Intenta de nuevo en unos momentos.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// The part of the page showing the look-up form and its result.
pub trait LookupView {
    fn set_status(&self, message: &str, level: StatusLevel);
    fn clear_result(&self);
    fn show_result(&self, card: &MembershipCard);
    /// While busy, the form can't be submitted.
    fn set_busy(&self, busy: bool);
}

#[derive(Debug, PartialEq)]
pub enum LookupOutcome {
    InvalidInput,
    NotFound,
    Found(MembershipCard),
    Failed,
    /// A more recent look-up has been issued meanwhile; this response has been dropped.
    Superseded,
}

pub struct LookupController<G: QueryGateway, V: LookupView> {
    gateway: G,
    view: V,
    requests: RequestSequence,
}

/// Marks the view as busy for as long as it lives. A superseded request leaves the view busy:
/// the most recent one releases it.
struct BusyGuard<'a, V: LookupView> {
    view: &'a V,
    requests: &'a RequestSequence,
    ticket: RequestTicket,
}

impl<'a, V: LookupView> BusyGuard<'a, V> {
    fn acquire(view: &'a V, requests: &'a RequestSequence, ticket: RequestTicket) -> Self {
        view.set_busy(true);
        Self {
            view,
            requests,
            ticket,
        }
    }
}

impl<V: LookupView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        if self.requests.is_latest(self.ticket) {
            self.view.set_busy(false);
        }
    }
}

impl<G: QueryGateway, V: LookupView> LookupController<G, V> {
    pub fn new(gateway: G, view: V) -> Self {
        Self {
            gateway,
            view,
            requests: RequestSequence::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn show_welcome(&self) {
        self.view.set_status(WELCOME_MESSAGE, StatusLevel::Info);
    }

    /// Look the membership attached to a phone number up, and display it.
    pub async fn submit(&self, raw_phone_number: &str) -> LookupOutcome {
        self.view.clear_result();

        let phone_number = normalize_phone_number(Some(raw_phone_number));
        if phone_number.is_empty() {
            self.view
                .set_status(INVALID_PHONE_NUMBER_MESSAGE, StatusLevel::Error);
            return LookupOutcome::InvalidInput;
        }

        let ticket = self.requests.issue();
        let _busy = BusyGuard::acquire(&self.view, &self.requests, ticket);
        self.view.set_status(SEARCHING_MESSAGE, StatusLevel::Info);

        let result = self
            .gateway
            .query_equals(
                MEMBERSHIPS_COLLECTION,
                PHONE_FIELD,
                FieldValue::from(phone_number.as_str()),
            )
            .await;

        if !self.requests.is_latest(ticket) {
            debug!("Ignoring the response to a superseded look-up.");
            return LookupOutcome::Superseded;
        }

        let documents = match result {
            Ok(documents) => documents,
            Err(error) => {
                error!("Error while looking membership up: {error:?}");
                self.view
                    .set_status(LOOK_UP_ERROR_MESSAGE, StatusLevel::Error);
                return LookupOutcome::Failed;
            }
        };

        // There should be a single membership per phone number: the first one is kept.
        let Some(document) = documents.first() else {
            self.view.set_status(NOT_FOUND_MESSAGE, StatusLevel::Error);
            self.view.clear_result();
            return LookupOutcome::NotFound;
        };
        if documents.len() > 1 {
            warn!(
                "Several memberships share the same phone number, keeping the first one [count: {}]",
                documents.len()
            );
        }

        let card = MembershipCard::from(&membership_from_document(document));
        self.view.set_status(FOUND_MESSAGE, StatusLevel::Info);
        self.view.show_result(&card);
        LookupOutcome::Found(card)
    }
}
