use crate::gateway::{Document, FieldValue};
use derive_getters::Getters;
use dto::format::format_price;
use dto::plan::PlanRecord;

pub mod panel;

pub const PLANS_COLLECTION: &str = "planes";
pub const NAME_FIELD: &str = "nombre";
pub const PRICE_FIELD: &str = "precio";
pub const DURATION_FIELD: &str = "duracionDias";
pub const ACTIVE_FIELD: &str = "activo";

pub fn plan_from_document(document: &Document) -> PlanRecord {
    PlanRecord::new(
        document.id().clone(),
        document.string_field(NAME_FIELD),
        document.field(PRICE_FIELD).and_then(FieldValue::as_f64),
        document.field(DURATION_FIELD).and_then(FieldValue::as_i64),
    )
}

/// A plan, ready to be listed.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PlanRow {
    name: String,
    price: String,
    duration: String,
}

impl From<&PlanRecord> for PlanRow {
    fn from(plan: &PlanRecord) -> Self {
        Self {
            name: plan.name().clone(),
            price: format_price(*plan.price()),
            duration: format!("{} días", plan.duration_days()),
        }
    }
}

impl PlanRow {
    /// Price and duration, as displayed next to the plan name.
    pub fn details(&self) -> String {
        format!("{} {}", self.price, self.duration)
    }
}
