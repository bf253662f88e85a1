use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A subscription plan as stored in the `planes` collection.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct PlanRecord {
    id: String,
    name: String,
    price: Option<f64>,
    duration_days: i64,
}

impl PlanRecord {
    pub fn new(
        id: String,
        name: Option<String>,
        price: Option<f64>,
        duration_days: Option<i64>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| id.clone()),
            id,
            price,
            duration_days: duration_days.unwrap_or_default(),
        }
    }
}

/// Shortest plans first. Plans with the same duration keep their relative order.
pub fn sort_by_duration(plans: &mut [PlanRecord]) {
    plans.sort_by_key(|plan| plan.duration_days);
}
