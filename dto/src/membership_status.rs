use crate::membership_status::MembershipStatus::{Active, Expired};
use crate::temporal_value::TemporalValue;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Active,
    Expired,
}

impl MembershipStatus {
    /// Text of the badge displayed to the member.
    pub fn label(&self) -> &'static str {
        match self {
            Active => "ACTIVA",
            Expired => "VENCIDA",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Active => "activa",
            Expired => "vencida",
        }
    }
}

impl From<bool> for MembershipStatus {
    fn from(active: bool) -> Self {
        if active { Active } else { Expired }
    }
}

/// Compute the status of a membership as of today, in the local timezone.
pub fn compute_membership_status(
    stored_status: Option<&str>,
    end_date: Option<&TemporalValue>,
) -> MembershipStatus {
    resolve_active(stored_status, end_date).into()
}

pub fn resolve_active(stored_status: Option<&str>, end_date: Option<&TemporalValue>) -> bool {
    resolve_active_at(stored_status, end_date, Local::now().date_naive())
}

/// The end date, when valid, always wins over the stored status:
/// the membership is active up to and including its end day.
/// Without a valid end date, the stored status is used. Otherwise, the membership is expired.
pub fn resolve_active_at(
    stored_status: Option<&str>,
    end_date: Option<&TemporalValue>,
    today: NaiveDate,
) -> bool {
    if let Some(end_date) = end_date.and_then(TemporalValue::to_local_date) {
        return end_date >= today;
    }

    stored_status.and_then(parse_stored_status).unwrap_or(false)
}

/// Both grammatical genders are accepted, whatever the case and surrounding spaces.
fn parse_stored_status(stored_status: &str) -> Option<bool> {
    match stored_status.trim().to_lowercase().as_str() {
        "activa" | "activo" => Some(true),
        "vencida" | "vencido" => Some(false),
        _ => None,
    }
}
