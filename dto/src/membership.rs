use crate::membership_status::{MembershipStatus, compute_membership_status};
use crate::temporal_value::TemporalValue;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MEMBER_NAME: &str = "Usuario";

/// A membership as stored in the `usuarios` collection.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MembershipRecord {
    name: String,
    last_name: Option<String>,
    phone: String,
    membership_status: Option<String>,
    membership_end_date: Option<TemporalValue>,
}

impl MembershipRecord {
    pub fn new(
        name: Option<String>,
        last_name: Option<String>,
        phone: String,
        membership_status: Option<String>,
        membership_end_date: Option<TemporalValue>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| DEFAULT_MEMBER_NAME.to_owned()),
            last_name,
            phone,
            membership_status,
            membership_end_date,
        }
    }

    /// First name and last name separated by a space, skipping the missing parts.
    pub fn full_name(&self) -> String {
        let full_name = [Some(self.name.as_str()), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let full_name = full_name.trim();
        if full_name.is_empty() {
            self.name.clone()
        } else {
            full_name.to_owned()
        }
    }

    pub fn compute_status(&self) -> MembershipStatus {
        compute_membership_status(
            self.membership_status.as_deref(),
            self.membership_end_date.as_ref(),
        )
    }
}
