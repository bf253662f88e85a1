use crate::gateway::{Document, FieldValue};
use derive_getters::Getters;
use dto::format::format_date;
use dto::membership::MembershipRecord;
use dto::membership_status::MembershipStatus;

pub mod look_up;

pub const MEMBERSHIPS_COLLECTION: &str = "usuarios";
pub const NAME_FIELD: &str = "nombre";
pub const LAST_NAME_FIELD: &str = "apellido";
pub const PHONE_FIELD: &str = "telefono";
pub const MEMBERSHIP_STATUS_FIELD: &str = "estadoMembresia";
pub const MEMBERSHIP_END_DATE_FIELD: &str = "fechaFinMembresia";

pub fn membership_from_document(document: &Document) -> MembershipRecord {
    MembershipRecord::new(
        document.string_field(NAME_FIELD),
        document.string_field(LAST_NAME_FIELD),
        document.string_field(PHONE_FIELD).unwrap_or_default(),
        document.string_field(MEMBERSHIP_STATUS_FIELD),
        document
            .field(MEMBERSHIP_END_DATE_FIELD)
            .and_then(FieldValue::to_temporal_value),
    )
}

/// What is shown to a member about their membership.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MembershipCard {
    full_name: String,
    status: MembershipStatus,
    end_date: String,
}

impl From<&MembershipRecord> for MembershipCard {
    fn from(membership: &MembershipRecord) -> Self {
        Self {
            full_name: membership.full_name(),
            status: membership.compute_status(),
            end_date: format_date(membership.membership_end_date().as_ref()),
        }
    }
}
