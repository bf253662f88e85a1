pub mod format;
pub mod membership;
pub mod membership_status;
pub mod phone_number;
pub mod plan;
pub mod temporal_value;
