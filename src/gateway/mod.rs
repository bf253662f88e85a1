use crate::gateway::error::GatewayError;
use derive_getters::Getters;
use std::collections::BTreeMap;

pub use field_value::FieldValue;

pub mod error;
pub mod field_value;
pub mod firestore;

/// Read access to a document store, restricted to equality filters.
#[allow(async_fn_in_trait)]
pub trait QueryGateway {
    /// Retrieve the documents of `collection` whose `field` equals `value`.
    /// Documents are returned in the order chosen by the store.
    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<Vec<Document>, GatewayError>;
}

/// A stored document: its identifier and its fields.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Document {
    id: String,
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new(id: String, fields: BTreeMap<String, FieldValue>) -> Self {
        Self { id, fields }
    }

    /// Value of a field, unless it is missing or null.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    pub fn string_field(&self, name: &str) -> Option<String> {
        self.field(name)
            .and_then(FieldValue::as_str)
            .map(str::to_owned)
    }
}
