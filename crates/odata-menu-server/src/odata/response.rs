//! OData response envelopes

use serde::Serialize;

/// Entity fields inlined next to the context (create, update).
#[derive(Debug, Serialize)]
pub struct EntityResponse<T: Serialize> {
    #[serde(rename = "@odata.context")]
    pub context: String,
    #[serde(flatten)]
    pub entity: T,
}

/// Payload wrapped in `value` (get by id, list).
#[derive(Debug, Serialize)]
pub struct ValueResponse<T: Serialize> {
    #[serde(rename = "@odata.context")]
    pub context: String,
    pub value: T,
}
