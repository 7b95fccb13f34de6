use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body for rejected write payloads, keyed by field name.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: BTreeMap<String, Vec<String>>,
}
