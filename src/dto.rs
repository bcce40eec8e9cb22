// Employee DTO - the JSON shape exchanged over HTTP
//
// Same fields as the entity minus the storage metadata.

use serde::{Deserialize, Deserializer, Serialize};

/// Wire representation: `{"id", "firstName", "lastName", "email"}`
///
/// `id` is optional on input and ignored by create/update; the store (POST)
/// or the path parameter (PUT) is authoritative.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Clients that serialize an unset id send `"id": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl EmployeeDto {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}
