// 👤 Employee Entity - storage-facing record
//
// "The id is IDENTITY (assigned once by the store), names and email are VALUES"
//
// The entity carries storage metadata (created/updated timestamps) that never
// leaves the process; the wire shape lives in dto.rs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee Entity
///
/// Identity: `id` (store-assigned UUID, empty before the first save)
/// Values: first_name, last_name, email (replaced by updates)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Employee {
    // ========================================================================
    // IDENTITY (never changes once assigned)
    // ========================================================================
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    // ========================================================================
    // VALUES
    // ========================================================================
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    // ========================================================================
    // STORAGE METADATA (set by the repository)
    // ========================================================================
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Create an unsaved employee (no id, no timestamps)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Employee {
            id: String::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Has the store assigned an identity yet?
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Overwrite the value fields, keeping identity and metadata
    pub fn apply_values(&mut self, first_name: String, last_name: String, email: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
    }

    /// Stamp timestamps for a save happening at `now`
    ///
    /// created_at is only set the first time.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
    }
}
