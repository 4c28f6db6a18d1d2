//! Catalog entries used by band profiles and booking requests

use serde::{Deserialize, Serialize};

use crate::value_objects::{EventTypeId, MusicalStyleId};

/// Kind of event a band can be booked for (wedding, festival, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    /// Catalog id
    pub id: EventTypeId,
    /// Display name
    pub name: String,
}

/// Musical style a band can be tagged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicalStyle {
    /// Catalog id
    pub id: MusicalStyleId,
    /// Display name
    pub name: String,
}
