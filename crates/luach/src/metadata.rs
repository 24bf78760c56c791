//! Torah-portion metadata supplied by the host.
//!
//! The table is loaded from a JSON array of objects such as
//!
//! ```json
//! [{"name": "Bereshit", "book": "Genesis", "torah": "Genesis 1:1-6:8",
//!   "haftarah": "Isaiah 42:5-43:10", "psukim": 146,
//!   "url": "https://www.sefaria.org/Genesis.1.1-6.8", "chabadUrl": "..."}]
//! ```
//!
//! Lookups never fail: an unknown name simply has no details.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Separator between the two names of a joined reading.
pub const JOIN_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParashaInfo {
    pub name: String,
    #[serde(default)]
    pub book: String,
    /// Verse range of the Torah reading.
    #[serde(default)]
    pub torah: String,
    #[serde(default)]
    pub haftarah: String,
    #[serde(default)]
    pub psukim: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub chabad_url: Option<String>,
}

/// Portion metadata indexed by name.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    by_name: HashMap<String, ParashaInfo>,
}

impl MetadataTable {
    pub fn from_entries(entries: impl IntoIterator<Item = ParashaInfo>) -> Self {
        Self {
            by_name: entries
                .into_iter()
                .map(|info| (info.name.clone(), info))
                .collect(),
        }
    }

    /// Parse a JSON array of [`ParashaInfo`] objects.
    ///
    /// # Errors
    /// [`crate::CalendarError::Metadata`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ParashaInfo> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn get(&self, name: &str) -> Option<&ParashaInfo> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Details for a reading name. Joined readings (`"A / B"`) yield the
    /// entries for both halves; unknown names are skipped.
    pub fn details_for(&self, reading: &str) -> Vec<&ParashaInfo> {
        reading
            .split(JOIN_SEPARATOR)
            .filter_map(|name| self.get(name.trim()))
            .collect()
    }
}
