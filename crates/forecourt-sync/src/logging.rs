// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

/// Pipeline stages in execution order. Events carry their stage so a log
/// consumer can tell how far a failed run progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStage {
    Configure,
    Authorize,
    Fetch,
    Normalize,
    Publish,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncEvent {
    pub stage: SyncStage,
    pub name: String,
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone)]
pub struct SyncLog {
    events: Vec<SyncEvent>,
}

impl SyncLog {
    pub fn emit(
        &mut self,
        stage: SyncStage,
        name: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) {
        self.events.push(SyncEvent {
            stage,
            name: name.into(),
            fields,
        });
    }

    #[must_use]
    pub fn events(&self) -> &[SyncEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<SyncEvent> {
        self.events
    }
}
