//! Common test utilities for integration tests.
//!
//! This module provides:
//! - RecordingSink, a change sink that keeps every snapshot it receives
//! - Helpers for building an engine over fixture sets

pub mod fixtures;

use std::sync::{Arc, Mutex};

use quiz_core::{CardStore, ChangeSink, QuizSettings, SessionEngine, SessionSnapshot};

/// Change sink that records snapshots for later inspection.
#[derive(Clone, Default)]
pub struct RecordingSink {
    snapshots: Arc<Mutex<Vec<SessionSnapshot>>>,
}

impl ChangeSink for RecordingSink {
    fn notify(&mut self, snapshot: SessionSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot);
    }
}

impl RecordingSink {
    pub fn snapshots(&self) -> Vec<SessionSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    pub fn last(&self) -> SessionSnapshot {
        self.snapshots
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("sink received no snapshot")
    }

    pub fn len(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }
}

/// Engine over the fixture document with a recording sink registered.
pub fn engine_with_sink(settings: &QuizSettings) -> (SessionEngine, RecordingSink) {
    let store = CardStore::from_json(fixtures::SETS_DOCUMENT).expect("fixture document loads");
    let mut engine = SessionEngine::new(store, settings).expect("settings are valid");
    let sink = RecordingSink::default();
    engine.register_sink(sink.clone());
    (engine, sink)
}
