use std::sync::Arc;

use crate::core::config::Settings;
use crate::repositories::questions::QuestionBank;

/// Shared, read-only application state. Cloning is cheap; nothing inside is mutated
/// after startup, so handlers never synchronize.
#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    bank: QuestionBank,
}

impl AppState {
    pub(crate) fn new(settings: Settings, bank: QuestionBank) -> Self {
        Self { inner: Arc::new(InnerState { settings, bank }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn bank(&self) -> &QuestionBank {
        &self.inner.bank
    }
}
