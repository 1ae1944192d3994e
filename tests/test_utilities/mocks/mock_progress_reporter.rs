use sonar_export::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter recording what the operator would have seen
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<String>>>,
    last_progress: Arc<Mutex<Option<(usize, usize)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain and completion messages, completions prefixed with `done:`
    pub fn lines(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Last `(current, total)` pair passed to `report_progress`
    pub fn last_progress(&self) -> Option<(usize, usize)> {
        *self.last_progress.lock().unwrap()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.log.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        *self.last_progress.lock().unwrap() = Some((current, total));
    }

    fn report_completion(&self, message: &str) {
        self.log.lock().unwrap().push(format!("done: {}", message));
    }
}
