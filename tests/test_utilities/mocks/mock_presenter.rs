use sonar_export::prelude::*;

/// Mock OutputPresenter that captures presented blocks
#[derive(Default, Clone)]
pub struct MockPresenter {
    pub blocks: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_blocks(&self) -> Vec<String> {
        self.blocks.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.blocks.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
