use std::{path::PathBuf, sync::Arc};

use crate::inference::ReplyGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ReplyGenerator>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(generator: Arc<dyn ReplyGenerator>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            static_dir: static_dir.into(),
        }
    }
}
