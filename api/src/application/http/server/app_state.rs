use std::sync::Arc;

use cafecrunch_core::application::CafeCrunchService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<CafeCrunchService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CafeCrunchService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
