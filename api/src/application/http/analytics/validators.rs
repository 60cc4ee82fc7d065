use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopNParams {
    #[param(example = 10)]
    pub top: Option<u64>,
}

impl TopNParams {
    pub fn top_or_default(&self) -> u64 {
        self.top.unwrap_or(10).clamp(1, 500)
    }
}
