use crate::domain::model::{Case, SecondLargestMode};
use crate::utils::error::Result;

/// 提供待執行案例與第二大值模式的來源
pub trait CaseSource {
    fn cases(&self) -> Result<Vec<Case>>;
    fn mode(&self) -> SecondLargestMode;
}

/// 直接以記憶體中的案例建立的來源
#[derive(Debug, Clone, Default)]
pub struct InMemoryCases {
    pub cases: Vec<Case>,
    pub mode: SecondLargestMode,
}

impl InMemoryCases {
    pub fn new(cases: Vec<Case>, mode: SecondLargestMode) -> Self {
        Self { cases, mode }
    }
}

impl CaseSource for InMemoryCases {
    fn cases(&self) -> Result<Vec<Case>> {
        Ok(self.cases.clone())
    }

    fn mode(&self) -> SecondLargestMode {
        self.mode
    }
}
