use async_trait::async_trait;

use crate::domain::{ChartData, ChartKind};
use crate::error::DomainError;

/// Source of dashboard chart datasets.
#[async_trait]
pub trait ChartSource: Send + Sync {
    async fn fetch(&self, kind: ChartKind) -> Result<ChartData, DomainError>;
}
