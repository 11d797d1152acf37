use async_trait::async_trait;

use crate::project::PortfolioDocument;

/// Supplies the portfolio data document, fetched once at startup.
#[async_trait]
pub trait PortfolioSourcePort: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<PortfolioDocument>;
}
