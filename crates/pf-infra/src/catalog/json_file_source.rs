use std::path::PathBuf;

use async_trait::async_trait;
use pf_core::{
    ports::{PortfolioSourceError, PortfolioSourcePort},
    PortfolioDocument,
};
use tokio::fs;

/// Reads the portfolio data document from a JSON file on disk.
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn read(&self) -> Result<PortfolioDocument, PortfolioSourceError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PortfolioSourceError::NotFound(self.path.clone()));
            }
            Err(source) => {
                return Err(PortfolioSourceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl PortfolioSourcePort for JsonFileCatalogSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> anyhow::Result<PortfolioDocument> {
        let document = self.read().await?;
        tracing::debug!(projects = document.projects.len(), "portfolio data read");
        Ok(document)
    }
}
