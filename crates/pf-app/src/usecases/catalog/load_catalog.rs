use std::sync::Arc;
use std::time::Duration;

use pf_core::{ports::PortfolioSourcePort, Catalog};

/// One-shot load of the project collection.
///
/// Never fails: any fetch error, malformed document or timeout yields an
/// empty catalog, so the page degrades to "show nothing".
pub struct LoadCatalog {
    source: Arc<dyn PortfolioSourcePort>,
    timeout: Option<Duration>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn PortfolioSourcePort>) -> Self {
        Self {
            source,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[tracing::instrument(name = "load_catalog", skip(self))]
    pub async fn execute(&self) -> Catalog {
        let fetched = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.source.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!(
                    "portfolio fetch timed out after {} ms",
                    limit.as_millis()
                )),
            },
            None => self.source.fetch().await,
        };

        match fetched {
            Ok(document) => {
                let catalog = Catalog::from_records(document.projects);
                tracing::info!(count = catalog.len(), "portfolio data loaded");
                catalog
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "failed to load portfolio data, continuing with an empty catalog"
                );
                Catalog::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use pf_core::{Category, PortfolioDocument, ProjectRecord};

    mock! {
        pub Source {}

        #[async_trait]
        impl PortfolioSourcePort for Source {
            async fn fetch(&self) -> anyhow::Result<PortfolioDocument>;
        }
    }

    struct SlowSource;

    #[async_trait]
    impl PortfolioSourcePort for SlowSource {
        async fn fetch(&self) -> anyhow::Result<PortfolioDocument> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(PortfolioDocument::default())
        }
    }

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: format!("Project {id}"),
            description: String::new(),
            full_description: None,
            category: Category::Design,
            client: None,
            date: "2024-01".to_string(),
            tags: vec![],
            tools: vec![],
            highlights: vec![],
            documents: vec![],
        }
    }

    #[tokio::test]
    async fn loads_projects_in_document_order() {
        let mut source = MockSource::new();
        source.expect_fetch().times(1).returning(|| {
            Ok(PortfolioDocument {
                projects: vec![record("b"), record("a")],
            })
        });

        let catalog = LoadCatalog::new(Arc::new(source)).execute().await;

        let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_catalog() {
        let mut source = MockSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(anyhow::anyhow!("connection refused")));

        let catalog = LoadCatalog::new(Arc::new(source)).execute().await;

        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn timeout_degrades_to_empty_catalog() {
        tokio::time::pause();

        let catalog = LoadCatalog::new(Arc::new(SlowSource))
            .with_timeout(Some(Duration::from_millis(500)))
            .execute()
            .await;

        assert!(catalog.is_empty());
    }
}
