//! End-to-end retrieval: search, batched fetch and filtering

use crate::config::ClientConfig;
use crate::error::{EutilsError, RetrievalError};
use crate::progress::{NoopObserver, ProgressObserver, TracingObserver};
use crate::pubmed::PubMedClient;
use crate::records::{OutputRecord, SeenIds, parse_batch};
use tracing::{debug, info, instrument};

/// Finds PubMed papers with company-affiliated authors
///
/// One call to [`PaperFinder::fetch_papers`] is one run: it searches, fetches
/// the identifiers in batches and filters every batch as soon as it arrives.
/// Any network or parse failure aborts the run without partial results.
#[derive(Clone)]
pub struct PaperFinder {
    client: PubMedClient,
}

impl PaperFinder {
    /// Create a finder with default configuration
    pub fn new() -> Result<Self, EutilsError> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a finder with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::{ClientConfig, PaperFinder};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@example.com")
    ///     .with_batch_size(25);
    /// let finder = PaperFinder::with_config(config)?;
    /// # Ok::<(), pharma_papers::EutilsError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self, EutilsError> {
        Ok(Self::from_client(PubMedClient::with_config(config)?))
    }

    /// Wrap an existing client
    pub fn from_client(client: PubMedClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PubMedClient {
        &self.client
    }

    /// Run `query` and return papers with company-affiliated authors
    ///
    /// With `debug` set, progress notices are emitted as debug-level tracing
    /// events. The returned papers are the same either way.
    ///
    /// # Errors
    ///
    /// * `RetrievalError::SearchFailed` - If the ESearch request fails
    /// * `RetrievalError::FetchFailed` - If any EFetch batch cannot be fetched or parsed
    pub async fn fetch_papers(
        &self,
        query: &str,
        debug: bool,
    ) -> Result<Vec<OutputRecord>, RetrievalError> {
        if debug {
            self.fetch_papers_with_observer(query, &mut TracingObserver)
                .await
        } else {
            self.fetch_papers_with_observer(query, &mut NoopObserver)
                .await
        }
    }

    /// Run `query`, reporting progress to `observer`
    #[instrument(skip(self, observer), fields(query = %query))]
    pub async fn fetch_papers_with_observer(
        &self,
        query: &str,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Vec<OutputRecord>, RetrievalError> {
        observer.query_started(query);

        let pmids = self
            .client
            .search_ids(query)
            .await
            .map_err(RetrievalError::SearchFailed)?;
        observer.ids_found(pmids.len());

        if pmids.is_empty() {
            info!("No PMIDs found for query");
            observer.finished(0);
            return Ok(Vec::new());
        }

        let batch_size = self.client.config().batch_size.max(1);
        let mut seen = SeenIds::new();
        let mut papers = Vec::new();

        for (batch_index, batch) in pmids.chunks(batch_size).enumerate() {
            debug!(batch_index, batch_len = batch.len(), "Fetching batch");

            let xml = self
                .client
                .fetch_xml(batch)
                .await
                .map_err(RetrievalError::FetchFailed)?;
            let records =
                parse_batch(&xml, &mut seen, observer).map_err(RetrievalError::FetchFailed)?;

            debug!(batch_index, accepted = records.len(), "Batch filtered");
            papers.extend(records);
        }

        info!(
            ids = pmids.len(),
            papers = papers.len(),
            "Retrieval completed"
        );
        observer.finished(papers.len());

        Ok(papers)
    }
}
