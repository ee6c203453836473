use crate::config::ClientConfig;
use crate::error::{EutilsError, Result};
use crate::pubmed::responses::ESearchResult;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Client for the two E-utilities endpoints this crate needs
///
/// Every request is sent once, with the timeout from [`ClientConfig`]; there
/// is no retry or rate limiting.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::PubMedClient;
    ///
    /// let client = PubMedClient::new()?;
    /// # Ok::<(), pharma_papers::EutilsError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    ///
    /// * `EutilsError::RequestError` - If the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.com");
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), pharma_papers::EutilsError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in ESearch order
    ///
    /// The query is passed through verbatim (URL-encoded) and at most
    /// `config.search_limit` identifiers are requested. A response without an
    /// `esearchresult.idlist` yields an empty list.
    ///
    /// # Errors
    ///
    /// * `EutilsError::RequestError` - If the HTTP request fails or times out
    /// * `EutilsError::ApiError` - If the response status is not a success
    /// * `EutilsError::JsonError` - If the body is not valid ESearch JSON
    #[instrument(skip(self), fields(query = %query, limit = self.config.search_limit))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            self.config.search_limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(error_msg) = &search_result.esearchresult.error {
            warn!(error = %error_msg, "ESearch reported an error");
        }

        if let Some(translation) = &search_result.esearchresult.querytranslation {
            debug!(translation = %translation, "ESearch query translation");
        }

        let pmids = search_result.esearchresult.idlist;
        info!(
            results_found = pmids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            "Search completed successfully"
        );

        Ok(pmids)
    }

    /// Fetch the EFetch XML document for one batch of PMIDs
    ///
    /// # Errors
    ///
    /// * `EutilsError::RequestError` - If the HTTP request fails or times out
    /// * `EutilsError::ApiError` - If the response status is not a success
    #[instrument(skip(self, pmids), fields(batch_size = pmids.len()))]
    pub async fn fetch_xml(&self, pmids: &[String]) -> Result<String> {
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            pmids.join(",")
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml = response.text().await?;

        debug!(xml_size = xml.len(), "Received EFetch response");
        Ok(xml)
    }

    /// Send one GET request with the NCBI API parameters appended
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(EutilsError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
