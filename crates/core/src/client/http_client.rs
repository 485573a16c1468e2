use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::constants::DEFAULT_API_BASE_URL;
use crate::deals::{Deal, DealCriteria, DealSourceTrait};
use crate::errors::{Error, Result};
use crate::portfolio::{PortfolioCompany, PortfolioSourceTrait};
use crate::session::Role;
use crate::valuation::{ValuationInput, ValuationResult};

use super::client_model::{ErrorBody, HealthStatus, LoginRequest, LoginResponse};

/// Typed wrappers over the mock API endpoints.
#[derive(Debug, Clone)]
pub struct HttpDealDeskClient {
    client: Client,
    base_url: String,
}

impl Default for HttpDealDeskClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl HttpDealDeskClient {
    /// `base_url` includes the `/api` prefix.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_deals(&self, criteria: &DealCriteria) -> Result<Vec<Deal>> {
        let response = self
            .client
            .get(self.url("/deals"))
            .query(&criteria.to_query_pairs())
            .send()
            .await?;
        decode(response).await
    }

    pub async fn fetch_portfolio(&self) -> Result<Vec<PortfolioCompany>> {
        let response = self.client.get(self.url("/portfolio")).send().await?;
        decode(response).await
    }

    /// Validates locally; an incomplete form never reaches the network.
    pub async fn post_valuation(&self, input: &ValuationInput) -> Result<ValuationResult> {
        let request = input.validate()?;
        let response = self
            .client
            .post(self.url("/valuation"))
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    /// Sends the role unchecked; the server rejects unknown roles.
    pub async fn login(&self, role: &str) -> Result<Role> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest {
                role: role.to_string(),
            })
            .send()
            .await?;
        let login: LoginResponse = decode(response).await?;
        Ok(Role::from_token(Some(&login.token)))
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/health")).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    debug!("Mock API returned {}: {}", status, message);
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl DealSourceTrait for HttpDealDeskClient {
    async fn fetch_deals(&self, criteria: &DealCriteria) -> Result<Vec<Deal>> {
        HttpDealDeskClient::fetch_deals(self, criteria).await
    }
}

#[async_trait]
impl PortfolioSourceTrait for HttpDealDeskClient {
    async fn fetch_portfolio(&self) -> Result<Vec<PortfolioCompany>> {
        HttpDealDeskClient::fetch_portfolio(self).await
    }
}
