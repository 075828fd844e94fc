use std::time::Duration;

use tracing::{debug, instrument};

use crate::{
    config::{ConfigError, env_millis_or, env_opt, env_or},
    error::OptimizerError,
    optimization_request::OptimizeRouteRequest,
    optimization_response::OptimizeRouteResponse,
    route_optimization_provider::RouteOptimizationProvider,
};

const URL_ENV_VAR: &str = "VETROUTE_OPTIMIZER_URL";
const API_KEY_ENV_VAR: &str = "VETROUTE_OPTIMIZER_API_KEY";
const TIMEOUT_ENV_VAR: &str = "VETROUTE_OPTIMIZER_TIMEOUT_MS";
const MAX_ATTEMPTS_ENV_VAR: &str = "VETROUTE_OPTIMIZER_MAX_ATTEMPTS";
const RETRY_INTERVAL_ENV_VAR: &str = "VETROUTE_OPTIMIZER_RETRY_INTERVAL_MS";

#[derive(Debug, Clone)]
pub struct HttpRouteOptimizerParams {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,

    /// 1 means a single call and no retry
    pub max_attempts: u32,

    /// Backoff grows linearly with the attempt number
    pub retry_interval: Duration,
}

impl HttpRouteOptimizerParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
            max_attempts: 1,
            retry_interval: Duration::from_millis(500),
        }
    }

    /// Returns `None` when no endpoint URL is configured.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(url) = env_opt(URL_ENV_VAR) else {
            return Ok(None);
        };

        let defaults = Self::new(url);
        let max_attempts = env_or(MAX_ATTEMPTS_ENV_VAR, defaults.max_attempts)?;
        if max_attempts == 0 {
            return Err(ConfigError::Invalid(format!(
                "{MAX_ATTEMPTS_ENV_VAR} must be at least 1"
            )));
        }

        Ok(Some(Self {
            api_key: env_opt(API_KEY_ENV_VAR),
            timeout: env_millis_or(TIMEOUT_ENV_VAR, defaults.timeout)?,
            max_attempts,
            retry_interval: env_millis_or(RETRY_INTERVAL_ENV_VAR, defaults.retry_interval)?,
            ..defaults
        }))
    }
}

pub struct HttpRouteOptimizer {
    params: HttpRouteOptimizerParams,
    client: reqwest::Client,
}

impl HttpRouteOptimizer {
    pub fn new(params: HttpRouteOptimizerParams) -> Result<Self, OptimizerError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;
        Ok(Self { params, client })
    }

    async fn post_once(
        &self,
        body: &OptimizeRouteRequest,
    ) -> Result<OptimizeRouteResponse, OptimizerError> {
        let mut request = self.client.post(&self.params.url).json(body);
        if let Some(api_key) = &self.params.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(OptimizerError::Api { status, message });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl RouteOptimizationProvider for HttpRouteOptimizer {
    #[instrument(skip_all, fields(url = %self.params.url, appointments = request.appointments.len()))]
    async fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<OptimizeRouteResponse, OptimizerError> {
        let max_attempts = self.params.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.post_once(request).await {
                Ok(response) => return Ok(response),
                Err(error) if attempt < max_attempts => {
                    debug!(
                        "RouteOptimizer: attempt {}/{} failed: {}",
                        attempt, max_attempts, error
                    );
                    tokio::time::sleep(self.params.retry_interval * attempt).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// The optimizer wired in at start-up: the HTTP endpoint, or nothing.
pub enum RouteOptimizationClient {
    Http(HttpRouteOptimizer),
    Disabled,
}

impl RouteOptimizationClient {
    pub fn from_env() -> anyhow::Result<Self> {
        match HttpRouteOptimizerParams::from_env()? {
            Some(params) => Ok(RouteOptimizationClient::Http(HttpRouteOptimizer::new(
                params,
            )?)),
            None => Ok(RouteOptimizationClient::Disabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, RouteOptimizationClient::Http(_))
    }
}

impl RouteOptimizationProvider for RouteOptimizationClient {
    async fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<OptimizeRouteResponse, OptimizerError> {
        match self {
            RouteOptimizationClient::Http(optimizer) => optimizer.optimize_route(request).await,
            RouteOptimizationClient::Disabled => Err(OptimizerError::NotConfigured),
        }
    }
}
