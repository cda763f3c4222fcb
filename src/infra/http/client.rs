use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::drilldown::ProgressEntry;
use crate::domain::entities::lenient;
use crate::domain::entities::reference::{Branch, Officer, Route};
use crate::domain::entities::stats::{DashboardStats, TrendWindow};
use crate::usecase::ports::api::{ApiError, CustomerQuery, PdamApi};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn endpoint_url(&self, script: &str) -> String {
        format!("{}/api/{}", self.base_url, script)
    }

    async fn get_json(&self, script: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.endpoint_url(script);
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!(%url, ?query, "GET");
        let response = request.send().await.map_err(|err| ApiError::Transport {
            endpoint: script.to_string(),
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "request failed");
            return Err(ApiError::Status {
                endpoint: script.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| ApiError::Transport {
            endpoint: script.to_string(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode {
            endpoint: script.to_string(),
            message: err.to_string(),
        })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        script: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let value = self.get_json(script, query).await?;
        Ok(lenient::items(value))
    }
}

pub fn decode_stats(value: Value) -> DashboardStats {
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => DashboardStats::default(),
    }
}

pub fn decode_drilldown(value: Value) -> Vec<ProgressEntry> {
    match value {
        Value::Object(mut body) => body.remove("data").map(lenient::items).unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[async_trait(?Send)]
impl PdamApi for HttpApi {
    async fn branches(&self) -> Result<Vec<Branch>, ApiError> {
        self.get_list("options.php", &[("type", "cabang")]).await
    }

    async fn routes(&self, kode_cabang: &str) -> Result<Vec<Route>, ApiError> {
        self.get_list("options.php", &[("type", "rute"), ("kode_cabang", kode_cabang)])
            .await
    }

    async fn officers(&self, branch_code: &str) -> Result<Vec<Officer>, ApiError> {
        self.get_list("officers.php", &[("branch_code", branch_code)])
            .await
    }

    async fn customers(&self, query: &CustomerQuery) -> Result<Vec<CustomerRecord>, ApiError> {
        match query {
            CustomerQuery::Route {
                kode_rute,
                kode_cabang,
            } => {
                self.get_list(
                    "customers.php",
                    &[
                        ("kode_rute", kode_rute.as_str()),
                        ("kode_cabang", kode_cabang.as_str()),
                    ],
                )
                .await
            }
            CustomerQuery::Officer { officer_id } => {
                self.get_list("customers.php", &[("officer_id", officer_id.as_str())])
                    .await
            }
        }
    }

    async fn dashboard_stats(&self, window: TrendWindow) -> Result<DashboardStats, ApiError> {
        let months = window.months().to_string();
        let value = self
            .get_json("dashboard_stats.php", &[("months", months.as_str())])
            .await?;
        Ok(decode_stats(value))
    }

    async fn drilldown(&self, branch_code: Option<&str>) -> Result<Vec<ProgressEntry>, ApiError> {
        let query: Vec<(&str, &str)> = branch_code
            .map(|code| vec![("branch_code", code)])
            .unwrap_or_default();
        let value = self.get_json("dashboard_drilldown.php", &query).await?;
        Ok(decode_drilldown(value))
    }
}
