use async_trait::async_trait;

use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::drilldown::ProgressEntry;
use crate::domain::entities::reference::{Branch, Officer, Route};
use crate::domain::entities::stats::{DashboardStats, TrendWindow};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("gagal menghubungi {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} membalas status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("respons {endpoint} bukan JSON: {message}")]
    Decode { endpoint: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerQuery {
    Route {
        kode_rute: String,
        kode_cabang: String,
    },
    Officer {
        officer_id: String,
    },
}

impl CustomerQuery {
    pub fn is_empty(&self) -> bool {
        match self {
            CustomerQuery::Route { kode_rute, .. } => kode_rute.trim().is_empty(),
            CustomerQuery::Officer { officer_id } => officer_id.trim().is_empty(),
        }
    }
}

/// Remote PDAM API. Payloads of the wrong shape decode to empty results;
/// only transport, status and non-JSON failures are errors.
#[async_trait(?Send)]
pub trait PdamApi {
    async fn branches(&self) -> Result<Vec<Branch>, ApiError>;
    async fn routes(&self, kode_cabang: &str) -> Result<Vec<Route>, ApiError>;
    async fn officers(&self, branch_code: &str) -> Result<Vec<Officer>, ApiError>;
    async fn customers(&self, query: &CustomerQuery) -> Result<Vec<CustomerRecord>, ApiError>;
    async fn dashboard_stats(&self, window: TrendWindow) -> Result<DashboardStats, ApiError>;
    async fn drilldown(&self, branch_code: Option<&str>) -> Result<Vec<ProgressEntry>, ApiError>;
}
