use std::rc::Rc;

use tracing::debug;

use crate::domain::entities::drilldown::{DrillRequest, ProgressEntry};
use crate::domain::entities::stats::{DashboardStats, TrendWindow};
use crate::usecase::ports::api::{ApiError, PdamApi};

#[derive(Clone)]
pub struct StatsService {
    api: Rc<dyn PdamApi>,
}

impl StatsService {
    pub fn new(api: Rc<dyn PdamApi>) -> Self {
        Self { api }
    }

    pub async fn dashboard(&self, window: TrendWindow) -> Result<DashboardStats, ApiError> {
        let stats = self.api.dashboard_stats(window).await?;
        debug!(months = window.months(), trends = stats.usage_trends.len(), "loaded dashboard stats");
        Ok(stats)
    }

    pub async fn drill(&self, request: &DrillRequest) -> Result<Vec<ProgressEntry>, ApiError> {
        let entries = self.api.drilldown(request.branch_code()).await?;
        debug!(?request, count = entries.len(), "loaded drill-down entries");
        Ok(entries)
    }
}
