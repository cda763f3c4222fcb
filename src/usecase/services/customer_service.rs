use std::rc::Rc;

use tracing::{debug, info};

use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::reference::{Branch, Officer, Route};
use crate::usecase::ports::api::{ApiError, CustomerQuery, PdamApi};

#[derive(Clone)]
pub struct CustomerService {
    api: Rc<dyn PdamApi>,
}

impl CustomerService {
    pub fn new(api: Rc<dyn PdamApi>) -> Self {
        Self { api }
    }

    pub async fn branches(&self) -> Result<Vec<Branch>, ApiError> {
        let branches = self.api.branches().await?;
        debug!(count = branches.len(), "loaded branches");
        Ok(branches)
    }

    pub async fn routes(&self, kode_cabang: &str) -> Result<Vec<Route>, ApiError> {
        if kode_cabang.trim().is_empty() {
            return Ok(Vec::new());
        }
        let routes = self.api.routes(kode_cabang).await?;
        debug!(kode_cabang, count = routes.len(), "loaded routes");
        Ok(routes)
    }

    pub async fn officers(&self, branch_code: &str) -> Result<Vec<Officer>, ApiError> {
        if branch_code.trim().is_empty() {
            return Ok(Vec::new());
        }
        let officers = self.api.officers(branch_code).await?;
        debug!(branch_code, count = officers.len(), "loaded officers");
        Ok(officers)
    }

    pub async fn customers(&self, query: &CustomerQuery) -> Result<Vec<CustomerRecord>, ApiError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let mut records = self.api.customers(query).await?;
        if let CustomerQuery::Route { kode_rute, .. } = query {
            // The backend matches routes loosely.
            records.retain(|record| &record.kode_rute == kode_rute);
        }
        info!(?query, count = records.len(), "loaded customers");
        Ok(records)
    }
}
