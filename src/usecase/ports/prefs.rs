use std::collections::BTreeSet;

use crate::domain::entities::criteria::{
    default_visible_columns, Column, SearchScope, SortSpec, ViewCriteria,
};
use crate::usecase::services::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefError {
    #[error("{0}")]
    Message(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    CustomerMapping,
    OfficerMapping,
}

impl ViewKey {
    pub fn key(self) -> &'static str {
        match self {
            ViewKey::CustomerMapping => "customer_mapping",
            ViewKey::OfficerMapping => "officer_mapping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPreferences {
    pub visible_columns: BTreeSet<Column>,
    pub search_scope: SearchScope,
    pub sort: Option<SortSpec>,
    pub page_size: usize,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            visible_columns: default_visible_columns(),
            search_scope: SearchScope::All,
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewPreferences {
    pub fn from_criteria(criteria: &ViewCriteria, page_size: usize) -> Self {
        Self {
            visible_columns: criteria.visible_columns.clone(),
            search_scope: criteria.search_scope,
            sort: criteria.sort,
            page_size,
        }
    }

    pub fn apply_to(&self, criteria: &mut ViewCriteria) {
        criteria.visible_columns = self.visible_columns.clone();
        criteria.search_scope = self.search_scope;
        criteria.sort = self.sort;
    }
}

pub trait PreferenceRepository: Send + Sync {
    fn init(&self) -> Result<(), PrefError>;
    fn load(&self, view: ViewKey) -> Result<Option<ViewPreferences>, PrefError>;
    fn save(&self, view: ViewKey, prefs: &ViewPreferences) -> Result<(), PrefError>;
}
