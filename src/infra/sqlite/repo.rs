use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::entities::criteria::{
    default_visible_columns, Column, SearchScope, SortDirection, SortSpec,
};
use crate::domain::entities::customer::CustomerField;
use crate::infra::sqlite::queries::{
    load_column_visibility, load_view_setting, upsert_column_visibility, upsert_view_setting,
    StoredViewSetting,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::prefs::{PrefError, PreferenceRepository, ViewKey, ViewPreferences};
use crate::usecase::services::pagination::{is_valid_page_size, DEFAULT_PAGE_SIZE};

pub struct SqlitePreferenceRepo {
    pub db_path: PathBuf,
}

impl SqlitePreferenceRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl PreferenceRepository for SqlitePreferenceRepo {
    fn init(&self) -> Result<(), PrefError> {
        init_db(&self.db_path).map_err(|err| PrefError::Message(err.to_string()))
    }

    fn load(&self, view: ViewKey) -> Result<Option<ViewPreferences>, PrefError> {
        let setting = load_view_setting(&self.db_path, view.key())
            .map_err(|err| PrefError::Message(err.to_string()))?;
        let visibility = load_column_visibility(&self.db_path, view.key())
            .map_err(|err| PrefError::Message(err.to_string()))?;

        if setting.is_none() && visibility.is_empty() {
            return Ok(None);
        }
        debug!(view = view.key(), "loaded view preferences");
        Ok(Some(from_stored(setting, &visibility)))
    }

    fn save(&self, view: ViewKey, prefs: &ViewPreferences) -> Result<(), PrefError> {
        let setting = StoredViewSetting {
            search_scope: prefs.search_scope.key().to_string(),
            sort_field: prefs.sort.map(|sort| sort.field.key().to_string()),
            sort_desc: prefs
                .sort
                .is_some_and(|sort| sort.direction == SortDirection::Desc),
            page_size: prefs.page_size as i64,
        };
        let visibility: BTreeMap<String, bool> = Column::ALL
            .into_iter()
            .map(|column| {
                (
                    column.key().to_string(),
                    prefs.visible_columns.contains(&column),
                )
            })
            .collect();

        upsert_view_setting(&self.db_path, view.key(), &setting)
            .and_then(|_| upsert_column_visibility(&self.db_path, view.key(), &visibility))
            .map_err(|err| PrefError::Message(err.to_string()))?;
        debug!(view = view.key(), "saved view preferences");
        Ok(())
    }
}

fn from_stored(
    setting: Option<StoredViewSetting>,
    visibility: &BTreeMap<String, bool>,
) -> ViewPreferences {
    let mut prefs = ViewPreferences::default();

    if let Some(setting) = setting {
        prefs.search_scope = SearchScope::from_key(&setting.search_scope).unwrap_or_default();
        prefs.sort = setting
            .sort_field
            .as_deref()
            .and_then(CustomerField::from_key)
            .map(|field| {
                if setting.sort_desc {
                    SortSpec::desc(field)
                } else {
                    SortSpec::asc(field)
                }
            });
        let page_size = usize::try_from(setting.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        prefs.page_size = if is_valid_page_size(page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
    }

    let mut columns = default_visible_columns();
    for (column_id, visible) in visibility {
        let Some(column) = Column::from_key(column_id) else {
            continue;
        };
        if *visible {
            columns.insert(column);
        } else {
            columns.remove(&column);
        }
    }
    prefs.visible_columns = columns;
    prefs
}
