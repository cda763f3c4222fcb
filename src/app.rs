use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::default_db_path;
use crate::infra::http::client::HttpApi;
use crate::infra::sqlite::repo::SqlitePreferenceRepo;
use crate::ui::components::dropdown::DropdownId;
use crate::ui::views::customer_mapping::CustomerMapping;
use crate::ui::views::dashboard::Dashboard;
use crate::ui::views::officer_mapping::OfficerMapping;
use crate::usecase::ports::api::PdamApi;
use crate::usecase::services::customer_service::CustomerService;
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::stats_service::StatsService;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    CustomerMapping,
    OfficerMapping,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::CustomerMapping, Page::OfficerMapping];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::CustomerMapping => "Pemetaan Pelanggan",
            Page::OfficerMapping => "Pemetaan Tugas",
        }
    }
}

#[derive(Clone)]
pub struct Services {
    pub customers: CustomerService,
    pub stats: StatsService,
    pub prefs: Option<Rc<PreferenceService>>,
    pub default_page_size: usize,
}

impl Services {
    pub fn new(
        api: Rc<dyn PdamApi>,
        prefs: Option<Rc<PreferenceService>>,
        default_page_size: usize,
    ) -> Self {
        Self {
            customers: CustomerService::new(api.clone()),
            stats: StatsService::new(api),
            prefs,
            default_page_size,
        }
    }
}

fn open_preferences(config: &AppConfig) -> Result<PreferenceService> {
    let db_path = match &config.db_path {
        Some(path) => path.clone(),
        None => default_db_path()?,
    };
    let service = PreferenceService::new(Arc::new(SqlitePreferenceRepo::new(db_path.clone())));
    service
        .init()
        .with_context(|| format!("failed to open preferences at {}", db_path.display()))?;
    info!(db = %db_path.display(), "preferences ready");
    Ok(service)
}

pub fn build_services(config: &AppConfig) -> Result<(Services, Option<String>)> {
    let api = HttpApi::new(config.base_url.clone(), config.api_token.clone())?;
    info!(base_url = %config.base_url, authenticated = config.api_token.is_some(), "api client ready");

    let (prefs, warning) = match open_preferences(config) {
        Ok(service) => (Some(Rc::new(service)), None),
        Err(err) => {
            warn!("{err:#}");
            (None, Some(format!("Pengaturan tampilan tidak tersimpan: {err:#}")))
        }
    };
    Ok((Services::new(Rc::new(api), prefs, config.page_size), warning))
}

#[component]
pub fn App() -> Element {
    let setup = use_hook(|| {
        AppConfig::from_env()
            .map_err(|err| err.to_string())
            .and_then(|config| build_services(&config).map_err(|err| format!("{err:#}")))
    });
    let (services, warning) = match setup {
        Ok(ready) => ready,
        Err(err) => {
            return rsx! {
                div {
                    p { "Gagal memulai aplikasi: {err}" }
                }
            };
        }
    };

    use_context_provider(|| services);
    let mut page = use_signal(|| Page::Dashboard);
    let status = use_signal(move || warning.unwrap_or_else(|| "Siap".to_string()));
    let mut open_dropdown = use_signal(|| None::<DropdownId>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    rsx! {
        div {
            onclick: move |_| {
                open_dropdown.set(None);
            },
            style: "font-family: 'Noto Sans', sans-serif; padding: 12px; background: #fff; min-height: 100vh; height: 100vh; overflow: auto;",

            h2 { "PDAM Dashboard" }

            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px; position: sticky; top: 0; background: #fff; z-index: 900; padding: 8px 0;",
                for target in Page::ALL {
                    button {
                        style: if page() == target {
                            "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px;"
                        } else {
                            "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px;"
                        },
                        onclick: move |_| page.set(target),
                        "{target.title()}"
                    }
                }
                span { " {status}" }
            }

            {match page() {
                Page::Dashboard => rsx! {
                    Dashboard {
                        status: status,
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                    }
                },
                Page::CustomerMapping => rsx! {
                    CustomerMapping {
                        status: status,
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                    }
                },
                Page::OfficerMapping => rsx! {
                    OfficerMapping {
                        status: status,
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                    }
                },
            }}
        }
    }
}
