use chrono::Local;
use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::warn;

use crate::app::Services;
use crate::domain::entities::criteria::{SearchScope, ViewCriteria};
use crate::domain::entities::customer::CustomerRecord;
use crate::infra::export::csv::{default_export_file_name, export_customers_csv};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::customer_table::CustomerTable;
use crate::ui::components::dropdown::{
    ColumnVisibilityDropdown, DropdownId, DropdownOption, DropdownSelect,
};
use crate::ui::components::pagination_bar::PaginationBar;
use crate::ui::state::app_state::CustomerListState;
use crate::usecase::ports::prefs::{ViewKey, ViewPreferences};
use crate::usecase::services::list_engine::{derive_view, map_focus};
use crate::usecase::services::pagination::Pagination;
use crate::format_coordinate;

#[component]
pub fn CustomerListPanel(
    view_key: ViewKey,
    records: Signal<Vec<CustomerRecord>>,
    loading: bool,
    empty_message: String,
    mut status: Signal<String>,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
) -> Element {
    let services = use_context::<Services>();
    let CustomerListState {
        mut criteria,
        mut page,
        mut page_size,
    } = CustomerListState::new(services.default_page_size);

    let prefs_for_load = services.prefs.clone();
    use_effect(move || {
        let Some(prefs) = prefs_for_load.as_ref() else {
            return;
        };
        match run_blocking(|| prefs.load(view_key)) {
            Ok(saved) => {
                saved.apply_to(&mut criteria.write());
                page_size.set(saved.page_size);
            }
            Err(err) => {
                warn!(view = view_key.key(), %err, "failed to load view preferences");
                status.set(format!("Gagal memuat pengaturan tampilan: {err}"));
            }
        }
    });

    let prefs_for_save = services.prefs.clone();
    let persist = use_callback(move |(snapshot, size): (ViewCriteria, usize)| {
        let Some(prefs) = prefs_for_save.as_ref() else {
            return;
        };
        let saved = ViewPreferences::from_criteria(&snapshot, size);
        if let Err(err) = run_blocking(|| prefs.save(view_key, &saved)) {
            warn!(view = view_key.key(), %err, "failed to save view preferences");
            status.set(format!("Gagal menyimpan pengaturan tampilan: {err}"));
        }
    });

    let view = use_memo(move || derive_view(&records.read(), &criteria.read()));

    let current = criteria();
    let pagination = Pagination::new(page(), page_size(), view.read().total());
    let page_rows = pagination.slice(&view.read().rows).to_vec();
    let focus = map_focus(&view.read().rows);
    let mapped = view.read().mapped_count;
    let unmapped = view.read().unmapped_count;
    let focus_label = format_coordinate(focus.center);
    let scope_options: Vec<DropdownOption> = SearchScope::ALL
        .into_iter()
        .map(|scope| DropdownOption::new(scope.key(), scope.label()))
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin: 12px 0; flex-wrap: wrap;",
            input {
                placeholder: "Cari pelanggan...",
                value: "{current.search_term}",
                oninput: move |event| {
                    criteria.write().search_term = event.value();
                    page.set(1);
                },
            }
            DropdownSelect {
                id: DropdownId::SearchScope,
                label: "Cari di",
                options: scope_options,
                selected: Some(current.search_scope.key().to_string()),
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_select: move |value: String| {
                    let scope = SearchScope::from_key(&value).unwrap_or_default();
                    criteria.write().search_scope = scope;
                    page.set(1);
                    persist.call((criteria(), page_size()));
                }
            }
            ColumnVisibilityDropdown {
                id: DropdownId::ColumnVisibility,
                label: "Tampilkan",
                visible: current.visible_columns.clone(),
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_toggle: move |(column, visible)| {
                    criteria.write().set_column_visible(column, visible);
                    persist.call((criteria(), page_size()));
                }
            }
            button {
                disabled: loading || view.read().rows.is_empty(),
                onclick: move |_| {
                    let rows = view.read().rows.clone();
                    let visible = criteria.read().visible_columns.clone();
                    let Some(path) = FileDialog::new()
                        .set_file_name(default_export_file_name(Local::now().date_naive()))
                        .add_filter("CSV", &["csv"])
                        .save_file() else {
                        status.set("Ekspor dibatalkan".to_string());
                        return;
                    };
                    match run_blocking(|| export_customers_csv(&path, &rows, &visible)) {
                        Ok(count) => {
                            status.set(format!("{count} pelanggan diekspor ke {}", path.display()));
                        }
                        Err(err) => {
                            status.set(format!("Gagal mengekspor CSV: {err:#}"));
                        }
                    }
                },
                "Ekspor CSV"
            }
        }

        div {
            style: "display: flex; gap: 16px; align-items: center; margin-bottom: 8px; color: #444;",
            span { "Total: {pagination.total()}" }
            span { "Terpetakan: {mapped}" }
            span { "Belum terpetakan: {unmapped}" }
            span { style: "color: #777;", "Pusat peta: {focus_label} (zoom {focus.zoom})" }
            if loading {
                span { style: "color: #4c6ef5;", "Memproses..." }
            }
        }

        CustomerTable {
            rows: page_rows,
            columns: current.visible_columns_in_order(),
            sort: current.sort,
            row_offset: pagination.range().start,
            empty_message: empty_message,
            on_sort: move |field| {
                criteria.write().toggle_sort(field);
                persist.call((criteria(), page_size()));
            }
        }

        PaginationBar {
            pagination: pagination,
            open_dropdown: open_dropdown,
            dropdown_pos: dropdown_pos,
            on_page: move |next: usize| page.set(next),
            on_page_size: move |size: usize| {
                page_size.set(size);
                page.set(1);
                persist.call((criteria(), size));
            }
        }
    }
}
