use dioxus::prelude::*;

use crate::app::Services;
use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::reference::{Branch, Route};
use crate::ui::components::customer_list::CustomerListPanel;
use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};
use crate::ui::state::fetch_channel::use_fetch_channel;
use crate::usecase::ports::api::CustomerQuery;
use crate::usecase::ports::prefs::ViewKey;

#[component]
pub fn CustomerMapping(
    status: Signal<String>,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
) -> Element {
    let services = use_context::<Services>();
    let branches = use_fetch_channel::<Branch>();
    let routes = use_fetch_channel::<Route>();
    let customers = use_fetch_channel::<CustomerRecord>();
    let mut selected_branch = use_signal(String::new);
    let mut selected_route = use_signal(String::new);

    let service = services.customers.clone();
    use_effect(move || {
        let service = service.clone();
        branches.load(status, "Gagal memuat daftar cabang", async move {
            service.branches().await
        });
    });

    let service_for_branch = services.customers.clone();
    let service_for_route = services.customers.clone();
    let service_for_refresh = services.customers.clone();

    let branch_options: Vec<DropdownOption> = branches
        .items
        .read()
        .iter()
        .map(|branch| DropdownOption::new(branch.kode_cabang.clone(), branch.label()))
        .collect();
    let route_options: Vec<DropdownOption> = routes
        .items
        .read()
        .iter()
        .map(|route| DropdownOption::new(route.kode_rute.clone(), route.label()))
        .collect();
    let has_branch = !selected_branch().is_empty();
    let has_route = !selected_route().is_empty();
    let empty_message = if has_route {
        "Tidak ada pelanggan pada rute ini."
    } else {
        "Silakan pilih cabang dan rute terlebih dahulu."
    };

    let second_placeholder: &'static str = if has_branch { "-- Pilih Rute --" } else { "Pilih cabang dahulu" };

    rsx! {
        h3 { "Pemetaan Pelanggan" }

        div {
            style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            DropdownSelect {
                id: DropdownId::Branch,
                label: "Cabang",
                placeholder: "-- Pilih Cabang --",
                options: branch_options,
                selected: Some(selected_branch()),
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_select: move |value: String| {
                    selected_branch.set(value.clone());
                    selected_route.set(String::new());
                    customers.clear();
                    if value.is_empty() {
                        routes.clear();
                        return;
                    }
                    let service = service_for_branch.clone();
                    routes.load(status, "Gagal memuat daftar rute", async move {
                        service.routes(&value).await
                    });
                }
            }
            DropdownSelect {
                id: DropdownId::Route,
                label: "Rute",
                placeholder: second_placeholder,
                options: route_options,
                selected: Some(selected_route()),
                disabled: !has_branch,
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_select: move |value: String| {
                    selected_route.set(value.clone());
                    let query = CustomerQuery::Route {
                        kode_rute: value,
                        kode_cabang: selected_branch(),
                    };
                    if query.is_empty() {
                        customers.clear();
                        return;
                    }
                    let service = service_for_route.clone();
                    customers.load(status, "Gagal memuat data pelanggan", async move {
                        service.customers(&query).await
                    });
                }
            }
            if has_route {
                button {
                    disabled: (customers.loading)(),
                    onclick: move |_| {
                        let query = CustomerQuery::Route {
                            kode_rute: selected_route(),
                            kode_cabang: selected_branch(),
                        };
                        let service = service_for_refresh.clone();
                        customers.load(status, "Gagal memuat data pelanggan", async move {
                            service.customers(&query).await
                        });
                    },
                    "Refresh Data"
                }
            }
        }

        CustomerListPanel {
            view_key: ViewKey::CustomerMapping,
            records: customers.items,
            loading: (customers.loading)(),
            empty_message: empty_message.to_string(),
            status: status,
            open_dropdown: open_dropdown,
            dropdown_pos: dropdown_pos,
        }
    }
}
