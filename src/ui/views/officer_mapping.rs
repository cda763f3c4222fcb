use dioxus::prelude::*;

use crate::app::Services;
use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::reference::{Branch, Officer};
use crate::ui::components::customer_list::CustomerListPanel;
use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};
use crate::ui::state::fetch_channel::use_fetch_channel;
use crate::usecase::ports::api::CustomerQuery;
use crate::usecase::ports::prefs::ViewKey;

#[component]
pub fn OfficerMapping(
    status: Signal<String>,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
) -> Element {
    let services = use_context::<Services>();
    let branches = use_fetch_channel::<Branch>();
    let officers = use_fetch_channel::<Officer>();
    let customers = use_fetch_channel::<CustomerRecord>();
    let mut selected_branch = use_signal(String::new);
    let mut selected_officer = use_signal(String::new);

    let service = services.customers.clone();
    use_effect(move || {
        let service = service.clone();
        branches.load(status, "Gagal memuat daftar cabang", async move {
            service.branches().await
        });
    });

    let service_for_branch = services.customers.clone();
    let service_for_officer = services.customers.clone();
    let service_for_refresh = services.customers.clone();

    let branch_options: Vec<DropdownOption> = branches
        .items
        .read()
        .iter()
        .map(|branch| DropdownOption::new(branch.kode_cabang.clone(), branch.label()))
        .collect();
    let officer_options: Vec<DropdownOption> = officers
        .items
        .read()
        .iter()
        .map(|officer| DropdownOption::new(officer.id.clone(), officer.label()))
        .collect();
    let has_branch = !selected_branch().is_empty();
    let has_officer = !selected_officer().is_empty();
    let empty_message = if has_officer {
        "Tidak ada data pelanggan untuk petugas ini."
    } else {
        "Silakan pilih cabang dan petugas terlebih dahulu."
    };

    let second_placeholder: &'static str = if has_branch { "-- Pilih Petugas --" } else { "Pilih cabang dahulu" };

    rsx! {
        h3 { "Pemetaan Tugas" }

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
                    selected_officer.set(String::new());
                    customers.clear();
                    if value.is_empty() {
                        officers.clear();
                        return;
                    }
                    let service = service_for_branch.clone();
                    officers.load(status, "Gagal memuat daftar petugas", async move {
                        service.officers(&value).await
                    });
                }
            }
            DropdownSelect {
                id: DropdownId::Officer,
                label: "Petugas",
                placeholder: second_placeholder,
                options: officer_options,
                selected: Some(selected_officer()),
                disabled: !has_branch,
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_select: move |value: String| {
                    selected_officer.set(value.clone());
                    let query = CustomerQuery::Officer { officer_id: value };
                    if query.is_empty() {
                        customers.clear();
                        return;
                    }
                    let service = service_for_officer.clone();
                    customers.load(status, "Gagal memuat data pelanggan", async move {
                        service.customers(&query).await
                    });
                }
            }
            if has_officer {
                button {
                    disabled: (customers.loading)(),
                    onclick: move |_| {
                        let query = CustomerQuery::Officer {
                            officer_id: selected_officer(),
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
            view_key: ViewKey::OfficerMapping,
            records: customers.items,
            loading: (customers.loading)(),
            empty_message: empty_message.to_string(),
            status: status,
            open_dropdown: open_dropdown,
            dropdown_pos: dropdown_pos,
        }
    }
}
