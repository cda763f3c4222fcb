use dioxus::prelude::*;
use tracing::warn;

use crate::app::Services;
use crate::domain::entities::drilldown::{
    BranchRef, DrillDown, DrillEvent, DrillStep, ProgressEntry, ViewMode,
};
use crate::domain::entities::request::RequestSequencer;
use crate::domain::entities::stats::{DashboardStats, TrendWindow};
use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};
use crate::ui::components::stat_card::{CountList, StatCard};
use crate::usecase::services::stats_service::StatsService;
use crate::{
    format_count, format_percentage, table_cell_style, table_container_style,
    table_header_cell_style,
};

fn dispatch_drill(
    event: DrillEvent,
    mut drill: Signal<DrillDown>,
    mut sequencer: Signal<RequestSequencer>,
    mut loading: Signal<bool>,
    mut status: Signal<String>,
    service: StatsService,
) {
    let step = drill.write().dispatch(event, &mut sequencer.write());
    let (ticket, request) = match step {
        DrillStep::Fetch(ticket, request) => (ticket, request),
        DrillStep::Moved => {
            loading.set(false);
            return;
        }
        DrillStep::Ignored => return,
    };

    loading.set(true);
    spawn(async move {
        let result = service.drill(&request).await;
        let current = *sequencer.peek();
        let Some(outcome) = drill.write().complete(&current, ticket, request, result) else {
            return;
        };
        loading.set(false);
        if let Err(err) = outcome {
            warn!(%err, "drill-down fetch failed");
            status.set(format!("Gagal memuat detail progres: {err}"));
        }
    });
}

#[component]
pub fn Dashboard(
    mut status: Signal<String>,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
) -> Element {
    let services = use_context::<Services>();
    let mut trend_window = use_signal(TrendWindow::default);
    let mut stats = use_signal(|| None::<DashboardStats>);
    let mut stats_loading = use_signal(|| false);
    let mut stats_sequencer = use_signal(RequestSequencer::default);
    let mut refresh_count = use_signal(|| 0_u32);
    let drill = use_signal(DrillDown::default);
    let drill_sequencer = use_signal(RequestSequencer::default);
    let drill_loading = use_signal(|| false);

    let stats_service = services.stats.clone();
    use_effect(move || {
        let window = trend_window();
        let _ = refresh_count();
        let ticket = stats_sequencer.write().issue();
        stats_loading.set(true);
        let service = stats_service.clone();
        spawn(async move {
            let result = service.dashboard(window).await;
            let Some(result) = stats_sequencer.peek().accept(ticket, result) else {
                return;
            };
            stats_loading.set(false);
            match result {
                Ok(loaded) => stats.set(Some(loaded)),
                Err(err) => {
                    warn!(%err, "dashboard stats fetch failed");
                    stats.set(None);
                    status.set(format!("Gagal memuat statistik: {err}"));
                }
            }
        });
    });

    let window_options: Vec<DropdownOption> = TrendWindow::choices()
        .map(|window| DropdownOption::new(window.months().to_string(), window.label()))
        .collect();
    let snapshot = stats();

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
            h3 { style: "margin: 0;", "Dashboard" }
            DropdownSelect {
                id: DropdownId::TrendWindow,
                label: "Tren",
                options: window_options,
                selected: Some(trend_window().months().to_string()),
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_select: move |value: String| {
                    if let Ok(months) = value.parse::<i64>() {
                        trend_window.set(TrendWindow::new(months));
                    }
                }
            }
            button {
                disabled: stats_loading(),
                onclick: move |_| refresh_count += 1,
                "Refresh"
            }
            if stats_loading() {
                span { style: "color: #4c6ef5;", "Memuat..." }
            }
        }

        {match snapshot {
            None => rsx! {
                p { style: "color: #666;", "Statistik belum tersedia." }
            },
            Some(loaded) => rsx! {
                StatsOverview { stats: loaded }
            },
        }}

        DrillDownPanel {
            stats: stats(),
            drill: drill,
            loading: drill_loading(),
            on_event: {
                let service = services.stats.clone();
                move |event: DrillEvent| {
                    dispatch_drill(event, drill, drill_sequencer, drill_loading, status, service.clone());
                }
            }
        }
    }
}

#[component]
fn StatsOverview(stats: DashboardStats) -> Element {
    let summary = &stats.summary;
    let abnormal = stats.abnormal_meter_count();
    let ocr: Vec<(String, i64)> = stats
        .ocr_breakdown()
        .into_iter()
        .map(|share| (format!("{} ({})", share.label, format_percentage(share.percentage)), share.value))
        .collect();
    let conditions: Vec<(String, i64)> = stats
        .abnormal_conditions()
        .into_iter()
        .map(|item| (item.label.clone(), item.value))
        .collect();
    let peak = stats.peak_usage();

    rsx! {
        div { style: "display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 12px;",
            StatCard { title: "Total Cabang", value: format_count(summary.total_branches) }
            StatCard { title: "Total Pelanggan", value: format_count(summary.total_customers) }
            StatCard {
                title: "Kondisi Meter",
                value: format_count(abnormal),
                caption: Some("Perlu perhatian".to_string()),
            }
            StatCard { title: "Total Petugas", value: format_count(summary.total_officers) }
        }

        div { style: "display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 12px;",
            CountList { title: "Status OCR", items: ocr }
            CountList { title: "Kondisi Meter Tidak Normal", items: conditions }
        }

        div { style: "{table_container_style()} margin-bottom: 12px;",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "BULAN" }
                        th { style: "{table_header_cell_style()}", "PEMAKAIAN (m³)" }
                        th { style: "{table_header_cell_style()}", "TERHADAP PUNCAK" }
                    }
                }
                tbody {
                    for trend in stats.usage_trends.iter() {
                        tr {
                            td { style: table_cell_style("left"), "{trend.month}" }
                            td { style: table_cell_style("right"), {format_count(trend.usage.round() as i64)} }
                            td { style: table_cell_style("right"),
                                {format_percentage(if peak > 0.0 { trend.usage / peak * 100.0 } else { 0.0 })}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DrillDownPanel(
    stats: Option<DashboardStats>,
    drill: Signal<DrillDown>,
    loading: bool,
    on_event: EventHandler<DrillEvent>,
) -> Element {
    let state = drill();
    let progress = stats
        .map(|loaded| loaded.summary.reading_progress)
        .unwrap_or_default();

    rsx! {
        div {
            style: "border: 1px solid #ddd; border-radius: 8px; padding: 12px; background: #fff;",
            if state.mode() == ViewMode::Overview {
                div { style: "font-weight: 600;", "Progres Pembacaan Bulan Ini" }
                div { style: "font-size: 24px; font-weight: 700; margin: 6px 0;",
                    {format_percentage(progress.percentage)}
                }
                div { style: "color: #666; margin-bottom: 8px;",
                    {format!("{} dari {} pelanggan tercatat", format_count(progress.count), format_count(progress.total))}
                }
                button {
                    disabled: loading,
                    onclick: move |_| on_event.call(DrillEvent::SelectAggregate),
                    if loading { "Memuat..." } else { "Lihat Detail per Cabang" }
                }
            } else {
                div { style: "display: flex; gap: 8px; align-items: center; margin-bottom: 8px;",
                    button {
                        onclick: move |_| on_event.call(DrillEvent::Back),
                        "Kembali"
                    }
                    span { style: "font-weight: 600;", "{state.title()}" }
                    if loading {
                        span { style: "color: #4c6ef5;", "Memuat..." }
                    }
                }
                ProgressTable {
                    entries: state.entries().to_vec(),
                    clickable: state.mode() == ViewMode::Branch,
                    on_select: move |entry: ProgressEntry| {
                        on_event.call(DrillEvent::SelectBranch(BranchRef {
                            code: entry.id,
                            name: entry.nama,
                        }));
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressTable(
    entries: Vec<ProgressEntry>,
    clickable: bool,
    on_select: EventHandler<ProgressEntry>,
) -> Element {
    let cursor = if clickable { "pointer" } else { "default" };

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "NAMA" }
                        th { style: "{table_header_cell_style()}", "TERCATAT" }
                        th { style: "{table_header_cell_style()}", "TOTAL" }
                        th { style: "{table_header_cell_style()}", "PROGRES" }
                    }
                }
                tbody {
                    if entries.is_empty() {
                        tr {
                            td { colspan: "4", style: "padding: 24px; text-align: center; color: #666;",
                                "Tidak ada data"
                            }
                        }
                    }
                    for entry in entries.iter().cloned() {
                        tr {
                            style: "cursor: {cursor};",
                            onclick: {
                                let entry = entry.clone();
                                move |_| {
                                    if clickable {
                                        on_select.call(entry.clone());
                                    }
                                }
                            },
                            td { style: table_cell_style("left"),
                                span {
                                    style: "display: inline-block; width: 22px; height: 22px; line-height: 22px; text-align: center; border-radius: 50%; background: #eef4ff; margin-right: 6px;",
                                    "{entry.initial()}"
                                }
                                "{entry.nama}"
                            }
                            td { style: table_cell_style("right"), {format_count(entry.pelanggan_tercatat)} }
                            td { style: table_cell_style("right"), {format_count(entry.total_pelanggan)} }
                            td {
                                style: format!(
                                    "{} color: {};",
                                    table_cell_style("right"),
                                    if entry.is_complete() { "#10b981" } else { "#0ea5e9" }
                                ),
                                {format_percentage(entry.percentage)}
                            }
                        }
                    }
                }
            }
        }
    }
}
