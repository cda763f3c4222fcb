use dioxus::prelude::*;

use crate::domain::entities::criteria::{Column, SortDirection, SortSpec};
use crate::domain::entities::customer::{CustomerField, CustomerRecord};
use crate::{maps_url, table_cell_style, table_container_style, table_header_cell_style};

fn sort_marker(sort: Option<SortSpec>, column: Column) -> &'static str {
    match sort {
        Some(spec) if spec.field == column.sort_field() => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

#[component]
pub fn CustomerTable(
    rows: Vec<CustomerRecord>,
    columns: Vec<Column>,
    sort: Option<SortSpec>,
    row_offset: usize,
    empty_message: String,
    on_sort: EventHandler<CustomerField>,
) -> Element {
    let column_count = columns.len() + 1;

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "NO" }
                        for column in columns.iter().copied() {
                            th {
                                style: "{table_header_cell_style()} cursor: pointer;",
                                onclick: move |_| on_sort.call(column.sort_field()),
                                {format!("{}{}", column.label(), sort_marker(sort, column))}
                            }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 24px; text-align: center; color: #666;",
                                "{empty_message}"
                            }
                        }
                    }
                    {rows.iter().enumerate().map(|(idx, record)| {
                        let number = row_offset + idx + 1;
                        let cells: Vec<(Column, String)> = columns
                            .iter()
                            .map(|column| (*column, column.cell(record)))
                            .collect();
                        let link = record.coordinates().map(|(lat, lon)| maps_url(lat, lon));
                        rsx!(
                            tr {
                                td { style: table_cell_style("right"), "{number}" }
                                {cells.into_iter().map(|(column, value)| {
                                    match (column, link.clone()) {
                                        (Column::Koordinat, Some(href)) => rsx!(
                                            td { style: table_cell_style("center"),
                                                a { href: "{href}", target: "_blank", "{value}" }
                                            }
                                        ),
                                        _ => rsx!(
                                            td { style: table_cell_style("left"), "{value}" }
                                        ),
                                    }
                                })}
                            }
                        )
                    })}
                }
            }
        }
    }
}
