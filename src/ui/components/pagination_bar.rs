use dioxus::prelude::*;

use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};
use crate::usecase::services::pagination::{Pagination, PAGE_SIZES};

const PAGE_BUTTON: &str = "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px;";
const PAGE_BUTTON_ACTIVE: &str =
    "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px;";

#[component]
pub fn PaginationBar(
    pagination: Pagination,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
    on_page: EventHandler<usize>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let current = pagination.page();
    let last = pagination.total_pages().max(1);
    let size_options: Vec<DropdownOption> = PAGE_SIZES
        .iter()
        .map(|size| DropdownOption::new(size.to_string(), size.to_string()))
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; justify-content: space-between; margin-top: 12px; flex-wrap: wrap;",
            span { style: "color: #555;", "{pagination.summary()}" }
            div { style: "display: flex; gap: 6px; align-items: center;",
                DropdownSelect {
                    id: DropdownId::PageSize,
                    label: "Baris",
                    options: size_options,
                    selected: Some(pagination.page_size().to_string()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| {
                        if let Ok(size) = value.parse::<usize>() {
                            on_page_size.call(size);
                        }
                    }
                }
                button {
                    style: PAGE_BUTTON,
                    disabled: !pagination.has_previous(),
                    onclick: move |_| on_page.call(1),
                    "«"
                }
                button {
                    style: PAGE_BUTTON,
                    disabled: !pagination.has_previous(),
                    onclick: move |_| on_page.call(current.saturating_sub(1).max(1)),
                    "‹"
                }
                for number in pagination.page_numbers() {
                    button {
                        style: if number == current { PAGE_BUTTON_ACTIVE } else { PAGE_BUTTON },
                        onclick: move |_| on_page.call(number),
                        "{number}"
                    }
                }
                button {
                    style: PAGE_BUTTON,
                    disabled: !pagination.has_next(),
                    onclick: move |_| on_page.call((current + 1).min(last)),
                    "›"
                }
                button {
                    style: PAGE_BUTTON,
                    disabled: !pagination.has_next(),
                    onclick: move |_| on_page.call(last),
                    "»"
                }
            }
        }
    }
}
