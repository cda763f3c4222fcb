use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String, caption: Option<String>) -> Element {
    rsx! {
        div {
            style: "flex: 1 1 180px; border: 1px solid #ddd; border-radius: 8px; padding: 12px; background: #fff;",
            div { style: "color: #666; font-size: 13px;", "{title}" }
            div { style: "font-size: 24px; font-weight: 700; margin-top: 4px;", "{value}" }
            if let Some(caption) = caption {
                div { style: "color: #888; font-size: 12px; margin-top: 4px;", "{caption}" }
            }
        }
    }
}

#[component]
pub fn CountList(title: String, items: Vec<(String, i64)>) -> Element {
    rsx! {
        div {
            style: "flex: 1 1 240px; border: 1px solid #ddd; border-radius: 8px; padding: 12px; background: #fff;",
            div { style: "font-weight: 600; margin-bottom: 8px;", "{title}" }
            if items.is_empty() {
                div { style: "color: #888;", "Belum ada data" }
            }
            for (label, value) in items {
                div { style: "display: flex; justify-content: space-between; padding: 2px 0;",
                    span { "{label}" }
                    span { style: "font-weight: 600;", "{value}" }
                }
            }
        }
    }
}
