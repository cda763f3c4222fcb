use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::criteria::ViewCriteria;

pub struct CustomerListState {
    pub criteria: Signal<ViewCriteria>,
    pub page: Signal<usize>,
    pub page_size: Signal<usize>,
}

impl CustomerListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: use_signal(ViewCriteria::default),
            page: use_signal(|| 1_usize),
            page_size: use_signal(move || page_size),
        }
    }
}
