use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::domain::entities::criteria::{Column, SearchScope, SortDirection, SortSpec, ViewCriteria};
use crate::domain::entities::customer::{parse_finite, CustomerRecord};

pub const DEFAULT_MAP_CENTER: (f64, f64) = (-7.5, 110.5);
pub const DEFAULT_MAP_ZOOM: u8 = 13;
pub const FOCUSED_MAP_ZOOM: u8 = 16;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerView {
    pub rows: Vec<CustomerRecord>,
    pub mapped_count: usize,
    pub unmapped_count: usize,
}

impl CustomerView {
    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFocus {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapFocus {
    fn default() -> Self {
        Self {
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

pub fn matches_search(record: &CustomerRecord, term: &str, scope: SearchScope) -> bool {
    let needle = term.trim().to_lowercase();
    needle.is_empty()
        || scope.fields().iter().any(|field| {
            record
                .field(*field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
}

pub fn filter_customers<'a>(
    records: &'a [CustomerRecord],
    term: &str,
    scope: SearchScope,
) -> Vec<&'a CustomerRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, term, scope))
        .collect()
}

enum SortValue {
    Empty,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn of(raw: Option<&str>) -> Self {
        let text = raw.unwrap_or("");
        if text.trim().is_empty() {
            return SortValue::Empty;
        }
        match parse_finite(text) {
            Some(number) => SortValue::Number(number),
            None => SortValue::Text(text.to_lowercase()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Empty => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Ascending comparison of two raw field values.
///
/// Numbers compare numerically, text case-insensitively. Values of different
/// kinds rank empty < numeric < text so the order stays total.
pub fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    SortValue::of(a).compare(&SortValue::of(b))
}

pub fn sort_customers(rows: &mut Vec<&CustomerRecord>, spec: SortSpec) {
    let mut keyed: Vec<(SortValue, &CustomerRecord)> = rows
        .iter()
        .map(|record| (SortValue::of(record.field(spec.field)), *record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match spec.direction {
        SortDirection::Asc => a.compare(b),
        SortDirection::Desc => a.compare(b).reverse(),
    });
    *rows = keyed.into_iter().map(|(_, record)| record).collect();
}

pub fn filter_and_sort<'a>(
    records: &'a [CustomerRecord],
    criteria: &ViewCriteria,
) -> Vec<&'a CustomerRecord> {
    let mut rows = filter_customers(records, &criteria.search_term, criteria.search_scope);
    if let Some(spec) = criteria.sort {
        sort_customers(&mut rows, spec);
    }
    rows
}

pub fn derive_view(records: &[CustomerRecord], criteria: &ViewCriteria) -> CustomerView {
    let rows: Vec<CustomerRecord> = filter_and_sort(records, criteria)
        .into_iter()
        .cloned()
        .collect();
    let mapped_count = rows.iter().filter(|record| record.is_mapped()).count();
    CustomerView {
        unmapped_count: rows.len() - mapped_count,
        mapped_count,
        rows,
    }
}

pub fn map_focus(rows: &[CustomerRecord]) -> MapFocus {
    rows.iter()
        .find_map(CustomerRecord::coordinates)
        .map(|center| MapFocus {
            center,
            zoom: FOCUSED_MAP_ZOOM,
        })
        .unwrap_or_default()
}

pub fn project_row(record: &CustomerRecord, visible: &BTreeSet<Column>) -> Vec<String> {
    visible.iter().map(|column| column.cell(record)).collect()
}

pub fn visible_headers(visible: &BTreeSet<Column>) -> Vec<&'static str> {
    visible.iter().map(|column| column.label()).collect()
}
