use std::collections::BTreeSet;

use crate::domain::entities::customer::{CustomerField, CustomerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchScope {
    #[default]
    All,
    Nama,
    IdSambungan,
    Alamat,
    KodeRute,
}

impl SearchScope {
    pub const ALL: [SearchScope; 5] = [
        SearchScope::All,
        SearchScope::Nama,
        SearchScope::IdSambungan,
        SearchScope::Alamat,
        SearchScope::KodeRute,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Nama => "nama",
            SearchScope::IdSambungan => "id_sambungan",
            SearchScope::Alamat => "alamat",
            SearchScope::KodeRute => "kode_rute",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scope| scope.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchScope::All => "Semua",
            SearchScope::Nama => "Nama",
            SearchScope::IdSambungan => "No. Sambungan",
            SearchScope::Alamat => "Alamat",
            SearchScope::KodeRute => "Rute",
        }
    }

    pub fn fields(self) -> &'static [CustomerField] {
        match self {
            SearchScope::All => &[
                CustomerField::Nama,
                CustomerField::IdSambungan,
                CustomerField::Alamat,
                CustomerField::KodeRute,
            ],
            SearchScope::Nama => &[CustomerField::Nama],
            SearchScope::IdSambungan => &[CustomerField::IdSambungan],
            SearchScope::Alamat => &[CustomerField::Alamat],
            SearchScope::KodeRute => &[CustomerField::KodeRute],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: CustomerField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: CustomerField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: CustomerField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    IdSambungan,
    NomorUrut,
    IdMeter,
    Nama,
    Alamat,
    Koordinat,
    Telepon,
    KodeTarif,
    KodeRute,
    KodeCabang,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::IdSambungan,
        Column::NomorUrut,
        Column::IdMeter,
        Column::Nama,
        Column::Alamat,
        Column::Koordinat,
        Column::Telepon,
        Column::KodeTarif,
        Column::KodeRute,
        Column::KodeCabang,
    ];

    pub const DEFAULT_VISIBLE: [Column; 6] = [
        Column::IdSambungan,
        Column::Nama,
        Column::Alamat,
        Column::Koordinat,
        Column::KodeTarif,
        Column::KodeRute,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::IdSambungan => "id_sambungan",
            Column::NomorUrut => "nomor_urut",
            Column::IdMeter => "id_meter",
            Column::Nama => "nama",
            Column::Alamat => "alamat",
            Column::Koordinat => "koordinat",
            Column::Telepon => "telepon",
            Column::KodeTarif => "kode_tarif",
            Column::KodeRute => "kode_rute",
            Column::KodeCabang => "kode_cabang",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::IdSambungan => "NO. SAMBUNGAN",
            Column::NomorUrut => "NO. URUT",
            Column::IdMeter => "ID METER",
            Column::Nama => "NAMA PELANGGAN",
            Column::Alamat => "ALAMAT",
            Column::Koordinat => "KOORDINAT",
            Column::Telepon => "TELEPON",
            Column::KodeTarif => "TARIF",
            Column::KodeRute => "RUTE",
            Column::KodeCabang => "CABANG",
        }
    }

    pub fn sort_field(self) -> CustomerField {
        match self {
            Column::IdSambungan => CustomerField::IdSambungan,
            Column::NomorUrut => CustomerField::NomorUrut,
            Column::IdMeter => CustomerField::IdMeter,
            Column::Nama => CustomerField::Nama,
            Column::Alamat => CustomerField::Alamat,
            Column::Koordinat => CustomerField::Latitude,
            Column::Telepon => CustomerField::Telepon,
            Column::KodeTarif => CustomerField::KodeTarif,
            Column::KodeRute => CustomerField::KodeRute,
            Column::KodeCabang => CustomerField::KodeCabang,
        }
    }

    pub fn cell(self, record: &CustomerRecord) -> String {
        if self == Column::Koordinat {
            return match (record.latitude.as_deref(), record.longitude.as_deref()) {
                (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
                _ => "-".to_string(),
            };
        }
        record
            .field(self.sort_field())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "-".to_string())
    }
}

pub fn default_visible_columns() -> BTreeSet<Column> {
    Column::DEFAULT_VISIBLE.into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCriteria {
    pub search_term: String,
    pub search_scope: SearchScope,
    pub sort: Option<SortSpec>,
    pub visible_columns: BTreeSet<Column>,
}

impl Default for ViewCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_scope: SearchScope::All,
            sort: None,
            visible_columns: default_visible_columns(),
        }
    }
}

impl ViewCriteria {
    pub fn toggle_sort(&mut self, field: CustomerField) {
        self.sort = match self.sort {
            Some(SortSpec {
                field: current,
                direction: SortDirection::Asc,
            }) if current == field => Some(SortSpec::desc(field)),
            _ => Some(SortSpec::asc(field)),
        };
    }

    pub fn set_column_visible(&mut self, column: Column, visible: bool) {
        if visible {
            self.visible_columns.insert(column);
        } else {
            self.visible_columns.remove(&column);
        }
    }

    pub fn visible_columns_in_order(&self) -> Vec<Column> {
        self.visible_columns.iter().copied().collect()
    }
}
