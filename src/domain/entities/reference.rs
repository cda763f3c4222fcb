use serde::Deserialize;

use crate::domain::entities::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Branch {
    #[serde(default, deserialize_with = "lenient::text")]
    pub kode_cabang: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cabang: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Route {
    #[serde(default, deserialize_with = "lenient::text")]
    pub kode_rute: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rute: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Officer {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nama: String,
}

impl Branch {
    pub fn label(&self) -> String {
        self.cabang.clone()
    }
}

impl Route {
    pub fn label(&self) -> String {
        format!("{} - {}", self.kode_rute, self.rute)
    }
}

impl Officer {
    pub fn label(&self) -> String {
        self.nama.clone()
    }
}
