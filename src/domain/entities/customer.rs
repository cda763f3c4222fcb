use serde::Deserialize;

use crate::domain::entities::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nama: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub id_sambungan: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub alamat: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub kode_rute: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub kode_tarif: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub kode_cabang: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub telepon: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub id_meter: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub nomor_urut: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomerField {
    Id,
    Nama,
    IdSambungan,
    Alamat,
    KodeRute,
    KodeTarif,
    KodeCabang,
    Telepon,
    IdMeter,
    NomorUrut,
    Latitude,
    Longitude,
}

impl CustomerField {
    pub const ALL: [CustomerField; 12] = [
        CustomerField::Id,
        CustomerField::Nama,
        CustomerField::IdSambungan,
        CustomerField::Alamat,
        CustomerField::KodeRute,
        CustomerField::KodeTarif,
        CustomerField::KodeCabang,
        CustomerField::Telepon,
        CustomerField::IdMeter,
        CustomerField::NomorUrut,
        CustomerField::Latitude,
        CustomerField::Longitude,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CustomerField::Id => "id",
            CustomerField::Nama => "nama",
            CustomerField::IdSambungan => "id_sambungan",
            CustomerField::Alamat => "alamat",
            CustomerField::KodeRute => "kode_rute",
            CustomerField::KodeTarif => "kode_tarif",
            CustomerField::KodeCabang => "kode_cabang",
            CustomerField::Telepon => "telepon",
            CustomerField::IdMeter => "id_meter",
            CustomerField::NomorUrut => "nomor_urut",
            CustomerField::Latitude => "latitude",
            CustomerField::Longitude => "longitude",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl CustomerRecord {
    pub fn field(&self, field: CustomerField) -> Option<&str> {
        match field {
            CustomerField::Id => Some(self.id.as_str()),
            CustomerField::Nama => Some(self.nama.as_str()),
            CustomerField::IdSambungan => Some(self.id_sambungan.as_str()),
            CustomerField::Alamat => self.alamat.as_deref(),
            CustomerField::KodeRute => Some(self.kode_rute.as_str()),
            CustomerField::KodeTarif => Some(self.kode_tarif.as_str()),
            CustomerField::KodeCabang => self.kode_cabang.as_deref(),
            CustomerField::Telepon => self.telepon.as_deref(),
            CustomerField::IdMeter => self.id_meter.as_deref(),
            CustomerField::NomorUrut => self.nomor_urut.as_deref(),
            CustomerField::Latitude => self.latitude.as_deref(),
            CustomerField::Longitude => self.longitude.as_deref(),
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = parse_finite(self.latitude.as_deref()?)?;
        let lon = parse_finite(self.longitude.as_deref()?)?;
        Some((lat, lon))
    }

    pub fn is_mapped(&self) -> bool {
        self.coordinates().is_some()
    }
}

pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
