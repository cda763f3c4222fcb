use serde::Deserialize;

use crate::domain::entities::lenient;

pub const MIN_TREND_MONTHS: u8 = 1;
pub const MAX_TREND_MONTHS: u8 = 5;
pub const DEFAULT_TREND_MONTHS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrendWindow(u8);

impl TrendWindow {
    pub fn new(months: i64) -> Self {
        let clamped = months.clamp(MIN_TREND_MONTHS as i64, MAX_TREND_MONTHS as i64);
        TrendWindow(clamped as u8)
    }

    pub fn months(self) -> u8 {
        self.0
    }

    pub fn label(self) -> String {
        format!("{} Bulan Terakhir", self.0)
    }

    pub fn choices() -> impl Iterator<Item = TrendWindow> {
        (MIN_TREND_MONTHS..=MAX_TREND_MONTHS).map(TrendWindow)
    }
}

impl Default for TrendWindow {
    fn default() -> Self {
        TrendWindow(DEFAULT_TREND_MONTHS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient::object")]
    pub summary: StatsSummary,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ocr_status: Vec<LabeledCount>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub meter_condition: Vec<LabeledCount>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub usage_trends: Vec<UsageTrend>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_customers: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_branches: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_officers: i64,
    #[serde(default, deserialize_with = "lenient::object")]
    pub reading_progress: ReadingProgress,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReadingProgress {
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LabeledCount {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UsageTrend {
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub usage: f64,
}

pub const OCR_CATEGORIES: [(&str, &str); 4] = [
    ("GREEN", "Sesuai"),
    ("YELLOW", "Butuh Review"),
    ("VERIFIED", "Terverifikasi"),
    ("RED", "Tidak Sesuai / Mismatch"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct OcrShare {
    pub label: &'static str,
    pub value: i64,
    pub percentage: f64,
}

impl DashboardStats {
    pub fn abnormal_conditions(&self) -> Vec<&LabeledCount> {
        self.meter_condition
            .iter()
            .filter(|item| !item.label.to_lowercase().contains("normal"))
            .collect()
    }

    pub fn abnormal_meter_count(&self) -> i64 {
        self.abnormal_conditions().iter().map(|item| item.value).sum()
    }

    pub fn ocr_breakdown(&self) -> Vec<OcrShare> {
        let readings = self.summary.reading_progress.count;
        OCR_CATEGORIES
            .iter()
            .map(|(key, label)| {
                let value = self
                    .ocr_status
                    .iter()
                    .find(|status| status.label.to_uppercase() == *key)
                    .map(|status| status.value)
                    .unwrap_or(0);
                let percentage = if readings > 0 {
                    value as f64 / readings as f64 * 100.0
                } else {
                    0.0
                };
                OcrShare {
                    label,
                    value,
                    percentage,
                }
            })
            .collect()
    }

    pub fn peak_usage(&self) -> f64 {
        self.usage_trends
            .iter()
            .map(|trend| trend.usage)
            .fold(0.0, f64::max)
    }
}
