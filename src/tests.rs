use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde_json::json;

use crate::config::{AppConfig, ConfigError, DEFAULT_BASE_URL};
use crate::domain::entities::criteria::{
    default_visible_columns, Column, SearchScope, SortSpec,
};
use crate::domain::entities::customer::{CustomerField, CustomerRecord};
use crate::domain::entities::drilldown::{
    BranchRef, DrillDown, DrillEvent, DrillRequest, DrillStep, ProgressEntry, ViewMode,
};
use crate::domain::entities::reference::{Branch, Officer, Route};
use crate::domain::entities::request::RequestSequencer;
use crate::domain::entities::stats::{DashboardStats, TrendWindow};
use crate::infra::export::csv::{
    default_export_file_name, export_customers_csv, write_customers_csv,
};
use crate::infra::http::client::{decode_drilldown, decode_stats, HttpApi};
use crate::infra::sqlite::queries::{load_column_visibility, upsert_column_visibility};
use crate::infra::sqlite::repo::SqlitePreferenceRepo;
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::api::{ApiError, CustomerQuery, PdamApi};
use crate::usecase::ports::prefs::{PreferenceRepository, ViewKey, ViewPreferences};
use crate::usecase::services::customer_service::CustomerService;
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::stats_service::StatsService;
use crate::*;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("pdam-{prefix}-{nanos}"))
}

fn customer(id_sambungan: &str, nama: &str, kode_rute: &str) -> CustomerRecord {
    CustomerRecord {
        id: id_sambungan.to_string(),
        nama: nama.to_string(),
        id_sambungan: id_sambungan.to_string(),
        kode_rute: kode_rute.to_string(),
        kode_tarif: "R1".to_string(),
        ..CustomerRecord::default()
    }
}

#[test]
fn init_db_creates_required_tables() {
    let temp_dir = unique_test_dir("init-db");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("prefs.sqlite");

    let result = init_db(&db_path);

    assert!(result.is_ok(), "init_db should succeed: {result:?}");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('view_setting','column_visibility')",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");

    assert_eq!(table_count, 2, "required tables should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn init_db_is_idempotent() {
    let temp_dir = unique_test_dir("init-db-twice");
    let db_path = temp_dir.join("nested").join("prefs.sqlite");

    init_db(&db_path).expect("first init should create parent dirs");
    init_db(&db_path).expect("second init should succeed");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn preferences_round_trip_per_view() {
    let temp_dir = unique_test_dir("prefs-round-trip");
    let repo = SqlitePreferenceRepo::new(temp_dir.join("prefs.sqlite"));
    repo.init().expect("init should succeed");

    assert_eq!(
        repo.load(ViewKey::CustomerMapping)
            .expect("load should succeed"),
        None,
        "nothing stored yet"
    );

    let mut visible = default_visible_columns();
    visible.remove(&Column::Alamat);
    visible.insert(Column::Telepon);
    let prefs = ViewPreferences {
        visible_columns: visible,
        search_scope: SearchScope::Nama,
        sort: Some(SortSpec::desc(CustomerField::Nama)),
        page_size: 50,
    };
    repo.save(ViewKey::CustomerMapping, &prefs)
        .expect("save should succeed");

    let loaded = repo
        .load(ViewKey::CustomerMapping)
        .expect("load should succeed");
    assert_eq!(loaded, Some(prefs.clone()));

    assert_eq!(
        repo.load(ViewKey::OfficerMapping)
            .expect("load should succeed"),
        None,
        "views are stored independently"
    );

    let updated = ViewPreferences {
        sort: None,
        page_size: 25,
        ..prefs
    };
    repo.save(ViewKey::CustomerMapping, &updated)
        .expect("second save should overwrite");
    assert_eq!(
        repo.load(ViewKey::CustomerMapping)
            .expect("load should succeed"),
        Some(updated)
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn unknown_column_ids_are_ignored_on_load() {
    let temp_dir = unique_test_dir("prefs-unknown");
    let db_path = temp_dir.join("prefs.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let mut visibility = BTreeMap::new();
    visibility.insert("legacy_column".to_string(), true);
    visibility.insert("telepon".to_string(), true);
    visibility.insert("alamat".to_string(), false);
    upsert_column_visibility(&db_path, "officer_mapping", &visibility)
        .expect("should store column visibility");

    let stored =
        load_column_visibility(&db_path, "officer_mapping").expect("should load visibility");
    assert_eq!(stored.len(), 3);

    let service = PreferenceService::new(Arc::new(SqlitePreferenceRepo::new(db_path)));
    let prefs = service
        .load(ViewKey::OfficerMapping)
        .expect("load should succeed");

    assert!(prefs.visible_columns.contains(&Column::Telepon));
    assert!(!prefs.visible_columns.contains(&Column::Alamat));
    assert!(prefs.visible_columns.contains(&Column::Nama));
    assert_eq!(prefs.search_scope, SearchScope::All);
    assert_eq!(prefs.page_size, 10);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn preference_service_falls_back_to_defaults() {
    let temp_dir = unique_test_dir("prefs-default");
    let service =
        PreferenceService::new(Arc::new(SqlitePreferenceRepo::new(temp_dir.join("p.sqlite"))));
    service.init().expect("init should succeed");

    let prefs = service
        .load(ViewKey::CustomerMapping)
        .expect("load should succeed");

    assert_eq!(prefs, ViewPreferences::default());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn csv_export_writes_visible_columns_in_display_order() {
    let mut located = customer("100", "Budi", "R01");
    located.latitude = Some("-7.1".to_string());
    located.longitude = Some("110.2".to_string());
    let rows = vec![located, customer("200", "Sari", "R01")];
    let visible = [Column::Nama, Column::IdSambungan, Column::Koordinat]
        .into_iter()
        .collect();

    let mut buffer = Vec::new();
    let written = write_customers_csv(&mut buffer, &rows, &visible).expect("csv should write");
    let text = String::from_utf8(buffer).expect("csv should be utf-8");

    assert_eq!(written, 2);
    assert_eq!(
        text,
        "NO. SAMBUNGAN,NAMA PELANGGAN,KOORDINAT\n100,Budi,\"-7.1, 110.2\"\n200,Sari,-\n"
    );
}

#[test]
fn csv_export_to_file_requires_a_visible_column() {
    let temp_dir = unique_test_dir("csv-export");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join(default_export_file_name(
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
    ));
    let rows = vec![customer("100", "Budi", "R01")];

    let empty = export_customers_csv(&csv_path, &rows, &Default::default());
    assert!(empty.is_err(), "export without columns should fail");

    export_customers_csv(&csv_path, &rows, &default_visible_columns())
        .expect("export should succeed");
    let content = fs::read_to_string(&csv_path).expect("should read exported csv");
    assert!(content.starts_with("NO. SAMBUNGAN,NAMA PELANGGAN,ALAMAT,KOORDINAT,TARIF,RUTE\n"));
    assert!(csv_path.ends_with("data_pelanggan_2024-03-09.csv"));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn config_defaults_when_environment_is_empty() {
    let config = AppConfig::from_lookup(|_| None).expect("defaults should load");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn config_reads_and_normalises_values() {
    let vars: BTreeMap<&str, &str> = [
        ("PDAM_BASE_URL", "https://pdam.example/api/"),
        ("PDAM_API_TOKEN", "  secret "),
        ("PDAM_PAGE_SIZE", "25"),
        ("PDAM_DB_PATH", "/tmp/prefs.sqlite"),
        ("PDAM_DEBUG", "TRUE"),
    ]
    .into_iter()
    .collect();

    let config = AppConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string()))
        .expect("config should load");

    assert_eq!(config.base_url, "https://pdam.example/api");
    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.page_size, 25);
    assert_eq!(config.db_path, Some(PathBuf::from("/tmp/prefs.sqlite")));
    assert!(config.debug);
}

#[test]
fn config_from_env_reads_dotenv_file() {
    let temp_dir = unique_test_dir("dotenv");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    fs::write(
        temp_dir.join(".env"),
        "PDAM_BASE_URL=https://dotenv.pdam.example/\nPDAM_PAGE_SIZE=50\n",
    )
    .expect("should write .env");
    let previous_dir = std::env::current_dir().expect("should read current dir");

    std::env::set_current_dir(&temp_dir).expect("should enter temp dir");
    let config = AppConfig::from_env();
    std::env::set_current_dir(&previous_dir).expect("should restore current dir");
    std::env::remove_var("PDAM_BASE_URL");
    std::env::remove_var("PDAM_PAGE_SIZE");

    let config = config.expect("config should load");
    assert_eq!(config.base_url, "https://dotenv.pdam.example");
    assert_eq!(config.page_size, 50);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn config_rejects_invalid_values() {
    let bad_url = AppConfig::from_lookup(|key| {
        (key == "PDAM_BASE_URL").then(|| "ftp://pdam".to_string())
    });
    assert_eq!(
        bad_url,
        Err(ConfigError::InvalidBaseUrl("ftp://pdam".to_string()))
    );

    let bad_size =
        AppConfig::from_lookup(|key| (key == "PDAM_PAGE_SIZE").then(|| "30".to_string()));
    assert!(matches!(
        bad_size,
        Err(ConfigError::InvalidPageSize { value, .. }) if value == "30"
    ));

    let blank = AppConfig::from_lookup(|key| (key == "PDAM_BASE_URL").then(|| "  ".to_string()))
        .expect("blank values should be ignored");
    assert_eq!(blank.base_url, DEFAULT_BASE_URL);
}

#[test]
fn http_client_builds_endpoint_urls() {
    let api = HttpApi::new("http://pdam.local/", None).expect("client should build");

    assert_eq!(
        api.endpoint_url("options.php"),
        "http://pdam.local/api/options.php"
    );
}

#[test]
fn lenient_decoding_skips_bad_elements() {
    let branches: Vec<Branch> = crate::domain::entities::lenient::items(json!([
        { "kode_cabang": 1, "cabang": "Pusat" },
        "not an object",
        { "kode_cabang": "02", "cabang": null }
    ]));
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].kode_cabang, "1");
    assert_eq!(branches[1].cabang, "");

    let not_a_list: Vec<Route> =
        crate::domain::entities::lenient::items(json!({ "error": "unauthorized" }));
    assert!(not_a_list.is_empty());
}

#[test]
fn decode_stats_tolerates_partial_payloads() {
    let stats = decode_stats(json!({
        "summary": {
            "total_customers": "1200",
            "total_branches": 4,
            "reading_progress": { "count": 300, "total": 1200, "percentage": "25" }
        },
        "ocr_status": [
            { "label": "GREEN", "value": 150 },
            { "label": "red", "value": "30" }
        ],
        "meter_condition": [
            { "label": "Normal", "value": 250 },
            { "label": "Buram", "value": 20 },
            { "label": "Rusak", "value": 5 }
        ],
        "usage_trends": "unavailable"
    }));

    assert_eq!(stats.summary.total_customers, 1200);
    assert_eq!(stats.summary.total_officers, 0);
    assert_eq!(stats.summary.reading_progress.percentage, 25.0);
    assert!(stats.usage_trends.is_empty());
    assert_eq!(stats.abnormal_meter_count(), 25);
    assert_eq!(stats.abnormal_conditions().len(), 2);

    let ocr = stats.ocr_breakdown();
    assert_eq!(ocr.len(), 4);
    assert_eq!((ocr[0].label, ocr[0].value), ("Sesuai", 150));
    assert_eq!(ocr[0].percentage, 50.0);
    assert_eq!(ocr[1].value, 0);
    assert_eq!(ocr[3].value, 30);
    assert!((ocr[3].percentage - 10.0).abs() < 1e-9);

    assert_eq!(decode_stats(json!([1, 2, 3])), DashboardStats::default());
}

#[test]
fn ocr_breakdown_is_zero_without_readings() {
    let stats = decode_stats(json!({ "ocr_status": [{ "label": "GREEN", "value": 5 }] }));

    assert!(stats
        .ocr_breakdown()
        .iter()
        .all(|share| share.percentage == 0.0));
}

#[test]
fn decode_drilldown_reads_data_rows() {
    let entries = decode_drilldown(json!({
        "level": "branch",
        "data": [
            { "kode_cabang": "01", "nama": "Pusat", "total_pelanggan": "100", "pelanggan_tercatat": 100, "percentage": 100 },
            { "id": 7, "nama": "agus", "total_pelanggan": 40, "pelanggan_tercatat": 10, "percentage": "25.0" }
        ]
    }));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "01");
    assert!(entries[0].is_complete());
    assert_eq!(entries[1].id, "7");
    assert_eq!(entries[1].initial(), "A");
    assert!(!entries[1].is_complete());

    assert!(decode_drilldown(json!({ "level": "branch" })).is_empty());
    assert!(decode_drilldown(json!("oops")).is_empty());
}

fn progress(id: &str, nama: &str) -> ProgressEntry {
    ProgressEntry {
        id: id.to_string(),
        nama: nama.to_string(),
        ..ProgressEntry::default()
    }
}

#[test]
fn drilldown_walks_overview_branch_officer_and_back() {
    let mut drill = DrillDown::default();
    assert_eq!(drill.mode(), ViewMode::Overview);

    let request = drill
        .handle(DrillEvent::SelectAggregate)
        .expect("aggregate click should request branches");
    assert_eq!(request, DrillRequest::Branches);
    assert_eq!(drill.mode(), ViewMode::Overview, "waits for data");
    drill.resolve(request, vec![progress("01", "Pusat")]);
    assert_eq!(drill.mode(), ViewMode::Branch);
    assert_eq!(drill.title(), "Detail Progres per Cabang");

    let pusat = BranchRef {
        code: "01".to_string(),
        name: "Pusat".to_string(),
    };
    let request = drill
        .handle(DrillEvent::SelectBranch(pusat.clone()))
        .expect("branch click should request officers");
    assert_eq!(request.branch_code(), Some("01"));
    drill.resolve(request, vec![progress("9", "Agus")]);
    assert_eq!(drill.mode(), ViewMode::Officer);
    assert_eq!(drill.selected_branch(), Some(&pusat));
    assert_eq!(drill.title(), "Progres Petugas - Pusat");

    let request = drill
        .handle(DrillEvent::Back)
        .expect("back from officers should reload branches");
    assert_eq!(request, DrillRequest::Branches);
    drill.resolve(request, vec![progress("01", "Pusat")]);
    assert_eq!(drill.mode(), ViewMode::Branch);
    assert_eq!(drill.selected_branch(), None);

    assert_eq!(drill.handle(DrillEvent::Back), None);
    assert_eq!(drill, DrillDown::default());
}

#[test]
fn drilldown_ignores_events_that_do_not_apply() {
    let mut drill = DrillDown::default();
    let branch = BranchRef {
        code: "01".to_string(),
        name: "Pusat".to_string(),
    };

    assert_eq!(drill.handle(DrillEvent::Back), None);
    assert_eq!(drill.handle(DrillEvent::SelectBranch(branch)), None);
    assert_eq!(drill, DrillDown::default());
}

fn pusat() -> BranchRef {
    BranchRef {
        code: "01".to_string(),
        name: "Pusat".to_string(),
    }
}

fn drill_into_branches(drill: &mut DrillDown, sequencer: &mut RequestSequencer) {
    let DrillStep::Fetch(ticket, request) = drill.dispatch(DrillEvent::SelectAggregate, sequencer)
    else {
        panic!("aggregate click should fetch branches");
    };
    let outcome = drill.complete::<ApiError>(sequencer, ticket, request, Ok(vec![progress("01", "Pusat")]));
    assert_eq!(outcome, Some(Ok(())));
    assert_eq!(drill.mode(), ViewMode::Branch);
}

#[test]
fn back_to_overview_discards_pending_officer_fetch() {
    let mut drill = DrillDown::default();
    let mut sequencer = RequestSequencer::default();
    drill_into_branches(&mut drill, &mut sequencer);

    let DrillStep::Fetch(pending, request) =
        drill.dispatch(DrillEvent::SelectBranch(pusat()), &mut sequencer)
    else {
        panic!("branch click should fetch officers");
    };
    assert_eq!(
        drill.dispatch(DrillEvent::Back, &mut sequencer),
        DrillStep::Moved
    );
    assert_eq!(drill.mode(), ViewMode::Overview);

    let late = drill.complete::<ApiError>(&sequencer, pending, request, Ok(vec![progress("9", "Agus")]));

    assert_eq!(late, None);
    assert_eq!(drill, DrillDown::default());
}

#[test]
fn newer_drill_request_supersedes_older_one() {
    let mut drill = DrillDown::default();
    let mut sequencer = RequestSequencer::default();
    drill_into_branches(&mut drill, &mut sequencer);

    let DrillStep::Fetch(first, first_request) =
        drill.dispatch(DrillEvent::SelectBranch(pusat()), &mut sequencer)
    else {
        panic!("branch click should fetch officers");
    };
    let utara = BranchRef {
        code: "02".to_string(),
        name: "Utara".to_string(),
    };
    let DrillStep::Fetch(second, second_request) =
        drill.dispatch(DrillEvent::SelectBranch(utara.clone()), &mut sequencer)
    else {
        panic!("branch click should fetch officers");
    };

    let stale_failure: Result<Vec<ProgressEntry>, ApiError> = Err(ApiError::Status {
        endpoint: "dashboard_drilldown.php".to_string(),
        status: 502,
    });
    assert_eq!(drill.complete(&sequencer, first, first_request, stale_failure), None);
    assert_eq!(drill.mode(), ViewMode::Branch);

    let applied = drill.complete::<ApiError>(&sequencer, second, second_request, Ok(vec![progress("7", "Budi")]));
    assert_eq!(applied, Some(Ok(())));
    assert_eq!(drill.mode(), ViewMode::Officer);
    assert_eq!(drill.selected_branch(), Some(&utara));
}

#[test]
fn ignored_drill_events_keep_pending_fetch_current() {
    let mut drill = DrillDown::default();
    let mut sequencer = RequestSequencer::default();

    let DrillStep::Fetch(ticket, request) =
        drill.dispatch(DrillEvent::SelectAggregate, &mut sequencer)
    else {
        panic!("aggregate click should fetch branches");
    };
    assert_eq!(drill.dispatch(DrillEvent::Back, &mut sequencer), DrillStep::Ignored);

    let outcome = drill.complete::<ApiError>(&sequencer, ticket, request, Ok(Vec::new()));
    assert_eq!(outcome, Some(Ok(())));
    assert_eq!(drill.mode(), ViewMode::Branch);
}

#[test]
fn sequencer_only_accepts_latest_ticket() {
    let mut sequencer = RequestSequencer::default();
    let first = sequencer.issue();
    let second = sequencer.issue();

    assert!(!sequencer.is_current(first));
    assert!(sequencer.is_current(second));
}

#[test]
fn trend_window_is_clamped() {
    assert_eq!(TrendWindow::new(0).months(), 1);
    assert_eq!(TrendWindow::new(9).months(), 5);
    assert_eq!(TrendWindow::default().months(), 3);
    assert_eq!(TrendWindow::choices().count(), 5);
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1.000");
    assert_eq!(format_count(1234567), "1.234.567");
    assert_eq!(format_count(-45000), "-45.000");
}

#[test]
fn display_helpers_format_values() {
    assert_eq!(format_percentage(12.345), "12.3%");
    assert_eq!(format_percentage(f64::NAN), "0.0%");
    assert_eq!(format_coordinate((-7.5, 110.25)), "-7.50000, 110.25000");
    assert_eq!(
        maps_url(-7.5, 110.25),
        "https://www.google.com/maps?q=-7.5,110.25"
    );
    assert!(table_cell_style("right").contains("text-align: right;"));
}

#[test]
fn default_db_path_points_to_preferences_sqlite() {
    let db_path = default_db_path().expect("default db path should resolve");

    assert!(db_path.ends_with("preferences.sqlite"));
}

#[test]
fn ensure_webview_data_dir_creates_directory() {
    let base_dir = unique_test_dir("webview-data");

    let webview_data_dir =
        ensure_webview_data_dir(&base_dir).expect("should create webview data dir");

    assert!(webview_data_dir.ends_with("webview2"));
    assert!(webview_data_dir.is_dir());

    fs::remove_dir_all(&base_dir).expect("should cleanup temp dir");
}

/// Serves canned data and records which endpoints were hit.
#[derive(Default)]
struct FakeApi {
    calls: RefCell<Vec<String>>,
    customers: Vec<CustomerRecord>,
    fail_drilldown: bool,
}

impl FakeApi {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PdamApi for FakeApi {
    async fn branches(&self) -> Result<Vec<Branch>, ApiError> {
        self.calls.borrow_mut().push("branches".to_string());
        Ok(vec![Branch {
            kode_cabang: "01".to_string(),
            cabang: "Pusat".to_string(),
        }])
    }

    async fn routes(&self, kode_cabang: &str) -> Result<Vec<Route>, ApiError> {
        self.calls.borrow_mut().push(format!("routes:{kode_cabang}"));
        Ok(Vec::new())
    }

    async fn officers(&self, branch_code: &str) -> Result<Vec<Officer>, ApiError> {
        self.calls.borrow_mut().push(format!("officers:{branch_code}"));
        Ok(Vec::new())
    }

    async fn customers(&self, query: &CustomerQuery) -> Result<Vec<CustomerRecord>, ApiError> {
        self.calls.borrow_mut().push(format!("customers:{query:?}"));
        Ok(self.customers.clone())
    }

    async fn dashboard_stats(&self, window: TrendWindow) -> Result<DashboardStats, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("stats:{}", window.months()));
        Ok(DashboardStats::default())
    }

    async fn drilldown(&self, branch_code: Option<&str>) -> Result<Vec<ProgressEntry>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("drilldown:{}", branch_code.unwrap_or("-")));
        if self.fail_drilldown {
            return Err(ApiError::Status {
                endpoint: "dashboard_drilldown.php".to_string(),
                status: 500,
            });
        }
        Ok(vec![progress("01", "Pusat")])
    }
}

#[tokio::test]
async fn empty_selection_does_not_fetch() {
    let api = Rc::new(FakeApi::default());
    let service = CustomerService::new(api.clone());

    let routes = service.routes("  ").await.expect("routes should succeed");
    let officers = service.officers("").await.expect("officers should succeed");
    let customers = service
        .customers(&CustomerQuery::Route {
            kode_rute: String::new(),
            kode_cabang: "01".to_string(),
        })
        .await
        .expect("customers should succeed");

    assert!(routes.is_empty() && officers.is_empty() && customers.is_empty());
    assert!(api.calls().is_empty(), "no request should be issued");
}

#[tokio::test]
async fn route_customers_are_filtered_to_exact_route() {
    let api = Rc::new(FakeApi {
        customers: vec![
            customer("1", "Budi", "R01"),
            customer("2", "Sari", "R010"),
            customer("3", "Tono", "R01"),
        ],
        ..FakeApi::default()
    });
    let service = CustomerService::new(api.clone());

    let by_route = service
        .customers(&CustomerQuery::Route {
            kode_rute: "R01".to_string(),
            kode_cabang: "01".to_string(),
        })
        .await
        .expect("customers should load");
    let by_officer = service
        .customers(&CustomerQuery::Officer {
            officer_id: "9".to_string(),
        })
        .await
        .expect("customers should load");

    let ids: Vec<&str> = by_route.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(by_officer.len(), 3, "officer lists are not route-filtered");
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn stats_service_passes_window_and_branch() {
    let api = Rc::new(FakeApi::default());
    let service = StatsService::new(api.clone());

    service
        .dashboard(TrendWindow::new(5))
        .await
        .expect("stats should load");
    let branches = service
        .drill(&DrillRequest::Branches)
        .await
        .expect("branches should load");
    service
        .drill(&DrillRequest::Officers(BranchRef {
            code: "01".to_string(),
            name: "Pusat".to_string(),
        }))
        .await
        .expect("officers should load");

    assert_eq!(branches.len(), 1);
    assert_eq!(
        api.calls(),
        vec!["stats:5", "drilldown:-", "drilldown:01"]
    );
}

#[tokio::test]
async fn failed_drill_fetch_leaves_state_unchanged() {
    let api = Rc::new(FakeApi {
        fail_drilldown: true,
        ..FakeApi::default()
    });
    let service = StatsService::new(api);
    let mut drill = DrillDown::default();

    let mut sequencer = RequestSequencer::default();

    let DrillStep::Fetch(ticket, request) =
        drill.dispatch(DrillEvent::SelectAggregate, &mut sequencer)
    else {
        panic!("aggregate click should fetch branches");
    };
    let result = service.drill(&request).await;
    let outcome = drill.complete(&sequencer, ticket, request, result);

    assert!(matches!(
        outcome,
        Some(Err(ApiError::Status { status: 500, .. }))
    ));
    assert_eq!(drill, DrillDown::default());
}
