use serde::Deserialize;

use crate::domain::entities::lenient;
use crate::domain::entities::request::{RequestSequencer, RequestTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Overview,
    Branch,
    Officer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgressEntry {
    #[serde(default, alias = "kode_cabang", deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nama: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_pelanggan: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub pelanggan_tercatat: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

impl ProgressEntry {
    pub fn is_complete(&self) -> bool {
        self.percentage >= 100.0
    }

    pub fn initial(&self) -> String {
        self.nama
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillEvent {
    SelectAggregate,
    SelectBranch(BranchRef),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillRequest {
    Branches,
    Officers(BranchRef),
}

impl DrillRequest {
    pub fn branch_code(&self) -> Option<&str> {
        match self {
            DrillRequest::Branches => None,
            DrillRequest::Officers(branch) => Some(branch.code.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillStep {
    Fetch(RequestTicket, DrillRequest),
    Moved,
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrillDown {
    mode: ViewMode,
    branch: Option<BranchRef>,
    entries: Vec<ProgressEntry>,
}

impl DrillDown {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selected_branch(&self) -> Option<&BranchRef> {
        self.branch.as_ref()
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn handle(&mut self, event: DrillEvent) -> Option<DrillRequest> {
        match (self.mode, event) {
            (ViewMode::Overview, DrillEvent::SelectAggregate) => Some(DrillRequest::Branches),
            (ViewMode::Branch, DrillEvent::SelectBranch(branch)) => {
                Some(DrillRequest::Officers(branch))
            }
            (ViewMode::Officer, DrillEvent::Back) => Some(DrillRequest::Branches),
            (ViewMode::Branch, DrillEvent::Back) => {
                *self = DrillDown::default();
                None
            }
            _ => None,
        }
    }

    pub fn dispatch(&mut self, event: DrillEvent, sequencer: &mut RequestSequencer) -> DrillStep {
        let before = self.mode;
        match self.handle(event) {
            Some(request) => DrillStep::Fetch(sequencer.issue(), request),
            None if self.mode != before => {
                sequencer.issue();
                DrillStep::Moved
            }
            None => DrillStep::Ignored,
        }
    }

    /// Applies a finished fetch. `None` means the ticket went stale; an error
    /// leaves the state as it was.
    pub fn complete<E>(
        &mut self,
        sequencer: &RequestSequencer,
        ticket: RequestTicket,
        request: DrillRequest,
        result: Result<Vec<ProgressEntry>, E>,
    ) -> Option<Result<(), E>> {
        let result = sequencer.accept(ticket, result)?;
        Some(result.map(|entries| self.resolve(request, entries)))
    }

    pub fn resolve(&mut self, request: DrillRequest, entries: Vec<ProgressEntry>) {
        match request {
            DrillRequest::Branches => {
                self.mode = ViewMode::Branch;
                self.branch = None;
            }
            DrillRequest::Officers(branch) => {
                self.mode = ViewMode::Officer;
                self.branch = Some(branch);
            }
        }
        self.entries = entries;
    }

    pub fn title(&self) -> String {
        match (self.mode, self.branch.as_ref()) {
            (ViewMode::Officer, Some(branch)) => format!("Progres Petugas - {}", branch.name),
            (ViewMode::Officer, None) => "Progres Petugas".to_string(),
            _ => "Detail Progres per Cabang".to_string(),
        }
    }
}
