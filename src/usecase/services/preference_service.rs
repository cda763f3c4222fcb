use std::sync::Arc;

use crate::usecase::ports::prefs::{PrefError, PreferenceRepository, ViewKey, ViewPreferences};

pub struct PreferenceService {
    repo: Arc<dyn PreferenceRepository>,
}

impl PreferenceService {
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    pub fn init(&self) -> Result<(), PrefError> {
        self.repo.init()
    }

    pub fn load(&self, view: ViewKey) -> Result<ViewPreferences, PrefError> {
        Ok(self.repo.load(view)?.unwrap_or_default())
    }

    pub fn save(&self, view: ViewKey, prefs: &ViewPreferences) -> Result<(), PrefError> {
        self.repo.save(view, prefs)
    }
}
