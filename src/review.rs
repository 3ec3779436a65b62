//! Local review state for one mounted recommendations page.
//!
//! Everything here is a plain in-memory transition. Nothing the user does
//! while reviewing is sent back to the server.

use crate::error::FetchError;
use crate::model::{EmployeeRecommendationSet, RecommendationItem};

/// Outcome of the single recommendations request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// Carries the user-facing message
    Failed(String),
    Loaded,
}

/// What the page renders. Variants are listed in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error(String),
    AllApproved,
    Empty,
    Ready,
}

impl Phase {
    pub fn resolve(load: &LoadState, review: &ReviewState) -> Phase {
        match load {
            LoadState::Loading => Phase::Loading,
            LoadState::Failed(message) => Phase::Error(message.clone()),
            LoadState::Loaded if review.all_approved => Phase::AllApproved,
            LoadState::Loaded if review.items.is_empty() => Phase::Empty,
            LoadState::Loaded => Phase::Ready,
        }
    }
}

/// Load lifecycle plus the review it produced, for one mounted page.
///
/// Every load gets a generation number. Only the completion of the latest
/// generation is applied, so a slow response from a superseded request
/// cannot overwrite a retry.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSession {
    generation: u32,
    pub load: LoadState,
    pub review: ReviewState,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self {
            generation: 0,
            load: LoadState::Loading,
            review: ReviewState::default(),
        }
    }
}

impl ReviewSession {
    /// Start a load from scratch, discarding all local edits, the open
    /// reasoning panel and any approval in progress. Returns the generation
    /// the eventual completion must carry.
    pub fn begin_load(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.load = LoadState::Loading;
        self.review = ReviewState::default();
        self.generation
    }

    /// Apply the outcome of load `generation`. Returns false, changing
    /// nothing, when a newer load has started since.
    pub fn complete_load(
        &mut self,
        generation: u32,
        result: Result<EmployeeRecommendationSet, FetchError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(set) => {
                self.review = ReviewState::from_set(set);
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                self.load = LoadState::Failed(e.user_message().to_string());
            }
        }
        true
    }

    pub fn phase(&self) -> Phase {
        Phase::resolve(&self.load, &self.review)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewState {
    pub employee_id: String,
    pub employee_name: String,
    /// Sorted by confidence at load time, never re-sorted afterwards
    pub items: Vec<RecommendationItem>,
    /// Item whose reasoning panel is open
    pub selected: Option<String>,
    pub approving: bool,
    pub all_approved: bool,
}

impl ReviewState {
    /// Start a review from a parsed (already sorted) set.
    pub fn from_set(set: EmployeeRecommendationSet) -> Self {
        Self {
            employee_id: set.employee_id,
            employee_name: set.employee_name,
            items: set.recommendations,
            ..Self::default()
        }
    }

    pub fn item(&self, id: &str) -> Option<&RecommendationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: &str) -> Option<&mut RecommendationItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items without a level, in display order.
    pub fn skills(&self) -> impl Iterator<Item = &RecommendationItem> {
        self.items.iter().filter(|item| !item.is_competency())
    }

    /// Items with a level, in display order.
    pub fn competencies(&self) -> impl Iterator<Item = &RecommendationItem> {
        self.items.iter().filter(|item| item.is_competency())
    }

    /// Advance a competency to its next level. No-op for skills and
    /// unknown ids.
    pub fn cycle_level(&mut self, id: &str) {
        if let Some(item) = self.item_mut(id) {
            if let Some(level) = item.level {
                item.level = Some(level.next());
            }
        }
    }

    pub fn reject(&mut self, id: &str) {
        if let Some(item) = self.item_mut(id) {
            item.is_rejected = true;
        }
    }

    pub fn undo(&mut self, id: &str) {
        if let Some(item) = self.item_mut(id) {
            item.is_rejected = false;
        }
    }

    /// Open the reasoning panel for `id`, or close it if it is already the
    /// open one. Opening a panel closes any other.
    pub fn toggle_reasoning(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            return;
        }
        if self.item(id).is_some_and(|item| item.has_reasoning()) {
            self.selected = Some(id.to_string());
        }
    }

    pub fn close_reasoning(&mut self) {
        self.selected = None;
    }

    pub fn is_reasoning_open(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn can_approve(&self) -> bool {
        !self.approving && !self.all_approved
    }

    /// First half of Approve All: lock the control and mark every item
    /// approved so the rows animate out.
    ///
    /// Returns false, changing nothing, when approval is already running or
    /// finished. The caller completes the transition with
    /// [`finish_approve_all`](Self::finish_approve_all) once the animation
    /// delay has elapsed.
    pub fn begin_approve_all(&mut self) -> bool {
        if !self.can_approve() {
            return false;
        }
        self.approving = true;
        for item in &mut self.items {
            item.is_approved = true;
        }
        true
    }

    pub fn finish_approve_all(&mut self) {
        self.all_approved = true;
        self.approving = false;
        self.selected = None;
    }

    pub fn review_summary(&self) -> String {
        if self.all_approved {
            return "No items left to review".to_string();
        }
        match self.items.len() {
            1 => "1 item to review".to_string(),
            n => format!("{} items to review", n),
        }
    }
}
