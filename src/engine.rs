//! Engine session
//!
//! [`IdeaGraphEngine`] owns everything one explorer session needs: the
//! loaded store, the view-state machine, the company filter and the current
//! layout. Every state change recomputes the derived data synchronously, so
//! the layout read afterwards always reflects the latest change.

use crate::companies::CompanyExtractor;
use crate::config::EngineConfig;
use crate::filter::{CompanyFilter, FilterAggregator, FilterSnapshot};
use crate::graph::{GraphPayload, GraphStore, Idea, IdeaId};
use crate::layout::{compute_layout, ClusterPresentation, Layout};
use crate::source::GraphSource;
use crate::view::{scope_ideas, visible_idea_count, ViewEvent, ViewState, ViewStateMachine};
use serde::Serialize;
use tracing::{info, warn};

/// Load state of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EngineStatus {
    /// No payload yet
    Loading,
    Ready,
    /// The fetch failed. Terminal for the session; the caller may offer
    /// `fallback_link` instead.
    Unavailable { reason: String, fallback_link: String },
}

impl EngineStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, EngineStatus::Ready)
    }
}

pub struct IdeaGraphEngine {
    config: EngineConfig,
    store: GraphStore,
    status: EngineStatus,
    view: ViewStateMachine,
    filter: FilterAggregator,
    presentation: ClusterPresentation,
    layout: Layout,
}

impl IdeaGraphEngine {
    /// Empty session waiting for [`IdeaGraphEngine::load`]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            store: GraphStore::empty(),
            status: EngineStatus::Loading,
            view: ViewStateMachine::new(),
            filter: FilterAggregator::default(),
            presentation: ClusterPresentation::default(),
            layout: Layout::empty(),
        }
    }

    /// Session over an already built store
    pub fn from_store(store: GraphStore, config: EngineConfig) -> Self {
        let mut engine = Self::new(config);
        engine.install(store);
        engine
    }

    /// Fetch the payload once and build the store. Failures leave the
    /// session `Unavailable`; nothing retries.
    pub async fn load(&mut self, source: &dyn GraphSource, extractor: &dyn CompanyExtractor) -> &EngineStatus {
        info!("Loading idea graph from {}", source.describe());
        match source.fetch().await {
            Ok(payload) => self.load_payload(payload, extractor),
            Err(e) => {
                self.fail(e.to_string());
                &self.status
            }
        }
    }

    /// Build the store from a payload already in hand
    pub fn load_payload(&mut self, payload: GraphPayload, extractor: &dyn CompanyExtractor) -> &EngineStatus {
        match GraphStore::from_payload(payload, extractor) {
            Ok(store) => self.install(store),
            Err(e) => self.fail(e.to_string()),
        }
        &self.status
    }

    fn install(&mut self, store: GraphStore) {
        self.store = store;
        self.status = EngineStatus::Ready;
        self.filter.refresh(&self.store);
        self.view.repair(&self.store);
        self.recompute();
    }

    fn fail(&mut self, reason: String) {
        warn!("Idea graph unavailable: {}", reason);
        self.status = EngineStatus::Unavailable {
            reason,
            fallback_link: self.config.source.fallback_link.clone(),
        };
        self.layout = Layout::empty();
    }

    fn recompute(&mut self) {
        self.layout = compute_layout(
            &self.store,
            self.filter.snapshot(),
            self.view.state(),
            self.presentation,
            &self.config,
        );
    }

    /// Apply a navigation event. Returns whether the view changed.
    pub fn handle(&mut self, event: &ViewEvent) -> bool {
        if !self.status.is_ready() {
            return false;
        }
        let changed = self.view.handle(event, &self.store);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Toggle one company in the filter; returns whether it is now selected
    pub fn toggle_company(&mut self, company: &str) -> bool {
        let selected = self.filter.toggle(&self.store, company);
        self.recompute();
        selected
    }

    pub fn clear_companies(&mut self) {
        self.filter.clear(&self.store);
        self.recompute();
    }

    pub fn set_companies(&mut self, filter: CompanyFilter) {
        self.filter.set_filter(&self.store, filter);
        self.recompute();
    }

    /// Switch how the clusters level is drawn
    pub fn set_presentation(&mut self, presentation: ClusterPresentation) {
        if self.presentation != presentation {
            self.presentation = presentation;
            self.recompute();
        }
    }

    /// Open the detail panel for a known idea
    pub fn inspect(&mut self, idea: &IdeaId) -> bool {
        if !self.store.contains_idea(idea) {
            return false;
        }
        self.view.inspect(idea.clone());
        true
    }

    pub fn dismiss(&mut self) {
        self.view.dismiss();
    }

    pub fn inspected(&self) -> Option<&Idea> {
        self.view.inspected().and_then(|id| self.store.get_idea(id))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn status(&self) -> &EngineStatus {
        &self.status
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn filter(&self) -> &CompanyFilter {
        self.filter.filter()
    }

    pub fn snapshot(&self) -> &FilterSnapshot {
        self.filter.snapshot()
    }

    pub fn presentation(&self) -> ClusterPresentation {
        self.presentation
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Companies offered for the current level, ignoring the active filter
    /// except that selected entries are always present
    pub fn available_companies(&self) -> Vec<String> {
        let scope = scope_ideas(&self.store, self.view.state(), self.config.layout.top_ideas_limit);
        self.filter.available_companies(&self.store, scope)
    }

    /// Idea nodes the current level draws under the active filter
    pub fn visible_idea_count(&self) -> usize {
        visible_idea_count(
            &self.store,
            self.filter.snapshot(),
            self.view.state(),
            self.config.layout.top_ideas_limit,
        )
    }
}
