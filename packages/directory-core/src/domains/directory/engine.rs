//! Directory engine - owns the session's filter state and record store.
//!
//! Every mutation goes through a setter on [`DirectoryEngine`]. Each setter is
//! one discrete event: the state is updated, the derived view and suggestions
//! are recomputed, and the navigation machine decides whether the host gets a
//! new address, all before the call returns.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::commands::{NavigationCommand, SuggestionCommand};
use super::events::{ChangeOrigin, FilterStateChanged, SuggestionEvent};
use super::filter_state::{ConsultMode, FilterState, SortKey};
use super::navigation::NavigationMachine;
use super::pipeline::{self, DerivedView};
use super::query_codec;
use super::suggestions::{self, SuggestionMachine, SuggestionState};
use crate::domains::providers::{ProviderRecord, RecordStore};
use crate::error::SessionError;
use crate::kernel::{AddressHost, BaseProviderSource, NavigationSubscription};
use crate::machine::Machine;

/// Where the session's record load stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Terminal for the session; restart to retry
    Failed(String),
}

pub struct DirectoryEngine<H: AddressHost> {
    host: H,
    subscription: Option<NavigationSubscription>,
    store: RecordStore,
    state: FilterState,
    load_state: LoadState,
    navigation: NavigationMachine,
    dropdown: SuggestionMachine,
    view: DerivedView,
    candidates: Vec<Arc<ProviderRecord>>,
}

impl<H: AddressHost> DirectoryEngine<H> {
    /// Create an engine with an empty store and the host's current address applied.
    ///
    /// Subscribes to the host's navigation events; the subscription is
    /// released when the engine is dropped.
    pub fn new(mut host: H) -> Self {
        let subscription = host.subscribe();
        let state = query_codec::decode_query(&host.current_address());

        let mut engine = Self {
            host,
            subscription: Some(subscription),
            store: RecordStore::default(),
            state,
            load_state: LoadState::Loading,
            navigation: NavigationMachine::new(),
            dropdown: SuggestionMachine::new(),
            view: DerivedView::default(),
            candidates: Vec::new(),
        };

        engine.recompute();
        engine.observe_change(ChangeOrigin::Startup);
        engine
    }

    /// Run the full startup sequence: construct, fetch once, then load or fail.
    ///
    /// The engine is returned either way so the caller can show the failure;
    /// retrying means calling this again for a fresh session.
    pub async fn start_session<S>(source: &S, host: H) -> (Self, Result<(), SessionError>)
    where
        S: BaseProviderSource + ?Sized,
    {
        let mut engine = Self::new(host);
        match source.fetch_providers().await {
            Ok(records) => {
                engine.load(records);
                (engine, Ok(()))
            }
            Err(e) => {
                engine.fail(e.to_string());
                (engine, Err(SessionError::DataLoad(e)))
            }
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Install the fetched records
    pub fn load(&mut self, records: Vec<ProviderRecord>) {
        self.store = RecordStore::new(records);
        self.load_state = LoadState::Ready;
        info!(count = self.store.len(), "Provider directory ready");
        self.recompute();
    }

    /// Record a failed fetch; the store stays empty
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "Provider directory failed to load");
        self.load_state = LoadState::Failed(message);
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.dropdown.decide(&SuggestionEvent::TermEdited);
        self.update(ChangeOrigin::User, |state| state.search_term = term);
    }

    pub fn set_consult_mode(&mut self, mode: ConsultMode) {
        self.update(ChangeOrigin::User, |state| state.consult_mode = mode);
    }

    pub fn toggle_speciality(&mut self, name: &str) {
        self.update(ChangeOrigin::User, |state| {
            state.toggle_speciality(name);
        });
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.update(ChangeOrigin::User, |state| state.sort_key = key);
    }

    /// Reset every criterion to its default
    pub fn clear_all(&mut self) {
        self.update(ChangeOrigin::User, |state| *state = FilterState::default());
    }

    /// Pick the candidate at `index`; out-of-range indices are ignored
    pub fn select_suggestion(&mut self, index: usize) {
        let Some(record) = self.candidates.get(index) else {
            debug!(index, "Ignoring selection outside the candidate list");
            return;
        };

        let event = SuggestionEvent::SuggestionChosen {
            name: record.name.clone(),
        };
        if let Some(SuggestionCommand::ApplySearchTerm { name }) = self.dropdown.decide(&event) {
            self.update(ChangeOrigin::User, |state| state.search_term = name);
        }
    }

    pub fn dismiss_suggestions(&mut self) {
        self.dropdown.decide(&SuggestionEvent::Dismissed);
    }

    pub fn focus_search(&mut self) {
        self.dropdown.decide(&SuggestionEvent::InputFocused);
    }

    pub fn pointer_outside(&mut self) {
        self.dropdown.decide(&SuggestionEvent::PointerOutside);
    }

    pub fn escape(&mut self) {
        self.dropdown.decide(&SuggestionEvent::EscapePressed);
    }

    pub fn submit_search(&mut self) {
        self.dropdown.decide(&SuggestionEvent::SearchSubmitted);
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Consume pending back/forward events and apply the host's current address.
    ///
    /// Returns the number of navigation events consumed. The resulting state
    /// change never pushes a new entry.
    pub fn sync_navigation(&mut self) -> usize {
        let Some(subscription) = self.subscription.as_mut() else {
            return 0;
        };

        let mut consumed = 0;
        while let Ok(event) = subscription.events.try_recv() {
            debug!(?event, "Navigation event received");
            consumed += 1;
        }

        if consumed > 0 {
            let decoded = query_codec::decode_query(&self.host.current_address());
            self.update(ChangeOrigin::History, |state| *state = decoded);
        }
        consumed
    }

    // =========================================================================
    // Projections
    // =========================================================================

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    pub fn suggestions(&self) -> SuggestionState {
        SuggestionState {
            dropdown: self.dropdown.state(),
            candidates: self.candidates.clone(),
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.store
    }

    /// Distinct specialities available as filter facets
    pub fn specialities(&self) -> Vec<String> {
        self.store.specialities()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Encoded form of the current state
    pub fn address(&self) -> String {
        query_codec::encode(&self.state)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn update(&mut self, origin: ChangeOrigin, apply: impl FnOnce(&mut FilterState)) {
        let before = self.state.clone();
        apply(&mut self.state);
        if self.state == before {
            return;
        }

        self.recompute();
        self.observe_change(origin);
    }

    fn recompute(&mut self) {
        self.view = pipeline::derive(&self.store, &self.state);
        self.candidates = suggestions::candidates(&self.store, &self.state.search_term);
    }

    fn observe_change(&mut self, origin: ChangeOrigin) {
        let event = FilterStateChanged {
            query: self.address(),
            origin,
        };

        if let Some(NavigationCommand::PushAddress { query }) = self.navigation.decide(&event) {
            debug!(query = %query, "Pushing address");
            self.host.push_address(&query);
        }
    }
}

impl<H: AddressHost> Drop for DirectoryEngine<H> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.host.unsubscribe(subscription.id);
        }
    }
}
