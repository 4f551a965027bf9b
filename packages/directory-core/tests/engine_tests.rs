//! Session-level tests for the directory engine: scenarios, address history
//! sync and the load lifecycle.

use directory_core::{
    query_codec, ConsultMode, DirectoryEngine, FilterState, InMemoryHistory, LoadState,
    MockProviderSource, ProviderRecord, SessionError, SortKey, SourceError,
};

fn scenario_records() -> Vec<ProviderRecord> {
    vec![
        ProviderRecord::named("Dr. A")
            .with_fees("500")
            .with_experience("10")
            .with_consult_modes(true, false),
        ProviderRecord::named("Dr. B")
            .with_fees("abc")
            .with_experience("5")
            .with_consult_modes(false, true),
    ]
}

fn directory_records() -> Vec<ProviderRecord> {
    vec![
        ProviderRecord::named("Dr. Aarti Sharma")
            .with_fees("₹ 700")
            .with_experience("13 Years of experience")
            .with_consult_modes(true, true)
            .with_speciality("General Physician"),
        ProviderRecord::named("Dr. Rahul Mehta")
            .with_fees("₹ 400")
            .with_experience("6 Years of experience")
            .with_consult_modes(false, true)
            .with_speciality("Dentist"),
        ProviderRecord::named("Dr. Sana Khan")
            .with_fees("₹ 550")
            .with_experience("21 Years of experience")
            .with_consult_modes(true, false)
            .with_speciality("Dentist")
            .with_speciality("Orthodontist"),
    ]
}

fn loaded_engine(history: &InMemoryHistory) -> DirectoryEngine<InMemoryHistory> {
    let mut engine = DirectoryEngine::new(history.clone());
    engine.load(directory_records());
    engine
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_a_unparseable_fee_sorts_last() {
    let history = InMemoryHistory::new("?sort=fees");
    let mut engine = DirectoryEngine::new(history);
    engine.load(scenario_records());

    assert_eq!(engine.state().consult_mode, ConsultMode::Both);
    assert_eq!(engine.view().names(), vec!["Dr. A", "Dr. B"]);
}

#[test]
fn scenario_b_video_only() {
    let mut engine = DirectoryEngine::new(InMemoryHistory::default());
    engine.load(scenario_records());

    engine.set_consult_mode(ConsultMode::VideoOnly);
    assert_eq!(engine.view().names(), vec!["Dr. A"]);
}

#[test]
fn scenario_c_decodes_consult_and_sort() {
    let state = query_codec::decode("?consult=clinic&sort=experience");
    assert_eq!(state.consult_mode, ConsultMode::ClinicOnly);
    assert_eq!(state.sort_key, SortKey::ExperienceDescending);
    assert_eq!(state.search_term, "");
    assert!(state.selected_specialities.is_empty());
}

#[test]
fn scenario_d_unrecognized_values_decode_to_default() {
    assert_eq!(
        query_codec::decode("?consult=walk&sort=bogus"),
        FilterState::default()
    );
}

#[test]
fn scenario_e_default_state_encodes_empty() {
    assert_eq!(query_codec::encode(&FilterState::default()), "");
}

// =============================================================================
// Address history
// =============================================================================

#[test]
fn startup_does_not_push() {
    let history = InMemoryHistory::new("?consult=video");
    let engine = loaded_engine(&history);

    assert_eq!(engine.state().consult_mode, ConsultMode::VideoOnly);
    assert_eq!(history.entries(), vec!["consult=video"]);
}

#[test]
fn each_user_change_pushes_one_entry() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);

    engine.set_consult_mode(ConsultMode::VideoOnly);
    engine.toggle_speciality("Dentist");
    engine.set_sort_key(SortKey::FeesAscending);
    engine.set_search_term("khan");

    assert_eq!(
        history.entries(),
        vec![
            "",
            "consult=video",
            "consult=video&specialities=Dentist",
            "consult=video&specialities=Dentist&sort=fees",
            "search=khan&consult=video&specialities=Dentist&sort=fees",
        ]
    );
    assert_eq!(engine.view().names(), vec!["Dr. Sana Khan"]);
}

#[test]
fn back_and_forward_restore_state_without_pushing() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);

    engine.set_consult_mode(ConsultMode::ClinicOnly);
    engine.set_sort_key(SortKey::FeesAscending);
    assert_eq!(history.len(), 3);

    assert!(history.back());
    assert_eq!(engine.sync_navigation(), 1);
    assert_eq!(engine.state().consult_mode, ConsultMode::ClinicOnly);
    assert_eq!(engine.state().sort_key, SortKey::None);
    assert_eq!(engine.view().names(), vec!["Dr. Aarti Sharma", "Dr. Rahul Mehta"]);

    assert!(history.back());
    engine.sync_navigation();
    assert!(engine.state().is_default());

    assert!(history.forward());
    engine.sync_navigation();
    assert_eq!(engine.state().consult_mode, ConsultMode::ClinicOnly);

    // No entries were added while navigating
    assert_eq!(history.len(), 3);
    assert_eq!(history.position(), 1);
}

#[test]
fn user_change_after_back_truncates_forward_history() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);

    engine.set_sort_key(SortKey::FeesAscending);
    engine.set_sort_key(SortKey::ExperienceDescending);

    history.back();
    engine.sync_navigation();
    engine.set_consult_mode(ConsultMode::VideoOnly);

    assert_eq!(
        history.entries(),
        vec!["", "sort=fees", "consult=video&sort=fees"]
    );
}

#[test]
fn sync_without_pending_events_is_noop() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);
    engine.set_sort_key(SortKey::FeesAscending);

    assert_eq!(engine.sync_navigation(), 0);
    assert_eq!(engine.state().sort_key, SortKey::FeesAscending);
}

#[test]
fn coalesced_navigation_applies_final_address() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);
    engine.set_sort_key(SortKey::FeesAscending);
    engine.set_sort_key(SortKey::ExperienceDescending);

    history.back();
    history.back();
    assert_eq!(engine.sync_navigation(), 2);
    assert!(engine.state().is_default());
    assert_eq!(history.len(), 3);
}

#[test]
fn address_matches_encoded_state() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);
    engine.toggle_speciality("Orthodontist");
    engine.toggle_speciality("Dentist");

    assert_eq!(engine.address(), "specialities=Dentist%2COrthodontist");
    assert_eq!(query_codec::decode(&engine.address()), *engine.state());
}

#[test]
fn initial_address_keeps_raw_reserved_characters_in_values() {
    let history = InMemoryHistory::new("?search=what?&sort=fees");
    let engine = DirectoryEngine::new(history.clone());

    assert_eq!(engine.state().search_term, "what?");
    assert_eq!(engine.state().sort_key, SortKey::FeesAscending);
    assert_eq!(history.entries(), vec!["search=what?&sort=fees"]);

    let engine = DirectoryEngine::new(InMemoryHistory::new("search=c#&consult=clinic"));
    assert_eq!(engine.state().search_term, "c#");
    assert_eq!(engine.state().consult_mode, ConsultMode::ClinicOnly);
}

#[test]
fn raw_host_address_survives_back_and_forward() {
    let history = InMemoryHistory::new("search=what?&sort=fees");
    let mut engine = loaded_engine(&history);

    engine.set_consult_mode(ConsultMode::VideoOnly);
    assert_eq!(
        history.entries(),
        vec![
            "search=what?&sort=fees",
            "search=what%3F&consult=video&sort=fees",
        ]
    );

    history.back();
    engine.sync_navigation();
    assert_eq!(engine.state().search_term, "what?");
    assert_eq!(engine.state().consult_mode, ConsultMode::Both);

    history.forward();
    engine.sync_navigation();
    assert_eq!(engine.state().search_term, "what?");
    assert_eq!(engine.state().consult_mode, ConsultMode::VideoOnly);
    assert_eq!(history.len(), 2);
}

#[test]
fn blank_speciality_from_address_can_be_deselected() {
    let history = InMemoryHistory::new("specialities=+");
    let mut engine = loaded_engine(&history);
    assert!(engine.state().selected_specialities.contains(" "));

    engine.toggle_speciality(" ");
    assert!(engine.state().is_default());
    assert_eq!(history.entries(), vec!["specialities=+", ""]);
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn suggestion_panel_follows_dropdown_machine() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);

    assert!(!engine.suggestions().visible());

    engine.focus_search();
    assert!(engine.suggestions().visible());
    assert!(engine.suggestions().candidates.is_empty());

    engine.set_search_term("dr.");
    assert_eq!(engine.suggestions().candidates.len(), 3);

    engine.escape();
    assert!(!engine.suggestions().visible());

    engine.set_search_term("dr. s");
    assert!(engine.suggestions().visible());

    engine.submit_search();
    let suggestions = engine.suggestions();
    assert!(!suggestions.visible());
    assert_eq!(suggestions.candidates.len(), 1);

    engine.focus_search();
    engine.pointer_outside();
    assert!(!engine.suggestions().visible());

    engine.focus_search();
    engine.dismiss_suggestions();
    assert!(!engine.suggestions().visible());
}

#[test]
fn selecting_a_suggestion_pushes_address() {
    let history = InMemoryHistory::default();
    let mut engine = loaded_engine(&history);

    engine.set_search_term("mehta");
    engine.select_suggestion(0);

    assert_eq!(engine.state().search_term, "Dr. Rahul Mehta");
    assert_eq!(
        history.entries(),
        vec!["", "search=mehta", "search=Dr.+Rahul+Mehta"]
    );
}

// =============================================================================
// Load lifecycle
// =============================================================================

#[test]
fn pending_load_tolerates_empty_store() {
    let mut engine = DirectoryEngine::new(InMemoryHistory::new("?search=dr&sort=fees"));

    assert_eq!(engine.load_state(), &LoadState::Loading);
    assert!(engine.view().is_empty());
    assert!(engine.suggestions().candidates.is_empty());

    engine.set_consult_mode(ConsultMode::VideoOnly);
    assert!(engine.view().is_empty());
}

#[tokio::test]
async fn start_session_loads_records() {
    let source = MockProviderSource::new(directory_records());
    let history = InMemoryHistory::new("?specialities=Dentist&sort=experience");

    let (engine, result) = DirectoryEngine::start_session(&source, history.clone()).await;

    assert!(result.is_ok());
    assert_eq!(engine.load_state(), &LoadState::Ready);
    assert_eq!(
        engine.view().names(),
        vec!["Dr. Sana Khan", "Dr. Rahul Mehta"]
    );
    assert_eq!(history.len(), 1);
    assert_eq!(source.fetch_calls(), 1);
}

#[tokio::test]
async fn failed_load_is_terminal_until_restart() {
    let source = MockProviderSource::new(directory_records()).with_failure(503, "unavailable");
    let history = InMemoryHistory::default();

    let (engine, result) = DirectoryEngine::start_session(&source, history.clone()).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        SessionError::DataLoad(SourceError::Status { status: 503, .. })
    ));
    assert!(matches!(engine.load_state(), LoadState::Failed(_)));
    assert!(engine.view().is_empty());
    assert_eq!(source.fetch_calls(), 1);

    // Retry is a fresh session
    drop(engine);
    let (engine, result) = DirectoryEngine::start_session(&source, history.clone()).await;
    assert!(result.is_ok());
    assert_eq!(engine.view().len(), 3);
    assert_eq!(source.fetch_calls(), 2);
    assert_eq!(history.subscriber_count(), 1);
}
