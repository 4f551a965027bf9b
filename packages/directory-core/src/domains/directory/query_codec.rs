//! Bidirectional mapping between [`FilterState`] and a shareable query string.
//!
//! Only fields that differ from their default are written, so the default
//! state encodes to an empty string and every address is canonical:
//!
//! | Field                   | Key            | Value                      |
//! |-------------------------|----------------|----------------------------|
//! | `search_term`           | `search`       | raw string                 |
//! | `consult_mode`          | `consult`      | `video` \| `clinic`        |
//! | `selected_specialities` | `specialities` | comma-joined names         |
//! | `sort_key`              | `sort`         | `fees` \| `experience`     |
//!
//! Decoding never fails. Unknown keys, unknown enum tokens and repeated keys
//! are dropped and the affected field keeps its default.

use std::collections::HashSet;

use tracing::debug;
use url::{form_urlencoded, Url};

use super::filter_state::{ConsultMode, FilterState, SortKey};

pub const SEARCH_KEY: &str = "search";
pub const CONSULT_KEY: &str = "consult";
pub const SPECIALITIES_KEY: &str = "specialities";
pub const SORT_KEY: &str = "sort";

const SPECIALITY_SEPARATOR: char = ',';

/// Encode the state as a form-urlencoded query string without a leading `?`.
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_term.is_empty() {
        serializer.append_pair(SEARCH_KEY, &state.search_term);
    }

    if let Some(token) = state.consult_mode.query_token() {
        serializer.append_pair(CONSULT_KEY, token);
    }

    let specialities = state
        .selected_specialities
        .iter()
        .filter(|name| !name.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    if !specialities.is_empty() {
        serializer.append_pair(SPECIALITIES_KEY, &specialities);
    }

    if let Some(token) = state.sort_key.query_token() {
        serializer.append_pair(SORT_KEY, token);
    }

    serializer.finish()
}

/// Decode an address into a state.
///
/// Accepts a full URL, a path starting with `/`, a query with a leading `?`,
/// or a bare query. For full URLs and paths the query starts after the first
/// `?`; a leading `?` is stripped once. The fragment after `#` is discarded.
pub fn decode(address: &str) -> FilterState {
    if let Ok(url) = Url::parse(address) {
        return parse_query(url.query().unwrap_or_default());
    }

    let query = match address.strip_prefix('?') {
        Some(query) => query,
        None if address.starts_with('/') => address
            .split_once('?')
            .map_or("", |(_, query)| query),
        None => address,
    };
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    parse_query(query)
}

/// Decode a bare query as handed back by an address host.
///
/// Only a single leading `?` is stripped; any other `?` or `#` is part of a value.
pub fn decode_query(query: &str) -> FilterState {
    parse_query(query.strip_prefix('?').unwrap_or(query))
}

fn parse_query(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let mut seen = HashSet::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if !seen.insert(key.clone()) {
            debug!(key = %key, "Ignoring repeated address key");
            continue;
        }

        match &*key {
            SEARCH_KEY => state.search_term = value.into_owned(),
            CONSULT_KEY => match &*value {
                "video" => state.consult_mode = ConsultMode::VideoOnly,
                "clinic" => state.consult_mode = ConsultMode::ClinicOnly,
                other => debug!(value = other, "Ignoring unrecognized consult mode"),
            },
            SPECIALITIES_KEY => {
                state.selected_specialities = value
                    .split(SPECIALITY_SEPARATOR)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            SORT_KEY => match &*value {
                "fees" => state.sort_key = SortKey::FeesAscending,
                "experience" => state.sort_key = SortKey::ExperienceDescending,
                other => debug!(value = other, "Ignoring unrecognized sort key"),
            },
            other => debug!(key = other, "Ignoring unknown address key"),
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_encodes_empty() {
        assert_eq!(encode(&FilterState::default()), "");
    }

    #[test]
    fn test_encode_full_state_in_key_order() {
        let state = FilterState::new()
            .with_sort_key(SortKey::ExperienceDescending)
            .with_speciality("Dentist")
            .with_speciality("Cardiologist")
            .with_consult_mode(ConsultMode::VideoOnly)
            .with_search_term("dr a");

        assert_eq!(
            encode(&state),
            "search=dr+a&consult=video&specialities=Cardiologist%2CDentist&sort=experience"
        );
    }

    #[test]
    fn test_decode_consult_and_sort() {
        let state = decode("?consult=clinic&sort=experience");
        assert_eq!(
            state,
            FilterState::new()
                .with_consult_mode(ConsultMode::ClinicOnly)
                .with_sort_key(SortKey::ExperienceDescending)
        );
    }

    #[test]
    fn test_decode_ignores_unrecognized_values() {
        assert!(decode("?consult=walk&sort=bogus").is_default());
        assert!(decode("consult=both").is_default());
        assert!(decode("page=3&utm_source=mail").is_default());
        assert!(decode("=&&&==").is_default());
    }

    #[test]
    fn test_decode_drops_empty_speciality_tokens() {
        let state = decode("specialities=,Dentist,,ENT,");
        assert_eq!(
            state.selected_specialities.into_iter().collect::<Vec<_>>(),
            vec!["Dentist", "ENT"]
        );
        assert!(decode("specialities=,,").selected_specialities.is_empty());
    }

    #[test]
    fn test_decode_first_repeated_key_wins() {
        let state = decode("sort=fees&sort=experience&search=a&search=b");
        assert_eq!(state.sort_key, SortKey::FeesAscending);
        assert_eq!(state.search_term, "a");
    }

    #[test]
    fn test_decode_full_address() {
        let state = decode("https://directory.example/doctors?search=Dr.%20A&consult=video#top");
        assert_eq!(state.search_term, "Dr. A");
        assert_eq!(state.consult_mode, ConsultMode::VideoOnly);
    }

    #[test]
    fn test_decode_path_address() {
        let state = decode("/doctors?sort=fees#results");
        assert_eq!(state.sort_key, SortKey::FeesAscending);
        assert!(decode("/doctors").is_default());
    }

    #[test]
    fn test_decode_keeps_raw_question_mark_in_value() {
        let expected = FilterState::new()
            .with_search_term("what?")
            .with_sort_key(SortKey::FeesAscending);

        assert_eq!(decode("?search=what?&sort=fees"), expected);
        assert_eq!(decode_query("search=what?&sort=fees"), expected);
        assert_eq!(decode_query("?search=what?&sort=fees"), expected);
    }

    #[test]
    fn test_decode_query_keeps_raw_hash_in_value() {
        let state = decode_query("search=c#&consult=video");
        assert_eq!(state.search_term, "c#");
        assert_eq!(state.consult_mode, ConsultMode::VideoOnly);

        // As a full address the same text carries a fragment
        assert_eq!(decode("?search=c#&consult=video").search_term, "c");
    }

    #[test]
    fn test_search_term_with_reserved_characters_round_trips() {
        let state = FilterState::new().with_search_term("a&b=c?d#e+f %");
        assert_eq!(decode(&encode(&state)), state);
    }
}
