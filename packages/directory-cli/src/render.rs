//! Card rendering for provider records

use colored::Colorize;
use console::style;

use directory_core::{DerivedView, FilterState, ProviderRecord, SuggestionState};

/// One provider as a multi-line card
pub fn format_record(record: &ProviderRecord) -> String {
    let mut lines = Vec::new();

    let experience = record
        .experience
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "experience not listed".to_string());
    lines.push(format!(
        "{}  {}",
        record.name.bold(),
        style(experience).dim()
    ));

    if let Some(photo) = present(record.photo.as_deref()) {
        lines.push(format!("  {} {}", "Photo:".bright_blue(), style(photo).dim()));
    }

    let intro = record
        .introduction
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("No introduction available.");
    lines.push(format!("  {}", intro));

    if !record.specialities.is_empty() {
        let names: Vec<&str> = record.specialities.iter().map(|s| s.name.as_str()).collect();
        lines.push(format!("  {} {}", "Specialities:".bright_blue(), names.join(", ")));
    }

    let fees = record
        .fees
        .as_ref()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!("  {} {}", "Fees:".bright_blue(), fees));

    if !record.languages.is_empty() {
        lines.push(format!(
            "  {} {}",
            "Languages:".bright_blue(),
            record.languages.join(", ")
        ));
    }

    if !record.clinic.name.is_empty() {
        let address: Vec<&str> = [
            record.clinic.address.address_line1.as_deref(),
            record.clinic.address.city.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        lines.push(format!(
            "  {} {} {}",
            "Clinic:".bright_blue(),
            record.clinic.name,
            style(address.join(", ")).dim()
        ));
        if let Some(logo) = present(record.clinic.logo_url.as_deref()) {
            lines.push(format!("  {} {}", "Logo:".bright_blue(), style(logo).dim()));
        }
    }

    let mut modes = Vec::new();
    if record.video_consult {
        modes.push("Video Consult".bright_green().to_string());
    }
    if record.in_clinic {
        modes.push("In Clinic".bright_cyan().to_string());
    }
    if !modes.is_empty() {
        lines.push(format!("  {}", modes.join("  ")));
    }

    lines.join("\n")
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

pub fn print_view(view: &DerivedView) {
    if view.is_empty() {
        println!("{}", "No providers match the current filters.".yellow());
        return;
    }

    for record in view.iter() {
        println!("{}", format_record(record));
        println!();
    }
}

/// Summary of the active criteria, e.g. `3 providers · video · sort=fees`
pub fn format_status_bar(state: &FilterState, count: usize) -> String {
    let mut parts = vec![format!(
        "{} provider{}",
        count,
        if count == 1 { "" } else { "s" }
    )];

    if !state.trimmed_search().is_empty() {
        parts.push(format!("\"{}\"", state.trimmed_search()));
    }
    parts.push(state.consult_mode.label().to_string());
    if !state.selected_specialities.is_empty() {
        let names: Vec<&str> = state
            .selected_specialities
            .iter()
            .map(String::as_str)
            .collect();
        parts.push(names.join(", "));
    }
    parts.push(state.sort_key.label().to_string());

    parts.join(" · ")
}

/// Shareable form of an encoded state
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        "(default view)".to_string()
    } else {
        format!("?{}", address)
    }
}

pub fn print_suggestions(suggestions: &SuggestionState) {
    if !suggestions.shows_candidates() {
        return;
    }
    for record in &suggestions.candidates {
        println!("  {} {}", "›".bright_blue(), record.name);
    }
}
