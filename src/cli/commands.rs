use std::fmt::Write as _;

use anyhow::{Context, Result, bail};

use super::Commands;
use crate::assistant::synthesize;
use crate::clipboard::copy_to_clipboard;
use crate::config::AppConfig;
use crate::directory::{
    ContactChannel, SystemLauncher, contact_target, find_provider, open_contact, query_providers,
    seed_providers,
};
use crate::models::{AnswerResult, CategoryFilter, ServiceProvider, SortKey};
use crate::utils::sanitize_for_display;

pub fn execute(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Ask { query, json } => ask(&query.join(" "), json),
        Commands::Providers { search, category, sort, json } => list_providers(
            search.as_deref().unwrap_or(""),
            category,
            sort.unwrap_or(config.directory.default_sort),
            json,
        ),
        Commands::Provider { id } => show_provider(&id),
        Commands::Contact { id, channel, copy } => contact(&id, channel, copy),
    }
}

fn ask(query: &str, json: bool) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Question must not be empty");
    }

    let result = synthesize(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&result).context("Failed to encode answer")?);
    } else {
        print!("{}", format_answer(query, &result));
    }
    Ok(())
}

fn list_providers(search: &str, category: CategoryFilter, sort: SortKey, json: bool) -> Result<()> {
    let providers = query_providers(&seed_providers(), search, category, sort);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&providers).context("Failed to encode providers")?
        );
        return Ok(());
    }

    if providers.is_empty() {
        println!("No providers found. Try adjusting your search or filters.");
        return Ok(());
    }

    println!("{} providers ({}, sorted by {})", providers.len(), category, sort);
    for provider in &providers {
        println!("{}", format_provider_row(provider));
    }
    Ok(())
}

fn show_provider(id: &str) -> Result<()> {
    let providers = seed_providers();
    let provider = find_provider(&providers, id)
        .with_context(|| format!("No provider with id '{}'", id))?;
    print!("{}", format_provider_detail(provider));
    Ok(())
}

fn contact(id: &str, channel: ContactChannel, copy: bool) -> Result<()> {
    let providers = seed_providers();
    let provider = find_provider(&providers, id)
        .with_context(|| format!("No provider with id '{}'", id))?;

    if copy {
        let target = contact_target(provider, channel)
            .with_context(|| format!("{} has no {} contact", provider.name, channel))?;
        copy_to_clipboard(&target)?;
        println!("Copied {} to clipboard", target);
    } else {
        let target = open_contact(&mut SystemLauncher, provider, channel)
            .with_context(|| format!("Unable to open {} for {}", channel, provider.name))?;
        println!("Opened {}", target);
    }
    Ok(())
}

pub fn format_answer(query: &str, result: &AnswerResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Q: {}", sanitize_for_display(query));
    let _ = writeln!(out, "Topic: {}", result.topic.label());
    let _ = writeln!(out);
    // Plain output drops the bold markers
    let _ = writeln!(out, "{}", result.answer_text.replace("**", ""));
    let _ = writeln!(out);
    let _ = writeln!(out, "Sources:");
    for source in &result.source_list {
        let _ = writeln!(out, "  - {}", source);
    }
    let _ = writeln!(out, "Related questions:");
    for suggestion in &result.suggestion_list {
        let _ = writeln!(out, "  - {}", suggestion);
    }
    let _ = writeln!(out, "Confidence: {:.0}%", result.confidence_score * 100.0);
    out
}

pub fn format_provider_row(provider: &ServiceProvider) -> String {
    format!(
        "[{}] {:<28} {:<22} {:>5.1} mi  {:.1}/5 ({})  {}",
        provider.id,
        provider.name,
        provider.service_type.label(),
        provider.distance,
        provider.rating,
        provider.review_count,
        provider.price_range,
    )
}

pub fn format_provider_detail(provider: &ServiceProvider) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", provider.name, provider.service_type);
    let _ = writeln!(
        out,
        "{:.1}/5 from {} reviews | {} | {:.1} mi away | {} years experience",
        provider.rating,
        provider.review_count,
        provider.price_range,
        provider.distance,
        provider.years_experience
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", provider.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Location:     {}", provider.location);
    let _ = writeln!(out, "Availability: {}", provider.availability);
    let _ = writeln!(out, "Phone:        {}", provider.phone);
    let _ = writeln!(out, "Email:        {}", provider.email);
    if let Some(website) = &provider.website {
        let _ = writeln!(out, "Website:      {}", website);
    }
    if !provider.specialties.is_empty() {
        let _ = writeln!(out, "Specialties:  {}", provider.specialties.join(", "));
    }
    if !provider.certifications.is_empty() {
        let _ = writeln!(out, "Certified:    {}", provider.certifications.join(", "));
    }
    if !provider.reviews.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Reviews:");
        for review in &provider.reviews {
            let _ = writeln!(
                out,
                "  {}/5  {} ({}): {}",
                review.rating,
                review.user_name,
                review.date.format("%b %-d, %Y"),
                review.comment
            );
        }
    }
    out
}
