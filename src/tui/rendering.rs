use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use super::app::{App, AssistantChoice, MessageType, Tab};
use super::form::{EntryForm, FormField};
use super::layout::{AppLayout, centered, input_and_body, list_and_detail};
use super::timestamps::{format_age, format_date};
use crate::assistant::HISTORY_LIMIT;
use crate::models::{AnswerResult, ServiceProvider, TrainingEntry};
use crate::utils::{display_path, sanitize_for_display, truncate_line};

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(format!(" {} ", title))
}

fn highlight() -> Style {
    Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
}

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{}: ", text), Style::default().fg(MUTED))
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().add_modifier(Modifier::BOLD)))
}

/// Render `**bold**` segments of a line of answer text
fn emphasis_line(line: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 1 {
                Span::styled(part.to_string(), Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::raw(part.to_string())
            }
        })
        .collect();
    Line::from(spans)
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, layout.tabs_area, app.tab);
    match app.tab {
        Tab::Assistant => render_assistant(frame, layout.main_area, app),
        Tab::TrainingLog => render_training_log(frame, layout.main_area, app),
        Tab::Providers => render_providers(frame, layout.main_area, app),
        Tab::Profile => render_profile(frame, layout.main_area, app),
    }
    render_status_bar(frame, layout.status_area, app);

    if let Some(form) = &app.form {
        render_entry_form(frame, form);
    } else if let Some(entry) = &app.pending_delete {
        render_delete_confirmation(frame, entry);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, current: Tab) {
    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .select(current.index())
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(panel("🐾 Dog Training Assistant"));
    frame.render_widget(tabs, area);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, placeholder: &str) {
    let line = if value.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(MUTED)))
    } else {
        Line::from(vec![Span::raw(value.to_string()), Span::styled("▏", Style::default().fg(ACCENT))])
    };
    frame.render_widget(Paragraph::new(line).block(panel(title)), area);
}

// Assistant

fn render_assistant(frame: &mut Frame, area: Rect, app: &App) {
    let (input_area, body) = input_and_body(area);
    render_input(
        frame,
        input_area,
        "Ask a training question",
        app.session.query(),
        "e.g. How do I stop my puppy biting?",
    );

    let (answer_area, choices_area) = list_and_detail(body);
    let answer = if app.session.is_loading() {
        Text::from(vec![
            Line::from(Span::styled("Searching training research…", Style::default().fg(ACCENT))),
            Line::from(""),
            Line::from(Span::styled("Esc to cancel", Style::default().fg(MUTED))),
        ])
    } else if let Some(result) = app.session.result() {
        answer_text(result)
    } else {
        Text::from(vec![
            heading("Research-backed answers to your training questions"),
            Line::from(""),
            Line::from("Type a question and press Enter, or pick an example on the right."),
        ])
    };
    let paragraph = Paragraph::new(answer).block(panel("Answer")).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, answer_area);

    let title = if app.session.result().is_some() {
        "Related questions"
    } else {
        "Examples & recent searches"
    };
    let now = Utc::now();
    let items: Vec<ListItem> = app
        .assistant_choices()
        .iter()
        .map(|choice| match choice {
            AssistantChoice::Suggestion(text) => ListItem::new(format!("→ {}", text)),
            AssistantChoice::Example(text) => ListItem::new(format!("? {}", text)),
            AssistantChoice::Recent { query, timestamp } => ListItem::new(Line::from(vec![
                Span::raw(format!("↺ {} ", sanitize_for_display(query))),
                Span::styled(format_age(timestamp, &now), Style::default().fg(MUTED)),
            ])),
        })
        .collect();
    let list = List::new(items).block(panel(title)).highlight_style(highlight());
    let mut state = ListState::default().with_selected(app.assistant_selected);
    frame.render_stateful_widget(list, choices_area, &mut state);
}

fn answer_text(result: &AnswerResult) -> Text<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(result.topic.label().to_string(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  confidence {:.0}%", result.confidence_score * 100.0),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(result.answer_text.lines().map(emphasis_line));
    lines.push(Line::from(""));
    lines.push(heading("Sources"));
    lines.extend(result.source_list.iter().map(|s| Line::from(format!("• {}", s))));
    Text::from(lines)
}

// Training log

fn render_training_log(frame: &mut Frame, area: Rect, app: &App) {
    let [summary_area, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    let counts = app.log.summary_counts();
    let summary = Line::from(vec![
        label("Sessions"),
        Span::raw(format!("{}   ", counts.total)),
        label("High"),
        Span::raw(format!("{}   ", counts.high)),
        label("Medium"),
        Span::raw(format!("{}   ", counts.medium)),
        label("Low"),
        Span::raw(format!("{}   ", counts.low)),
        label("Showing"),
        Span::styled(app.success_filter.label().to_string(), Style::default().fg(ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(summary).block(panel("Progress")), summary_area);

    let (list_area, detail_area) = list_and_detail(body);
    let entries = app.visible_entries();
    let today = Utc::now().date_naive();

    if entries.is_empty() {
        let message = if app.log.is_empty() {
            "No training sessions yet. Press Ctrl+N to log one.".to_string()
        } else {
            format!("No sessions with {} success.", app.success_filter.label())
        };
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(MUTED)))
            .block(panel("Sessions"))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                ListItem::new(format!(
                    "{:<10} {} · {} · {}",
                    format_date(entry.date, today),
                    truncate_line(&sanitize_for_display(&entry.dog_name), 16),
                    truncate_line(&sanitize_for_display(&entry.activity), 24),
                    entry.success.label()
                ))
            })
            .collect();
        let list = List::new(items).block(panel("Sessions")).highlight_style(highlight());
        let mut state = ListState::default().with_selected(Some(app.log_idx));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    let detail = match entries.get(app.log_idx) {
        Some(entry) => entry_detail(entry),
        None => Text::from("No entry selected"),
    };
    frame.render_widget(
        Paragraph::new(detail).block(panel("Details")).wrap(Wrap { trim: false }),
        detail_area,
    );
}

fn entry_detail(entry: &TrainingEntry) -> Text<'static> {
    let mut lines = vec![
        Line::from(vec![label("Dog"), Span::raw(sanitize_for_display(&entry.dog_name))]),
        Line::from(vec![label("Activity"), Span::raw(sanitize_for_display(&entry.activity))]),
        Line::from(vec![label("Date"), Span::raw(entry.date.format("%b %-d, %Y").to_string())]),
        Line::from(vec![label("Success"), Span::raw(entry.success.label())]),
    ];
    if !entry.duration.is_empty() {
        lines.push(Line::from(vec![label("Duration"), Span::raw(sanitize_for_display(&entry.duration))]));
    }
    if !entry.notes.is_empty() {
        lines.push(Line::from(""));
        lines.extend(sanitize_for_display(&entry.notes).lines().map(|l| Line::from(l.to_string())));
    }
    for (title, value) in [("Goals", &entry.goals), ("Next steps", &entry.next_steps)] {
        if let Some(value) = value {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![label(title), Span::raw(sanitize_for_display(value))]));
        }
    }
    if !entry.photos.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Photos"));
        lines.extend(entry.photos.iter().map(|p| Line::from(format!("• {}", display_path(&p.0)))));
    }
    Text::from(lines)
}

fn render_entry_form(frame: &mut Frame, form: &EntryForm) {
    let area = centered(64, FormField::ALL.len() as u16 + 5, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let focused = field == form.focus();
            let value = if field.is_text() {
                form.value(field).to_string()
            } else {
                format!("‹ {} ›", form.value(field))
            };
            let marker = if focused { "▸ " } else { "  " };
            let style = if focused { Style::default().fg(ACCENT) } else { Style::default() };
            Line::from(vec![
                Span::styled(format!("{}{:<12}", marker, field.label()), style),
                Span::raw(value),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab/↑↓ field · ←/→ choose · Enter save · Esc cancel",
        Style::default().fg(MUTED),
    )));

    let paragraph = Paragraph::new(lines)
        .block(panel("New training session").border_style(Style::default().fg(ACCENT)));
    frame.render_widget(paragraph, area);
}

fn render_delete_confirmation(frame: &mut Frame, entry: &TrainingEntry) {
    let area = centered(56, 5, frame.area());
    frame.render_widget(Clear, area);
    let text = Text::from(vec![
        Line::from(format!(
            "Delete {} for {}?",
            sanitize_for_display(&entry.activity),
            sanitize_for_display(&entry.dog_name)
        )),
        Line::from(Span::styled("Enter/y: delete · Esc/n: keep", Style::default().fg(MUTED))),
    ]);
    let paragraph = Paragraph::new(text)
        .block(panel("Delete entry").border_style(Style::default().fg(ERROR)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

// Providers

fn render_providers(frame: &mut Frame, area: Rect, app: &App) {
    let (input_area, body) = input_and_body(area);
    let title = format!("Search · {} (Ctrl+F) · by {} (Ctrl+S)", app.category, app.sort_key);
    render_input(frame, input_area, &title, &app.provider_search, "Name, specialty or service");

    let (list_area, detail_area) = list_and_detail(body);
    if app.visible_providers.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No providers found. Try adjusting your search or filters.",
            Style::default().fg(MUTED),
        ))
        .block(panel("Providers"))
        .wrap(Wrap { trim: true });
        frame.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = app
            .visible_providers
            .iter()
            .map(|p| {
                ListItem::new(format!(
                    "{:<28} {:>4.1} mi  ★ {:.1}  {}",
                    p.name, p.distance, p.rating, p.price_range
                ))
            })
            .collect();
        let title = format!("Providers ({})", app.visible_providers.len());
        let list = List::new(items).block(panel(&title)).highlight_style(highlight());
        let mut state = ListState::default().with_selected(Some(app.provider_idx));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    let detail = match app.selected_provider() {
        Some(provider) => provider_detail(provider, app.show_provider_detail),
        None => Text::from("No provider selected"),
    };
    frame.render_widget(
        Paragraph::new(detail).block(panel("Details")).wrap(Wrap { trim: false }),
        detail_area,
    );
}

fn provider_detail(provider: &ServiceProvider, full: bool) -> Text<'static> {
    let mut lines = vec![
        heading(&provider.name),
        Line::from(Span::styled(provider.service_type.label(), Style::default().fg(ACCENT))),
        Line::from(format!(
            "★ {:.1} ({} reviews) · {} · {:.1} mi",
            provider.rating, provider.review_count, provider.price_range, provider.distance
        )),
        Line::from(""),
        Line::from(provider.description.clone()),
        Line::from(""),
        Line::from(vec![label("Location"), Span::raw(provider.location.clone())]),
        Line::from(vec![label("Hours"), Span::raw(provider.availability.clone())]),
        Line::from(vec![label("Phone"), Span::raw(provider.phone.clone())]),
        Line::from(vec![label("Email"), Span::raw(provider.email.clone())]),
    ];
    if let Some(website) = &provider.website {
        lines.push(Line::from(vec![label("Website"), Span::raw(website.clone())]));
    }

    if !full {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Enter for reviews and more", Style::default().fg(MUTED))));
        return Text::from(lines);
    }

    lines.push(Line::from(vec![
        label("Experience"),
        Span::raw(format!("{} years", provider.years_experience)),
    ]));
    if !provider.specialties.is_empty() {
        lines.push(Line::from(vec![label("Specialties"), Span::raw(provider.specialties.join(", "))]));
    }
    if !provider.certifications.is_empty() {
        lines.push(Line::from(vec![
            label("Certifications"),
            Span::raw(provider.certifications.join(", ")),
        ]));
    }
    if !provider.reviews.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Reviews"));
        for review in &provider.reviews {
            lines.push(Line::from(vec![
                Span::styled("★".repeat(review.rating as usize), Style::default().fg(ACCENT)),
                Span::raw(format!(" {} · {}", review.user_name, review.date.format("%b %-d, %Y"))),
            ]));
            lines.push(Line::from(format!("  {}", review.comment)));
        }
    }
    Text::from(lines)
}

// Profile

fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    let counts = app.log.summary_counts();
    let lines = vec![
        heading("Dog Trainer"),
        Line::from(Span::styled("trainer@dogtraining.com", Style::default().fg(MUTED))),
        Line::from(""),
        heading("Your progress"),
        Line::from(format!(
            "{} sessions logged: {} high, {} medium, {} low success",
            counts.total, counts.high, counts.medium, counts.low
        )),
        Line::from(format!(
            "{} of the last {} searches kept this session",
            app.session.history().len(),
            HISTORY_LIMIT
        )),
        Line::from(""),
        heading("About this app"),
        Line::from("• Research-backed training advice tailored to your situation"),
        Line::from("• Training log to track sessions and monitor improvement"),
        Line::from("• Related questions and suggestions after every answer"),
        Line::from("• Directory of local trainers, groomers, walkers and daycares"),
        Line::from(""),
        Line::from(Span::styled(
            "This app provides general guidance. Always consult a professional dog trainer \
             for specific behavioral issues.",
            Style::default().fg(MUTED),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(panel("Profile")).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    if app.form.is_some() {
        return "Enter: save | Esc: cancel | Ctrl+C: quit";
    }
    if app.pending_delete.is_some() {
        return "Enter/y: delete | Esc/n: keep";
    }
    match app.tab {
        Tab::Assistant => {
            "Enter: ask/pick | ↑↓: choose | Esc: cancel/clear | Ctrl+Y: copy | Ctrl+L: clear history | Tab: next"
        }
        Tab::TrainingLog => {
            "Ctrl+N: new | Ctrl+D: delete | Ctrl+F: filter | ↑↓: select | Tab: next | Ctrl+C: quit"
        }
        Tab::Providers => {
            "Enter: details | Ctrl+T: call | Ctrl+E: email | Ctrl+W: website | Ctrl+Y: copy | Ctrl+F/S: filter/sort"
        }
        Tab::Profile => "Tab: next | Shift+Tab: previous | Ctrl+C: quit",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.status_message {
        Some(msg) => {
            let color = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), Style::default().fg(color).bg(BAR_BG))
        }
        None => (format!(" {} ", key_hints(app)), Style::default().fg(BRIGHT).bg(BAR_BG)),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}
