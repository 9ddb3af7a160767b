use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::Feature;
use crate::portal::{BadgeTone, Card, CardBlock, PortalState};

const TEXT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(59, 130, 246);
const ACCENT_SOFT: Color = Color::Rgb(147, 197, 253);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);
const SUCCESS: Color = Color::Rgb(16, 185, 129);
const WARNING: Color = Color::Rgb(234, 179, 8);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub portal: &'a PortalState,
    pub cards: &'a [Card],
    pub selected_card: usize,
    /// Size of the active collection before filtering
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState<'_>) {
    let layout = AppLayout::new(frame.area(), state.portal.sidebar_open());

    if let Some(sidebar_area) = layout.sidebar_area {
        render_sidebar(frame, sidebar_area, state.portal.selected_feature());
    }
    render_search_bar(frame, layout.search_area, state.portal.search_query());
    render_cards(
        frame,
        layout.content_area,
        state.portal.selected_feature(),
        state.cards,
        state.selected_card,
    );
    render_status_bar(frame, layout.status_area, state);
}

fn render_sidebar(frame: &mut Frame, area: Rect, selected: Feature) {
    let items: Vec<ListItem> = Feature::ALL
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            let style = if *feature == selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            let marker = if *feature == selected { "▶" } else { " " };
            ListItem::new(Text::from(vec![
                Line::from(format!("{} F{} {}", marker, idx + 1, feature.title())).style(style),
                Line::from(format!("       {}", feature.description()))
                    .style(Style::default().fg(MUTED)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Career Portal "),
    );

    frame.render_widget(list, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, query: &str) {
    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled("🔍 ", Style::default().fg(MUTED)),
            Span::styled("Search...", Style::default().fg(MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::styled("🔍 ", Style::default().fg(MUTED)),
            Span::styled(query.to_string(), Style::default().fg(TEXT)),
        ])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)),
    );

    frame.render_widget(paragraph, area);
}

fn badge_style(tone: BadgeTone) -> Style {
    let color = match tone {
        BadgeTone::Success => SUCCESS,
        BadgeTone::Warning => WARNING,
        BadgeTone::Danger => ERROR,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Lines for one card, including its frame and optional connector
fn card_lines(card: &Card, selected: bool) -> Vec<Line<'static>> {
    let border = if selected { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) };
    let label = Style::default().fg(MUTED).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(TEXT);

    let mut title = vec![
        Span::styled("│ ", border),
        Span::styled(card.title.clone(), Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
    ];
    if let Some(aside) = &card.aside {
        title.push(Span::raw("  "));
        title.push(Span::styled(aside.clone(), Style::default().fg(ACCENT)));
    }
    if let Some(badge) = &card.badge {
        title.push(Span::raw("  "));
        title.push(Span::styled(format!("[{}]", badge.text), badge_style(badge.tone)));
    }

    let mut lines = vec![Line::from(Span::styled("┌──", border)), Line::from(title)];

    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(subtitle.clone(), Style::default().fg(MUTED)),
        ]));
    }

    for block in &card.blocks {
        match block {
            CardBlock::Field { label: Some(name), value } => lines.push(Line::from(vec![
                Span::styled("│ ", border),
                Span::styled(format!("{} ", name), label),
                Span::styled(value.clone(), body),
            ])),
            CardBlock::Field { label: None, value } => lines.push(Line::from(vec![
                Span::styled("│ ", border),
                Span::styled(value.clone(), body),
            ])),
            CardBlock::Bullets { heading, items } => {
                lines.push(Line::from(vec![
                    Span::styled("│ ", border),
                    Span::styled(heading.to_string(), label),
                ]));
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("│   • ", border),
                        Span::styled(item.clone(), body),
                    ]));
                }
            }
            CardBlock::Chips { heading, items } => {
                if let Some(heading) = heading {
                    lines.push(Line::from(vec![
                        Span::styled("│ ", border),
                        Span::styled(heading.to_string(), label),
                    ]));
                }
                let mut chips = vec![Span::styled("│ ", border)];
                for item in items {
                    chips.push(Span::styled(
                        format!(" {} ", item),
                        Style::default().fg(ACCENT_SOFT).bg(SURFACE),
                    ));
                    chips.push(Span::raw(" "));
                }
                lines.push(Line::from(chips));
            }
        }
    }

    lines.push(Line::from(Span::styled("└──", border)));

    if card.connector {
        lines.push(Line::from(Span::styled("   ┃", Style::default().fg(ACCENT_SOFT))));
        lines.push(Line::from(Span::styled("   ▼", Style::default().fg(ACCENT_SOFT))));
    } else {
        lines.push(Line::from(""));
    }

    lines
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    feature: Feature,
    cards: &[Card],
    selected_idx: usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_offset = 0usize;

    if cards.is_empty() {
        lines.push(Line::from(Span::styled("No matches", Style::default().fg(MUTED))));
    }

    for (idx, card) in cards.iter().enumerate() {
        if idx == selected_idx {
            selected_offset = lines.len();
        }
        lines.extend(card_lines(card, idx == selected_idx));
    }

    let scroll = scroll_offset(selected_offset, area.height.saturating_sub(2));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} ", feature.heading())),
        )
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Rows to scroll so the selected card's top edge sits mid-pane
///
/// Card lines are not wrapped, so one line is one row and `selected_offset`
/// counts rows directly.
fn scroll_offset(selected_offset: usize, inner_height: u16) -> u16 {
    let half = inner_height as usize / 2;
    if inner_height == 0 || selected_offset < half {
        return 0;
    }
    u16::try_from(selected_offset - half).unwrap_or(u16::MAX)
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState<'_>) {
    if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => SUCCESS,
            MessageType::Error => ERROR,
        };
        let paragraph = Paragraph::new(format!(" {} ", message.text))
            .style(Style::default().fg(color).bg(SURFACE));
        frame.render_widget(paragraph, area);
        return;
    }

    let shown = state.cards.len();
    let mut parts = vec![format!("[{}]", state.portal.selected_feature().title())];

    if shown < state.total_count {
        parts.push(format!("{}/{} shown", shown, state.total_count));
    } else {
        parts.push(format!("{} items", state.total_count));
    }

    if shown > 0 {
        parts.push(format!("card {}/{}", state.selected_card.min(shown - 1) + 1, shown));
    }

    parts.push("Tab: next".to_string());
    parts.push("Ctrl+B: sidebar".to_string());
    parts.push("Ctrl+Y: copy".to_string());
    if !state.portal.search_query().is_empty() {
        parts.push("Esc: clear".to_string());
    }
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(TEXT).bg(SURFACE));

    frame.render_widget(paragraph, area);
}
