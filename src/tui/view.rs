// File: src/tui/view.rs
use crate::color_utils;
use crate::timeline::{TimelineRow, column_for, place_labels};
use crate::tui::state::{AppState, HitRegion};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MIN_ROW_HEIGHT: u16 = 5;
const MAX_ROW_HEIGHT: u16 = 10;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn row_height(row: &TimelineRow) -> u16 {
    (row.panel.entries.len() as u16 + 2).clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT)
}

fn help_lines() -> Vec<Line<'static>> {
    let section = |name: &'static str, color: Color| {
        Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };
    vec![
        Line::from(vec![
            section(" GLOBAL ", Color::Cyan),
            Span::raw(" ?:Toggle Help  r:Reload  q:Quit"),
        ]),
        Line::from(vec![
            section(" NAVIGATION ", Color::Yellow),
            Span::raw(" j/k:Block Up/Down  h/l:Prev/Next Event  [/]:Prev/Next Day"),
        ]),
        Line::from(vec![
            section(" EVENTS ", Color::Green),
            Span::raw(" Enter/o:Open Source Link  Click:Open Event Under Cursor"),
        ]),
    ]
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help = help_lines();
    let footer_height = if state.show_full_help {
        Constraint::Length(full_help.len() as u16 + 3)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), footer_height])
        .split(f.area());

    draw_header(f, state, v_chunks[0]);
    draw_rows(f, state, v_chunks[1]);
    draw_footer(f, state, v_chunks[2], full_help);
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect) {
    let position = if state.dates.is_empty() {
        String::new()
    } else {
        format!("  (day {}/{})", state.date_idx + 1, state.dates.len())
    };
    let header = Line::from(vec![
        Span::raw(" ◀ "),
        Span::styled(
            state.current_date_label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ▶"),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_rows(f: &mut Frame, state: &mut AppState, area: Rect) {
    state.hit_regions.clear();

    if state.rows.is_empty() {
        let p = Paragraph::new("No events for this day.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    }

    let heights: Vec<u16> = state.rows.iter().map(row_height).collect();
    state.ensure_visible(&heights, area.height);

    let mut y = area.y;
    for idx in state.row_offset..state.rows.len() {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < MIN_ROW_HEIGHT {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, heights[idx].min(remaining));
        draw_row(f, state, idx, row_area);
        y += row_area.height;
    }
}

fn draw_row(f: &mut Frame, state: &mut AppState, idx: usize, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
        .split(area);

    let row = &state.rows[idx];
    let is_selected_row = idx == state.selected_row;
    let fallback = state.store.table().fallback_rank();
    let rank_color = rgb(color_utils::rank_color(row.rank, fallback));
    let heading_color = rgb(color_utils::category_color(&row.panel.heading));

    let border_style = if is_selected_row {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    // --- Track ---
    let track_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" #{} ", row.rank),
            Style::default().fg(rank_color),
        ));
    let inner = track_block.inner(chunks[0]);
    f.render_widget(track_block, chunks[0]);

    let width = inner.width;
    let cells = width as usize;

    let start = format!("{:02}:00", state.axis.start_hour());
    let end = format!("{:02}:00", state.axis.end_hour());
    let gap = cells.saturating_sub(start.len() + end.len());
    let scale = Line::from(Span::styled(
        format!("{}{}{}", start, " ".repeat(gap), end),
        Style::default().fg(Color::DarkGray),
    ));

    // Every marker landing in a column, in order; the glyph shows the
    // selected one when it is part of the stack, else the first.
    let mut marker_cols: Vec<Vec<usize>> = vec![Vec::new(); cells];
    for (m_idx, m) in row.markers.iter().enumerate() {
        let col = column_for(m.offset, width) as usize;
        if col < cells {
            marker_cols[col].push(m_idx);
        }
    }
    let mut track: Vec<Span> = Vec::with_capacity(cells);
    for stack in &marker_cols {
        let span = match stack.first() {
            Some(first) => {
                let selected_here = is_selected_row && stack.contains(&state.selected_marker);
                let shown = if selected_here { state.selected_marker } else { *first };
                let glyph = if stack.len() > 1 {
                    "║"
                } else if row.markers[shown].clamped {
                    "╎"
                } else {
                    "│"
                };
                let mut style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
                if selected_here {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(glyph, style)
            }
            None => Span::styled("─", Style::default().fg(rank_color)),
        };
        track.push(span);
    }

    let placed = place_labels(&row.markers, width, width < 60);
    let mut label_spans: Vec<Span> = Vec::new();
    let mut cursor = 0usize;
    for label in &placed {
        let col = label.column as usize;
        if col > cursor {
            label_spans.push(Span::raw(" ".repeat(col - cursor)));
        }
        let mut style = Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
        if is_selected_row && label.marker == state.selected_marker {
            style = style.fg(Color::Yellow);
        }
        label_spans.push(Span::styled(label.text.clone(), style));
        cursor = col + label.text.chars().count();
    }

    let lines = vec![scale, Line::from(track), Line::from(label_spans)];
    f.render_widget(Paragraph::new(lines), inner);

    // --- Click targets: the tick itself and its label ---
    let mut regions = Vec::new();
    if inner.height >= 2 {
        for (col, stack) in marker_cols.iter().enumerate() {
            if stack.is_empty() {
                continue;
            }
            regions.push(HitRegion {
                area: Rect::new(inner.x + col as u16, inner.y + 1, 1, 1),
                row: idx,
                markers: stack.clone(),
            });
        }
    }
    if inner.height >= 3 {
        for label in &placed {
            regions.push(HitRegion {
                area: Rect::new(
                    inner.x + label.column,
                    inner.y + 2,
                    label.text.chars().count() as u16,
                    1,
                ),
                row: idx,
                markers: vec![label.marker],
            });
        }
    }

    // --- Side panel ---
    let panel_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", row.panel.heading),
            Style::default()
                .fg(heading_color)
                .add_modifier(Modifier::BOLD),
        ));
    let panel_width = panel_block.inner(chunks[1]).width as usize;
    let items: Vec<ListItem> = row
        .panel
        .entries
        .iter()
        .map(|e| ListItem::new(truncate_to_width(e, panel_width)))
        .collect();
    f.render_widget(List::new(items).block(panel_block), chunks[1]);

    state.hit_regions.extend(regions);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect, full_help: Vec<Line<'static>>) {
    let mut lines = Vec::new();

    let detail = state.selected_detail().unwrap_or_default();
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", state.message),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(detail),
    ]));

    if state.show_full_help {
        lines.extend(full_help);
    }

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help [?] "),
    );
    f.render_widget(footer, area);
}
