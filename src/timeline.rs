// File: ./src/timeline.rs
//! Timeline layout: turns blocks into rows of positioned markers plus a side panel.
//!
//! The layout is independent of any output surface. The TUI draws it with
//! ratatui and `render_text` prints it for the `print` command.
use crate::model::display::{EventDisplay, format_date};
use crate::model::Block;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Timelike};

pub const DEFAULT_START_HOUR: u32 = 7;
pub const DEFAULT_END_HOUR: u32 = 23;

/// Visible hour range of the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineAxis {
    start_hour: u32,
    end_hour: u32,
}

impl Default for TimelineAxis {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl TimelineAxis {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            anyhow::bail!(
                "Invalid timeline range {}..{}: need start < end <= 24",
                start_hour,
                end_hour
            );
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Fractional offset of `time` along the axis in `[0, 1]`.
    /// The flag is set when the time lies outside the range and was pinned to an edge.
    pub fn position(&self, time: NaiveTime) -> (f32, bool) {
        let hours = time.hour() as f32 + time.minute() as f32 / 60.0;
        let span = (self.end_hour - self.start_hour) as f32;
        let raw = (hours - self.start_hour as f32) / span;
        if raw < 0.0 {
            (0.0, true)
        } else if raw > 1.0 {
            (1.0, true)
        } else {
            (raw, false)
        }
    }
}

/// Maps an axis offset onto one of `width` character cells.
pub fn column_for(offset: f32, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = (width - 1) as f32;
    (offset.clamp(0.0, 1.0) * last).round() as u16
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// 1-based position of the event inside its block; matches the panel numbering.
    pub index: usize,
    pub label: String,
    pub offset: f32,
    pub clamped: bool,
    pub time: NaiveTime,
    pub link: Option<String>,
    pub event_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidePanel {
    pub heading: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow {
    pub rank: u32,
    pub date: Option<NaiveDate>,
    pub markers: Vec<Marker>,
    pub panel: SidePanel,
}

impl TimelineRow {
    pub fn title(&self) -> String {
        format!(" {} · {} ", self.panel.heading, format_date(self.date))
    }
}

/// One marker per timed event, and a panel entry for every event.
/// Events without a time cannot be placed on the axis but stay listed.
pub fn layout_block(block: &Block, axis: &TimelineAxis) -> TimelineRow {
    let mut markers = Vec::new();
    let mut entries = Vec::with_capacity(block.len());

    for (i, ev) in block.events.iter().enumerate() {
        let index = i + 1;
        entries.push(format!("{}. {}", index, ev.to_panel_entry()));

        if let Some(time) = ev.time {
            let (offset, clamped) = axis.position(time);
            markers.push(Marker {
                index,
                label: format!("Event {}", index),
                offset,
                clamped,
                time,
                link: ev.source_link.clone(),
                event_id: ev.id.clone(),
            });
        }
    }

    TimelineRow {
        rank: block.rank,
        date: block.date,
        markers,
        panel: SidePanel {
            heading: block.heading(),
            entries,
        },
    }
}

pub fn layout_blocks(blocks: &[Block], axis: &TimelineAxis) -> Vec<TimelineRow> {
    blocks.iter().map(|b| layout_block(b, axis)).collect()
}

fn write_at(line: &mut [char], col: usize, text: &str) -> bool {
    let len = text.chars().count();
    if col + len > line.len() || line[col..col + len].iter().any(|c| *c != ' ') {
        return false;
    }
    for (slot, ch) in line[col..col + len].iter_mut().zip(text.chars()) {
        *slot = ch;
    }
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLabel {
    /// Index into the row's marker list.
    pub marker: usize,
    pub column: u16,
    pub text: String,
}

/// Positions marker labels under the track, left to right.
/// A label that would overlap an earlier one, or run past the edge, is dropped.
/// `short` uses `E<n>` instead of `Event <n>`.
pub fn place_labels(markers: &[Marker], width: u16, short: bool) -> Vec<PlacedLabel> {
    let cells = width as usize;
    let mut line = vec![' '; cells];
    let mut placed = Vec::new();

    let mut order: Vec<usize> = (0..markers.len()).collect();
    order.sort_by(|a, b| markers[*a].offset.total_cmp(&markers[*b].offset));

    for idx in order {
        let m = &markers[idx];
        let text = if short {
            format!("E{}", m.index)
        } else {
            m.label.clone()
        };
        let len = text.chars().count();
        if len > cells {
            continue;
        }
        let col = (column_for(m.offset, width) as usize).min(cells - len);
        if write_at(&mut line, col, &text) {
            placed.push(PlacedLabel {
                marker: idx,
                column: col as u16,
                text,
            });
        }
    }
    placed
}

/// Plain-text rendering: for each row a heading, the hour scale, the track
/// with one `|` per marker, short `E<n>` labels, then the enumerated panel.
pub fn render_text(rows: &[TimelineRow], axis: &TimelineAxis, width: u16) -> String {
    let width = width.max(20);
    let cells = width as usize;
    let mut out = String::new();

    for row in rows {
        out.push_str(&format!("=={}==\n", row.title()));

        let mut scale = vec![' '; cells];
        write_at(&mut scale, 0, &format!("{:02}:00", axis.start_hour()));
        let end = format!("{:02}:00", axis.end_hour());
        write_at(&mut scale, cells - end.len(), &end);
        out.push_str(scale.iter().collect::<String>().trim_end());
        out.push('\n');

        let mut track = vec!['-'; cells];
        for m in &row.markers {
            track[column_for(m.offset, width) as usize] = '|';
        }
        let mut labels = vec![' '; cells];
        for placed in place_labels(&row.markers, width, true) {
            write_at(&mut labels, placed.column as usize, &placed.text);
        }
        out.push_str(&track.iter().collect::<String>());
        out.push('\n');
        let labels: String = labels.iter().collect();
        if !labels.trim().is_empty() {
            out.push_str(labels.trim_end());
            out.push('\n');
        }

        for entry in &row.panel.entries {
            out.push_str("  ");
            out.push_str(entry);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
