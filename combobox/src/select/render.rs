//! Rendering for the Select component.
//!
//! The trigger row shows the current value (single mode) or one badge per
//! selected option (multi mode), followed by the clear glyph, a divider
//! and the open/closed caret. While rendering, the hit regions of each
//! clickable part are recorded into component state so pointer events can
//! be routed back to the part under them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::selection::Mode;
use super::state::{HitRegions, Select};

/// Glyph shown on the clear control and on badge remove targets.
const REMOVE_GLYPH: &str = "✕";
/// Width of the trailing " ✕ │ ▼" control cluster, including the gap.
const TRAILING_WIDTH: u16 = 6;

const FOCUS_BG: Color = Color::Rgb(80, 80, 100);

impl Select {
    /// Render the control at `area` (one row for the trigger; the open
    /// dropdown extends below it) and record hit regions for this frame.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let mut regions = HitRegions {
            trigger: Some(Rect { height: 1, ..area }),
            ..HitRegions::default()
        };

        render_trigger(frame, area, self, focused, &mut regions);

        if self.is_open() {
            render_dropdown(frame, area, self, &mut regions);
        }

        self.set_regions(regions);
    }
}

fn base_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .bg(FOCUS_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Render the trigger row: value or badges, then the clear/caret cluster.
fn render_trigger(
    frame: &mut Frame,
    area: Rect,
    select: &Select,
    focused: bool,
    regions: &mut HitRegions,
) {
    if area.width <= TRAILING_WIDTH || area.height == 0 {
        return;
    }

    let style = base_style(focused);
    let content_width = area.width - TRAILING_WIDTH;
    let selection = select.selection();

    let mut spans: Vec<Span> = Vec::new();
    // Display column the next span starts at, relative to area.x.
    let mut used: u16 = 0;

    let selected = selection.selected();
    if selected.is_empty() {
        let placeholder = select.placeholder();
        let text = truncated(&placeholder, content_width);
        used += text.width() as u16;
        spans.push(Span::styled(text, style.add_modifier(Modifier::DIM)));
    } else {
        match selection.mode() {
            Mode::Single => {
                let label = &selected[0].label;
                let text = truncated(label, content_width);
                used += text.width() as u16;
                spans.push(Span::styled(text, style));
            }
            Mode::Multi => {
                for (index, option) in selected.iter().enumerate() {
                    let label_width = option.label.width() as u16;
                    // "[", label, " ", glyph, "]" and a separating space
                    let badge_width = label_width + 4;
                    if used + badge_width > content_width {
                        if used < content_width {
                            spans.push(Span::styled("…", style.add_modifier(Modifier::DIM)));
                            used += 1;
                        }
                        break;
                    }
                    spans.push(Span::styled(format!("[{} ", option.label), style));
                    regions.badges.push((
                        index,
                        Rect {
                            x: area.x + used + 2 + label_width,
                            y: area.y,
                            width: 1,
                            height: 1,
                        },
                    ));
                    spans.push(Span::styled(REMOVE_GLYPH, style.add_modifier(Modifier::DIM)));
                    spans.push(Span::styled("] ", style));
                    used += badge_width + 1;
                }
            }
        }
    }

    // Pad the content out so the focus background covers the full row.
    if used < content_width {
        spans.push(Span::styled(
            " ".repeat((content_width - used) as usize),
            style,
        ));
    }

    // Trailing cluster: clear glyph, divider, caret.
    let trailing_x = area.x + content_width;
    let caret = if select.is_open() { "▲" } else { "▼" };
    let muted = style.add_modifier(Modifier::DIM);
    spans.push(Span::styled(" ", style));
    spans.push(Span::styled(REMOVE_GLYPH, muted));
    spans.push(Span::styled(" │ ", muted));
    spans.push(Span::styled(caret, muted));

    regions.clear = Some(Rect {
        x: trailing_x + 1,
        y: area.y,
        width: 1,
        height: 1,
    });

    let trigger_area = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Line::from(spans)), trigger_area);
}

/// Render the open dropdown below the trigger, one row per option.
fn render_dropdown(frame: &mut Frame, area: Rect, select: &Select, regions: &mut HitRegions) {
    let options = select.options();
    let selection = select.selection();
    let cursor = select.cursor();

    let top = area.y + 1;
    let available = frame.area().height.saturating_sub(top);
    let visible = (options.len() as u16).min(available);
    if visible == 0 {
        return;
    }

    let lines: Vec<Line> = options
        .iter()
        .take(visible as usize)
        .enumerate()
        .map(|(index, option)| {
            let selected = selection.is_selected(option);
            let marker = if selected { "✓ " } else { "  " };
            let mut style = Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 40));
            if selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            if index == cursor {
                style = style.bg(Color::Rgb(90, 90, 140));
            }
            let text = format!("{marker}{}", option.label);
            let pad = (area.width as usize).saturating_sub(text.width());
            Line::from(Span::styled(format!("{text}{}", " ".repeat(pad)), style))
        })
        .collect();

    let dropdown_area = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: visible,
    };
    regions.dropdown = Some(dropdown_area);
    frame.render_widget(Paragraph::new(Text::from(lines)), dropdown_area);
}

/// Truncate a label to a display width, appending an ellipsis when cut.
fn truncated(text: &str, max_width: u16) -> String {
    if text.width() <= max_width as usize {
        return text.to_string();
    }
    let budget = (max_width as usize).saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
