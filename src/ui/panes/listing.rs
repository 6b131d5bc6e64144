//! Listing pane rendering
//!
//! Shows every recorded statement with light syntax highlighting and keeps the
//! statement of the current snapshot at a fixed row while stepping.

use super::{border_style, clamp_scroll};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlight one listing line
fn highlight_statement(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            let is_func = c == '(';
            spans.push(Span::styled(&line[start..i], word_style(&line[start..i], is_func)));
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
            '*' | '&' => Style::default().fg(DEFAULT_THEME.address),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }

    if let Some(start) = word_start {
        spans.push(Span::styled(&line[start..], word_style(&line[start..], false)));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" => Style::default().fg(DEFAULT_THEME.type_name),
        "new" | "nullptr" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the listing pane
#[derive(Debug, Default)]
pub struct ListingScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the listing pane. `current_line` is 0-based.
pub fn render_listing_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &[String],
    current_line: usize,
    is_focused: bool,
    scroll_state: &mut ListingScrollState,
) {
    let block = Block::default()
        .title(" Walkthrough ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Start with the current line centered; arrow keys move it from there
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    scroll_state.offset = current_line.saturating_sub(target_row);
    clamp_scroll(&mut scroll_state.offset, listing.len(), visible_height);

    let visible_lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = idx == current_line;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_statement(line);
            if is_current {
                let current_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(current_bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", idx + 1), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_keeps_every_character() {
        let line = "    int* result = new int{};";
        let rendered: String = highlight_statement(line)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(rendered, line);
    }

    #[test]
    fn function_names_are_highlighted() {
        let line = highlight_statement("swap(a, b);");
        assert_eq!(line.spans[0].content, "swap");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.function));
    }
}
