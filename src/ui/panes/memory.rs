//! Memory pane rendering
//!
//! One row per variable of the current frame:
//!
//! ```text
//! 0x0004  int   aval = 6
//! 0x000c  int*  a    = → 0x0004 (aval)
//! 0x0004  int&  ref  ≡ a = 6
//! ```
//!
//! Heap slots are grouped below the stack slots.

use super::border_style;
use crate::memory::stack::{Region, VarView};
use crate::memory::value::Value;
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn value_spans<'a>(value: &Value, vars: &'a [VarView]) -> Vec<Span<'a>> {
    match value {
        Value::Int(n) => vec![
            Span::styled("= ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(n.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ],
        Value::Pointer(address) => {
            // Name the pointee, skipping references that share its address
            let target = vars
                .iter()
                .find(|v| v.address == *address && matches!(v.value, Value::Int(_)))
                .map(|v| v.name.as_str())
                .unwrap_or("?");
            vec![
                Span::styled("= → ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("0x{:04x}", address),
                    Style::default().fg(DEFAULT_THEME.address),
                ),
                Span::styled(format!(" ({})", target), Style::default().fg(DEFAULT_THEME.comment)),
            ]
        }
        Value::Null => vec![
            Span::styled("= ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                "nullptr",
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD),
            ),
        ],
        Value::Alias { referent, value } => vec![
            Span::styled("≡ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(referent.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ],
    }
}

fn var_item<'a>(var: &'a VarView, vars: &'a [VarView], name_width: usize) -> ListItem<'a> {
    let mut spans = vec![
        Span::styled(
            format!("0x{:04x}  ", var.address),
            Style::default().fg(DEFAULT_THEME.address),
        ),
        Span::styled(
            format!("{:<5} ", var.value.type_name()),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::styled(
            format!("{:<width$} ", var.name, width = name_width),
            Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
        ),
    ];
    spans.extend(value_spans(&var.value, vars));
    ListItem::new(Line::from(spans))
}

/// Render the memory pane for `snapshot`
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match snapshot {
        Some(s) => format!(" Memory: {}() ", s.function_name),
        None => " Memory ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut items = Vec::new();
    match snapshot {
        Some(snapshot) if !snapshot.vars.is_empty() => {
            let vars = &snapshot.vars;
            let name_width = vars.iter().map(|v| v.name.len()).max().unwrap_or(0);

            for region in [Region::Stack, Region::Heap] {
                let in_region: Vec<&VarView> = vars.iter().filter(|v| v.region == region).collect();
                if in_region.is_empty() {
                    continue;
                }
                let header = match region {
                    Region::Stack => "▸ Stack",
                    Region::Heap => "▸ Heap",
                };
                items.push(ListItem::new(Line::from(Span::styled(
                    header,
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ))));
                for var in in_region {
                    items.push(var_item(var, vars, name_width));
                }
            }
        }
        _ => {
            items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    super::clamp_scroll(scroll_offset, items.len(), visible_height);

    let visible: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();
    frame.render_widget(List::new(visible).block(block), area);
}
