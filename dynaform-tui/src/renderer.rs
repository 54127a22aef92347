//! Field rendering: one draw call per field descriptor.
//!
//! The renderer is stateless. It is handed the descriptor, the current
//! value, and the shell's focus/highlight/cursor, and draws the matching
//! input control; value changes flow back through the shell's event loop.

use dynaform_core::{FieldDescriptor, FieldKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::theme::Theme;

/// Placeholder row shown before the options of a choice field.
pub(crate) const CHOICE_PLACEHOLDER: &str = "Select";

/// Rows needed to draw a field, borders included.
pub(crate) fn field_height(field: &FieldDescriptor) -> u16 {
    match field.kind() {
        // One row per option plus the placeholder row.
        FieldKind::Choice(choice) => 3 + choice.len() as u16,
        _ => 3,
    }
}

/// Draw one field into `area`.
///
/// `highlight` is the shell's option highlight for choice fields and
/// `cursor` its character index for text-like fields; both are only
/// consulted when `focused` is true.
pub(crate) fn draw_field(
    frame: &mut Frame,
    field: &FieldDescriptor,
    value: &str,
    area: Rect,
    focused: bool,
    highlight: usize,
    cursor: usize,
    theme: &Theme,
) {
    let title = if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { theme.primary } else { theme.border }))
        .title(title)
        .title_style(Style::default().fg(if focused { theme.highlight } else { theme.text }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match field.kind() {
        FieldKind::Text | FieldKind::Number | FieldKind::Email => {
            let text = Paragraph::new(value.to_string()).style(Style::default().fg(theme.text));
            frame.render_widget(text, inner);
            if focused {
                set_cursor(frame, inner, cursor);
            }
        }
        FieldKind::Password => {
            let masked = "●".repeat(value.chars().count());
            let text = Paragraph::new(masked).style(Style::default().fg(theme.text));
            frame.render_widget(text, inner);
            if focused {
                set_cursor(frame, inner, cursor);
            }
        }
        FieldKind::Choice(choice) => {
            let rows = std::iter::once(CHOICE_PLACEHOLDER)
                .chain(choice.options().iter().map(String::as_str));
            let items: Vec<ListItem> = rows
                .enumerate()
                .map(|(idx, option)| {
                    // Row 0 is the placeholder; it reads as selected while
                    // the value is empty.
                    let selected = if idx == 0 {
                        value.is_empty()
                    } else {
                        value == option
                    };
                    let marker = if selected { "(●)" } else { "( )" };
                    let is_highlighted = focused && idx == highlight;
                    let style = if is_highlighted {
                        Style::default()
                            .fg(theme.text)
                            .bg(theme.selected_bg)
                            .add_modifier(Modifier::BOLD)
                    } else if selected {
                        Style::default().fg(theme.highlight)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("{marker} {option}")).style(style)
                })
                .collect();
            frame.render_widget(List::new(items), inner);
        }
    }
}

fn set_cursor(frame: &mut Frame, inner: Rect, cursor: usize) {
    let cursor_x = inner.x + cursor as u16;
    if cursor_x < inner.x + inner.width {
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_like_fields_are_three_rows() {
        assert_eq!(field_height(&FieldDescriptor::text("a", "A")), 3);
        assert_eq!(field_height(&FieldDescriptor::number("b", "B")), 3);
        assert_eq!(field_height(&FieldDescriptor::password("c", "C")), 3);
        assert_eq!(field_height(&FieldDescriptor::email("d", "D")), 3);
    }

    #[test]
    fn choice_height_grows_with_options() {
        let field = FieldDescriptor::choice("gender", "Gender", ["Male", "Female", "Other"]);
        // Borders, placeholder row, and three option rows.
        assert_eq!(field_height(&field), 6);
    }
}
