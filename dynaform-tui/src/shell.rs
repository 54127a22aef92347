//! The application shell: composes the form view with the notification
//! surface and drives the whole interaction from one key-event loop.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dynaform_core::{
    FieldKind, FormController, FormSurface, Notification, Severity, display_name,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
};
use thiserror::Error;

use crate::renderer::{draw_field, field_height};
use crate::theme::Theme;

/// Error type for the terminal shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// An I/O error occurred while driving the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal front-end for a [`FormController`].
///
/// One screen holds the form-type selector, the dynamically rendered field
/// list, the submit control, and the submissions table; a status line shows
/// the most recent controller notification.
#[derive(Debug, Clone)]
pub struct FormShell {
    /// Title shown at the top of the screen.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for FormShell {
    fn default() -> Self {
        Self::new()
    }
}

impl FormShell {
    /// Create a shell with default settings.
    pub fn new() -> Self {
        Self {
            title: "Dynamic Form Application".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, ShellError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), ShellError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

impl FormSurface for FormShell {
    type Error = ShellError;

    fn run(&self, controller: &mut FormController) -> Result<(), ShellError> {
        let mut terminal = self.setup_terminal()?;
        let mut state = ShellState::new();

        loop {
            if let Some(notification) = controller.take_notifications().pop() {
                state.status = Some(notification);
            }
            state.clamp(controller);

            terminal
                .draw(|frame| draw_shell(frame, controller, &state, &self.title, &self.theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                state.handle_key(controller, key);
            }
            if state.quit {
                break;
            }
        }

        self.restore_terminal(&mut terminal)?;
        Ok(())
    }
}

/// Which control currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    TypeSelector,
    Field(usize),
    Submit,
    Records,
}

/// Presentation-only state; everything the forms are about lives in the
/// controller.
struct ShellState {
    focus: Focus,
    /// Highlighted entry in the form-type selector.
    type_highlight: usize,
    /// Highlighted row in the focused choice field (0 is the placeholder).
    choice_highlight: usize,
    /// Character index of the cursor in the focused text field.
    cursor: usize,
    /// Highlighted row in the submissions table.
    record_highlight: usize,
    /// Most recent controller notification, shown in the status line.
    status: Option<Notification>,
    quit: bool,
}

impl ShellState {
    fn new() -> Self {
        Self {
            focus: Focus::TypeSelector,
            type_highlight: 0,
            choice_highlight: 0,
            cursor: 0,
            record_highlight: 0,
            status: None,
            quit: false,
        }
    }

    /// Move focus to a field, resetting the per-field cursor and highlight.
    fn focus_field(&mut self, controller: &FormController, idx: usize) {
        self.focus = Focus::Field(idx);
        self.choice_highlight = 0;
        let name = controller.active_fields()[idx].name();
        self.cursor = controller.values().value_of(name).chars().count();
    }

    fn next_focus(&mut self, controller: &FormController) {
        let field_count = controller.active_fields().len();
        let has_records = !controller.log().is_empty();
        match self.focus {
            Focus::TypeSelector => {
                if field_count > 0 {
                    self.focus_field(controller, 0);
                } else if has_records {
                    self.focus = Focus::Records;
                }
            }
            Focus::Field(idx) => {
                if idx + 1 < field_count {
                    self.focus_field(controller, idx + 1);
                } else {
                    self.focus = Focus::Submit;
                }
            }
            Focus::Submit => {
                self.focus = if has_records {
                    Focus::Records
                } else {
                    Focus::TypeSelector
                };
            }
            Focus::Records => self.focus = Focus::TypeSelector,
        }
    }

    fn prev_focus(&mut self, controller: &FormController) {
        let field_count = controller.active_fields().len();
        let has_records = !controller.log().is_empty();
        match self.focus {
            Focus::TypeSelector => {
                if has_records {
                    self.focus = Focus::Records;
                } else if field_count > 0 {
                    self.focus = Focus::Submit;
                }
            }
            Focus::Field(0) => self.focus = Focus::TypeSelector,
            Focus::Field(idx) => self.focus_field(controller, idx - 1),
            Focus::Submit => {
                if field_count > 0 {
                    self.focus_field(controller, field_count - 1);
                } else {
                    self.focus = Focus::TypeSelector;
                }
            }
            Focus::Records => {
                if field_count > 0 {
                    self.focus = Focus::Submit;
                } else {
                    self.focus = Focus::TypeSelector;
                }
            }
        }
    }

    /// Repair focus and highlights after controller operations shrank what
    /// they point at (submit clears the form, delete shrinks the log).
    fn clamp(&mut self, controller: &FormController) {
        let field_count = controller.active_fields().len();
        match self.focus {
            Focus::Field(idx) if idx >= field_count => self.focus = Focus::TypeSelector,
            Focus::Submit if field_count == 0 => self.focus = Focus::TypeSelector,
            Focus::Records if controller.log().is_empty() => self.focus = Focus::TypeSelector,
            _ => {}
        }
        if self.record_highlight >= controller.log().len() {
            self.record_highlight = controller.log().len().saturating_sub(1);
        }
    }

    fn handle_key(&mut self, controller: &mut FormController, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            KeyCode::BackTab => {
                self.prev_focus(controller);
                return;
            }
            KeyCode::Tab => {
                self.next_focus(controller);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::TypeSelector => self.handle_selector_key(controller, key),
            Focus::Field(idx) => self.handle_field_key(controller, idx, key),
            Focus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    // Feedback arrives through the notification queue.
                    let _ = controller.submit();
                }
            }
            Focus::Records => self.handle_records_key(controller, key),
        }
    }

    fn handle_selector_key(&mut self, controller: &mut FormController, key: KeyEvent) {
        let count = controller.registry().len();
        if count == 0 {
            return;
        }
        match key.code {
            KeyCode::Up => self.type_highlight = (self.type_highlight + count - 1) % count,
            KeyCode::Down => self.type_highlight = (self.type_highlight + 1) % count,
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = controller
                    .registry()
                    .form_ids()
                    .nth(self.type_highlight)
                    .map(str::to_string);
                if let Some(id) = id {
                    controller.select_form_type(&id);
                    if controller.has_active_form() {
                        self.focus_field(controller, 0);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_field_key(&mut self, controller: &mut FormController, idx: usize, key: KeyEvent) {
        let field = controller.active_fields()[idx].clone();

        if let FieldKind::Choice(choice) = field.kind() {
            let rows = choice.len() + 1;
            match key.code {
                KeyCode::Up => self.choice_highlight = (self.choice_highlight + rows - 1) % rows,
                KeyCode::Down => self.choice_highlight = (self.choice_highlight + 1) % rows,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    // Row 0 is the placeholder: picking it clears the value.
                    let value = if self.choice_highlight == 0 {
                        String::new()
                    } else {
                        choice.options()[self.choice_highlight - 1].clone()
                    };
                    controller.update_field(field.name(), value);
                }
                _ => {}
            }
            return;
        }

        let mut chars: Vec<char> = controller
            .values()
            .value_of(field.name())
            .chars()
            .collect();
        if self.cursor > chars.len() {
            self.cursor = chars.len();
        }
        match key.code {
            KeyCode::Char(c) if accepts(field.kind(), c) => {
                chars.insert(self.cursor, c);
                self.cursor += 1;
                controller.update_field(field.name(), chars.into_iter().collect::<String>());
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                chars.remove(self.cursor);
                controller.update_field(field.name(), chars.into_iter().collect::<String>());
            }
            KeyCode::Delete if self.cursor < chars.len() => {
                chars.remove(self.cursor);
                controller.update_field(field.name(), chars.into_iter().collect::<String>());
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = chars.len(),
            KeyCode::Enter | KeyCode::Down => self.next_focus(controller),
            KeyCode::Up => self.prev_focus(controller),
            _ => {}
        }
    }

    fn handle_records_key(&mut self, controller: &mut FormController, key: KeyEvent) {
        let count = controller.log().len();
        match key.code {
            KeyCode::Up => self.record_highlight = self.record_highlight.saturating_sub(1),
            KeyCode::Down if count > 0 => {
                self.record_highlight = (self.record_highlight + 1).min(count - 1);
            }
            KeyCode::Char('e') => {
                controller.edit_record(self.record_highlight);
                if controller.has_active_form() {
                    self.focus_field(controller, 0);
                } else {
                    self.focus = Focus::TypeSelector;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                controller.delete_record(self.record_highlight);
            }
            _ => {}
        }
    }
}

/// Keystroke affordance per field kind; a hint, not validation.
fn accepts(kind: &FieldKind, c: char) -> bool {
    match kind {
        FieldKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
        _ => !c.is_control(),
    }
}

fn draw_shell(
    frame: &mut Frame,
    controller: &FormController,
    state: &ShellState,
    title: &str,
    theme: &Theme,
) {
    let type_rows = controller.registry().len() as u16;
    let fields_height: u16 = controller.active_fields().iter().map(field_height).sum();
    let has_form = controller.has_active_form();

    let mut constraints = vec![
        Constraint::Length(2),            // title
        Constraint::Length(3),            // progress
        Constraint::Length(type_rows + 2), // form type selector
    ];
    if has_form {
        constraints.push(Constraint::Length(fields_height));
        constraints.push(Constraint::Length(3)); // submit button
    }
    constraints.push(Constraint::Min(0)); // submissions table
    constraints.push(Constraint::Length(1)); // status line
    constraints.push(Constraint::Length(1)); // help bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());
    let mut chunk = chunks.iter().copied();

    // Title
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunk.next().unwrap());

    // Progress
    let progress = controller.progress();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Progress ")
                .border_style(Style::default().fg(theme.border)),
        )
        .gauge_style(Style::default().fg(theme.success))
        .percent(progress.round() as u16)
        .label(format!("{progress:.0}% completed"));
    frame.render_widget(gauge, chunk.next().unwrap());

    // Form type selector
    let selector_focused = state.focus == Focus::TypeSelector;
    let items: Vec<ListItem> = controller
        .registry()
        .form_ids()
        .enumerate()
        .map(|(idx, id)| {
            let is_highlighted = selector_focused && idx == state.type_highlight;
            let style = if is_highlighted {
                Style::default()
                    .fg(theme.text)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(display_name(id)).style(style)
        })
        .collect();
    let selector = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Choose Form Type ")
            .border_style(Style::default().fg(if selector_focused {
                theme.primary
            } else {
                theme.border
            })),
    );
    frame.render_widget(selector, chunk.next().unwrap());

    // Active form fields and submit button
    if has_form {
        let field_constraints: Vec<Constraint> = controller
            .active_fields()
            .iter()
            .map(|field| Constraint::Length(field_height(field)))
            .collect();
        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(field_constraints)
            .split(chunk.next().unwrap());
        for (idx, field) in controller.active_fields().iter().enumerate() {
            let focused = state.focus == Focus::Field(idx);
            draw_field(
                frame,
                field,
                controller.values().value_of(field.name()),
                field_areas[idx],
                focused,
                state.choice_highlight,
                state.cursor,
                theme,
            );
        }

        let submit_focused = state.focus == Focus::Submit;
        let submit_style = if submit_focused {
            Style::default()
                .fg(theme.text)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        };
        let submit_text = if submit_focused {
            "  [ Submit ]  "
        } else {
            "    Submit    "
        };
        let submit_button = Paragraph::new(submit_text)
            .style(submit_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if submit_focused {
                        theme.primary
                    } else {
                        theme.border
                    })),
            );
        frame.render_widget(submit_button, chunk.next().unwrap());
    }

    // Submissions table, columns taken from the first record
    let table_area = chunk.next().unwrap();
    if let Some(first) = controller.log().get(0) {
        let records_focused = state.focus == Focus::Records;
        let header_cells: Vec<Cell> = first
            .names()
            .map(|name| Cell::from(name.to_string()))
            .collect();
        let header = Row::new(header_cells).style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        );
        let column_names: Vec<String> = first.names().map(str::to_string).collect();
        let rows: Vec<Row> = controller
            .log()
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let cells: Vec<Cell> = column_names
                    .iter()
                    .map(|name| Cell::from(record.get(name).unwrap_or("").to_string()))
                    .collect();
                let style = if records_focused && idx == state.record_highlight {
                    Style::default().fg(theme.text).bg(theme.selected_bg)
                } else {
                    Style::default().fg(theme.text)
                };
                Row::new(cells).style(style)
            })
            .collect();
        let widths = vec![
            Constraint::Ratio(1, column_names.len().max(1) as u32);
            column_names.len()
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Submitted Entries ")
                    .border_style(Style::default().fg(if records_focused {
                        theme.primary
                    } else {
                        theme.border
                    })),
            );
        frame.render_widget(table, table_area);
    }

    // Status line: the most recent notification
    let status_area = chunk.next().unwrap();
    if let Some(status) = &state.status {
        let color = match status.severity() {
            Severity::Info => theme.primary,
            Severity::Success => theme.success,
            Severity::Error => theme.error,
        };
        let line = Paragraph::new(status.message().to_string()).style(Style::default().fg(color));
        frame.render_widget(line, status_area);
    }

    // Help bar
    let help = Paragraph::new("Tab: Next  ↑/↓: Navigate  Enter: Select/Submit  e: Edit  d: Delete  Esc: Quit")
        .style(Style::default().fg(theme.border));
    frame.render_widget(help, chunk.next().unwrap());
}
