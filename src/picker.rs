//! Interactive month picker drawn with ratatui.
//!
//! Day cells and the `<` / `>` header controls are clicked with the mouse;
//! the screen is redrawn after every event.

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rangepick_core::grid::{DayCell, Grid};
use rangepick_core::locale::MonthNames;
use rangepick_core::{CalendarRangeModel, Clock, Selection};
use tracing::debug;

use crate::render::weekday_header_labels;

/// How the picker was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Selection),
    Cancelled,
}

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Previous,
    Next,
    Day(DayCell),
}

/// Screen regions from the last draw, used to resolve mouse clicks.
#[derive(Debug, Default)]
struct HitMap {
    previous: Option<Rect>,
    next: Option<Rect>,
    cells: Vec<(Rect, DayCell)>,
}

impl HitMap {
    fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);

        if self.previous.is_some_and(|r| r.contains(position)) {
            return Some(Hit::Previous);
        }
        if self.next.is_some_and(|r| r.contains(position)) {
            return Some(Hit::Next);
        }
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, cell)| Hit::Day(*cell))
    }
}

pub struct PickerApp {
    model: CalendarRangeModel,
    clock: Box<dyn Clock>,
    names: Box<dyn MonthNames>,
    hits: HitMap,
    outcome: Option<Outcome>,
}

impl PickerApp {
    pub fn new(model: CalendarRangeModel, clock: Box<dyn Clock>, names: Box<dyn MonthNames>) -> Self {
        PickerApp {
            model,
            clock,
            names,
            hits: HitMap::default(),
            outcome: None,
        }
    }

    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<Outcome> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            self.handle_event(event::read()?);

            if let Some(outcome) = self.outcome.take() {
                return Ok(outcome);
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.outcome = Some(Outcome::Cancelled);
            }
            KeyCode::Enter => {
                self.outcome = Some(Outcome::Accepted(*self.model.selection()));
            }
            KeyCode::Left | KeyCode::Char('h') => self.model.advance_month(-1),
            KeyCode::Right | KeyCode::Char('l') => self.model.advance_month(1),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hits.hit(mouse.column, mouse.row) {
            Some(Hit::Previous) => self.model.advance_month(-1),
            Some(Hit::Next) => self.model.advance_month(1),
            Some(Hit::Day(cell)) => {
                let changed = self
                    .model
                    .handle_day_click(cell.day, cell.belongs_to_displayed_month);
                debug!(day = cell.day, changed, "cell clicked");
            }
            None => {}
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        self.hits = HitMap::default();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" rangepick ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(f.area());
        f.render_widget(block, f.area());

        let grid = self.model.build_grid(self.clock.today());
        let weeks = grid.weeks().count() as u16;

        // Header, weekday row and help line, plus one row per week.
        if inner.width < 21 || inner.height < 3 + weeks {
            f.render_widget(Paragraph::new("Terminal too small"), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(weeks),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_header(f, chunks[0]);
        self.draw_weekdays(f, chunks[1]);
        self.draw_grid(f, chunks[2], &grid);
        draw_help(f, chunks[3], self.model.selection());
    }

    fn draw_header(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let arrow = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label = self.model.displayed_month_label(self.names.as_ref());

        f.render_widget(Paragraph::new(Span::styled(" < ", arrow)), columns[0]);
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center),
            columns[1],
        );
        f.render_widget(Paragraph::new(Span::styled(" > ", arrow)), columns[2]);

        self.hits.previous = Some(columns[0]);
        self.hits.next = Some(columns[2]);
    }

    fn draw_weekdays(&self, f: &mut Frame, area: Rect) {
        let cell_width = (area.width / 7) as usize;
        let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let spans: Vec<Span> = weekday_header_labels(self.model.options().week_start)
            .into_iter()
            .map(|label| Span::styled(format!("{:^width$}", label, width = cell_width), style))
            .collect();
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_grid(&mut self, f: &mut Frame, area: Rect, grid: &Grid) {
        let cell_width = area.width / 7;
        let weeks = grid.weeks().count().max(1) as u16;
        let cell_height = (area.height / weeks).max(1);

        for (row, week) in grid.weeks().enumerate() {
            let y = area.y + row as u16 * cell_height;

            for (column, cell) in week.iter().enumerate() {
                let rect = Rect {
                    x: area.x + column as u16 * cell_width,
                    y,
                    width: cell_width,
                    height: cell_height,
                };

                let text = Span::styled(format!("{}", cell.day), cell_style(cell));
                f.render_widget(
                    Paragraph::new(text)
                        .style(cell_background(cell))
                        .alignment(Alignment::Center),
                    rect,
                );
                self.hits.cells.push((rect, *cell));
            }
        }
    }
}

fn cell_background(cell: &DayCell) -> Style {
    if cell.is_range_endpoint {
        Style::default().bg(Color::Cyan)
    } else if cell.is_in_range {
        Style::default().bg(Color::Blue)
    } else {
        Style::default()
    }
}

fn cell_style(cell: &DayCell) -> Style {
    if !cell.belongs_to_displayed_month {
        return Style::default().fg(Color::DarkGray);
    }

    let mut style = cell_background(cell);
    if cell.is_range_endpoint {
        style = style.fg(Color::Black).add_modifier(Modifier::BOLD);
    }
    if cell.is_today {
        style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn draw_help(f: &mut Frame, area: Rect, selection: &Selection) {
    let key = Style::default().fg(Color::Yellow);
    let status = match selection {
        Selection::Empty => "pick a start".to_string(),
        Selection::Start { start } => format!("{}..", start),
        Selection::Range { start, end } => format!("{}..{}", start, end),
    };

    let line = Line::from(vec![
        Span::styled("Click", key),
        Span::raw(": select  "),
        Span::styled("←/→", key),
        Span::raw(": month  "),
        Span::styled("Enter", key),
        Span::raw(": accept  "),
        Span::styled("Q", key),
        Span::raw(": cancel  "),
        Span::styled(status, Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
