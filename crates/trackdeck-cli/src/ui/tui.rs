//! Interactive dashboard: tab bar, stat row, section body, pagination and
//! status footer. The controller owns all view state; every frame is a
//! full recomputation through the presenters.

use crate::context::ExecutionContext;
use crate::presentation::presenters::{page_syncs, present_screen};
use crate::presentation::view_models::{
    GoalRowViewModel, JobRowViewModel, PaginationViewModel, ScreenBody, ScreenViewModel,
    SectionBody, SectionViewModel,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
};
use std::io::{self, Stdout};
use std::time::Duration;
use trackdeck_engine::{PAGE_SIZE_OPTIONS, PageToken, Segment, StatusTier};
use trackdeck_runtime::DashboardController;
use trackdeck_types::{GoalCadence, RecordId, SectionKey};

pub fn run(ctx: &ExecutionContext) -> Result<()> {
    let client = ctx.client()?;
    let mut controller = DashboardController::new(client);
    ctx.block_on(controller.refresh());

    let mut tui = TuiTerminal::new()?;
    let mut app = App {
        controller,
        mode: Mode::Browse,
        cursor: 0,
        quit: false,
    };
    app.run(ctx, &mut tui.terminal)
}

/// Raw-mode alternate-screen terminal, restored on drop.
struct TuiTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiTerminal {
    fn new() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TuiTerminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

enum Mode {
    Browse,
    SearchInput {
        input: String,
    },
    GoalEdit {
        cadence: GoalCadence,
        id: RecordId,
        input: String,
    },
}

struct App {
    controller: DashboardController,
    mode: Mode,
    cursor: usize,
    quit: bool,
}

impl App {
    fn run(
        &mut self,
        ctx: &ExecutionContext,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        while !self.quit {
            let screen = present_screen(&self.controller);
            for (key, page) in page_syncs(&screen) {
                self.controller.sync_page(key, page);
            }
            self.cursor = self.cursor.min(row_count(&screen).saturating_sub(1));

            terminal.draw(|frame| draw(frame, &screen, &self.mode, self.cursor))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(ctx, key, &screen);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, ctx: &ExecutionContext, key: KeyEvent, screen: &ScreenViewModel) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match &mut self.mode {
            Mode::SearchInput { input } => match key.code {
                KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Enter => {
                    let term = input.clone();
                    self.controller.commit_search(&term);
                    self.cursor = 0;
                    self.mode = Mode::Browse;
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            },
            Mode::GoalEdit { cadence, id, input } => match key.code {
                KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Enter => {
                    let (cadence, id, text) = (*cadence, id.clone(), input.clone());
                    self.controller.edit_goal_description(cadence, id, text);
                    self.mode = Mode::Browse;
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            },
            Mode::Browse => self.handle_browse_key(ctx, key, screen),
        }
    }

    fn handle_browse_key(
        &mut self,
        ctx: &ExecutionContext,
        key: KeyEvent,
        screen: &ScreenViewModel,
    ) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('r') => {
                ctx.block_on(self.controller.refresh());
            }
            KeyCode::Char('/') => {
                self.mode = Mode::SearchInput {
                    input: self.controller.query().to_string(),
                };
            }
            KeyCode::Char('c') => {
                self.controller.clear_search();
                self.cursor = 0;
            }
            KeyCode::Tab | KeyCode::Right => self.cycle_tab(screen, 1),
            KeyCode::BackTab | KeyCode::Left => self.cycle_tab(screen, -1),
            KeyCode::Char('n') => self.turn_page(screen, 1),
            KeyCode::Char('p') => self.turn_page(screen, -1),
            KeyCode::Char('s') => self.cycle_page_size(screen),
            KeyCode::Char('x') => {
                if screen.active == SectionKey::Jobs {
                    self.controller.toggle_show_rejected();
                    self.cursor = 0;
                }
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(row_count(screen).saturating_sub(1));
            }
            KeyCode::Char('d') => {
                if let Some(row) = selected_job(screen, self.cursor)
                    && row.can_reject
                    && let Some(id) = row.id.clone()
                {
                    let _ = ctx.block_on(self.controller.mark_job_rejected(id));
                }
            }
            KeyCode::Char(' ') => {
                if let Some(row) = selected_goal(screen, self.cursor)
                    && let Some(id) = row.id.clone()
                {
                    self.controller
                        .set_goal_completed(row.cadence, id, !row.completed);
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(row) = selected_goal(screen, self.cursor)
                    && let Some(id) = row.id.clone()
                {
                    self.mode = Mode::GoalEdit {
                        cadence: row.cadence,
                        id,
                        input: row.description.clone(),
                    };
                }
            }
            KeyCode::Char('u') => {
                if let Some(row) = selected_goal(screen, self.cursor)
                    && let Some(id) = row.id.clone()
                {
                    let _ = ctx.block_on(self.controller.save_goal(row.cadence, id));
                }
            }
            _ => {}
        }
    }

    fn cycle_tab(&mut self, screen: &ScreenViewModel, step: isize) {
        if screen.tabs.is_empty() {
            return;
        }
        let keys: Vec<SectionKey> = screen.tabs.iter().map(|tab| tab.key).collect();
        let current = keys
            .iter()
            .position(|&key| key == screen.active)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(keys.len() as isize) as usize;
        self.controller.select_section(keys[next]);
        self.cursor = 0;
    }

    fn turn_page(&mut self, screen: &ScreenViewModel, step: isize) {
        let ScreenBody::Section(vm) = &screen.body else {
            return;
        };
        let Some(pagination) = &vm.pagination else {
            return;
        };
        let next = (pagination.page as isize + step).max(1) as usize;
        self.controller.set_page(vm.key, next);
        self.cursor = 0;
    }

    fn cycle_page_size(&mut self, screen: &ScreenViewModel) {
        let ScreenBody::Section(vm) = &screen.body else {
            return;
        };
        let current = self.controller.page_state(vm.key).page_size;
        let index = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == current)
            .unwrap_or(0);
        let next = PAGE_SIZE_OPTIONS[(index + 1) % PAGE_SIZE_OPTIONS.len()];
        self.controller.set_page_size(vm.key, next);
        self.cursor = 0;
    }
}

fn row_count(screen: &ScreenViewModel) -> usize {
    match &screen.body {
        ScreenBody::Section(vm) => match &vm.body {
            SectionBody::Jobs { rows, .. } => rows.len(),
            SectionBody::Goals(rows) => rows.len(),
            SectionBody::Records(rows) => rows.len(),
            SectionBody::Empty => 0,
        },
        _ => 0,
    }
}

fn selected_job(screen: &ScreenViewModel, cursor: usize) -> Option<&JobRowViewModel> {
    match &screen.body {
        ScreenBody::Section(vm) => match &vm.body {
            SectionBody::Jobs { rows, .. } => rows.get(cursor),
            _ => None,
        },
        _ => None,
    }
}

fn selected_goal(screen: &ScreenViewModel, cursor: usize) -> Option<&GoalRowViewModel> {
    match &screen.body {
        ScreenBody::Section(vm) => match &vm.body {
            SectionBody::Goals(rows) => rows.get(cursor),
            _ => None,
        },
        _ => None,
    }
}

// ---- rendering -----------------------------------------------------------

fn draw(frame: &mut ratatui::Frame, screen: &ScreenViewModel, mode: &Mode, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(frame.area());

    draw_tabs(frame, chunks[0], screen);
    draw_stats(frame, chunks[1], screen);
    draw_body(frame, chunks[2], screen, cursor);
    draw_footer(frame, chunks[3], screen, mode);
}

fn draw_tabs(frame: &mut ratatui::Frame, area: Rect, screen: &ScreenViewModel) {
    let titles: Vec<Line> = screen
        .tabs
        .iter()
        .map(|tab| Line::from(format!("{} ({})", tab.label, tab.count)))
        .collect();
    let selected = screen
        .tabs
        .iter()
        .position(|tab| tab.key == screen.active)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("trackdeck"));
    frame.render_widget(tabs, area);
}

fn draw_stats(frame: &mut ratatui::Frame, area: Rect, screen: &ScreenViewModel) {
    let mut spans: Vec<Span> = Vec::new();
    for (index, stat) in screen.stats.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  ·  "));
        }
        spans.push(Span::styled(
            format!("{}: ", stat.label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(stat.value.clone()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn segment_spans(segments: &[Segment]) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| {
            if segment.matched {
                Span::styled(
                    segment.text.clone(),
                    Style::default().bg(Color::Yellow).fg(Color::Black),
                )
            } else {
                Span::raw(segment.text.clone())
            }
        })
        .collect()
}

fn tier_color(tier: StatusTier) -> Color {
    match tier {
        StatusTier::Rejected => Color::Red,
        StatusTier::Offer => Color::Green,
        StatusTier::Interview => Color::Yellow,
        StatusTier::Applied => Color::Blue,
        StatusTier::Neutral => Color::Gray,
    }
}

fn pagination_line(pagination: &PaginationViewModel) -> Line<'static> {
    let mut text = format!(
        "page {}/{} · {} items · {}/page · ",
        pagination.page, pagination.total_pages, pagination.total_items, pagination.page_size
    );
    let strip: Vec<String> = pagination
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == pagination.page => format!("[{n}]"),
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis => "...".to_string(),
        })
        .collect();
    text.push_str(&strip.join(" "));
    Line::styled(text, Style::default().fg(Color::DarkGray))
}

fn job_row_lines(row: &JobRowViewModel, selected: bool) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw(if selected { "▶ " } else { "  " })];
    spans.extend(segment_spans(&row.title));
    spans.push(Span::raw(" — "));
    spans.extend(segment_spans(&row.company));
    spans.push(Span::raw(" ["));
    let tier_style = Style::default().fg(tier_color(row.tier));
    spans.extend(row.status_label.iter().map(|segment| {
        if segment.matched {
            Span::styled(
                segment.text.clone(),
                Style::default().bg(Color::Yellow).fg(Color::Black),
            )
        } else {
            Span::styled(segment.text.clone(), tier_style)
        }
    }));
    spans.push(Span::raw("] "));
    spans.push(Span::styled(
        row.status_date.clone(),
        Style::default().fg(Color::DarkGray),
    ));
    if row.saving {
        spans.push(Span::styled(
            " (saving...)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(notes) = &row.notes {
        let mut note_spans = vec![Span::styled(
            "    notes: ",
            Style::default().fg(Color::DarkGray),
        )];
        note_spans.extend(segment_spans(notes));
        lines.push(Line::from(note_spans));
    }
    lines
}

fn goal_row_line(row: &GoalRowViewModel, selected: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(if selected { "▶ " } else { "  " })];
    spans.push(Span::raw(if row.completed { "[x] " } else { "[ ] " }));
    if row.term_hit {
        spans.push(Span::styled(
            row.description.clone(),
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ));
    } else {
        spans.push(Span::raw(row.description.clone()));
    }
    spans.push(Span::styled(
        format!("  ({})", row.target_date),
        Style::default().fg(Color::DarkGray),
    ));
    if row.saving {
        spans.push(Span::styled(
            " (saving...)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn section_items(vm: &SectionViewModel, cursor: usize) -> Vec<ListItem<'static>> {
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(error) = &vm.error {
        items.push(ListItem::new(Line::styled(
            format!("error: {error}"),
            Style::default().fg(Color::Red),
        )));
    }
    if vm.no_match_notice {
        items.push(ListItem::new(Line::styled(
            format!("No records found for \"{}\". Try a different keyword.", vm.query),
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(pagination) = &vm.pagination {
        items.push(ListItem::new(pagination_line(pagination)));
    }

    match &vm.body {
        SectionBody::Empty => {
            if !vm.no_match_notice {
                items.push(ListItem::new(Line::raw("No entries yet.")));
            }
        }
        SectionBody::Jobs {
            show_rejected,
            all_hidden,
            rows,
        } => {
            if !show_rejected {
                items.push(ListItem::new(Line::styled(
                    "(rejected hidden, press x to include)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            if *all_hidden {
                items.push(ListItem::new(Line::raw("No non-rejected jobs.")));
            }
            for (index, row) in rows.iter().enumerate() {
                items.push(ListItem::new(job_row_lines(row, index == cursor)));
            }
        }
        SectionBody::Goals(rows) => {
            for (index, row) in rows.iter().enumerate() {
                items.push(ListItem::new(goal_row_line(row, index == cursor)));
            }
        }
        SectionBody::Records(rows) => {
            for row in rows {
                let mut lines = Vec::new();
                for cell in &row.cells {
                    let mut spans = vec![Span::styled(
                        format!("  {}: ", cell.label),
                        Style::default().fg(Color::DarkGray),
                    )];
                    spans.extend(segment_spans(&cell.segments));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::raw(""));
                items.push(ListItem::new(lines));
            }
        }
    }

    items
}

fn draw_body(frame: &mut ratatui::Frame, area: Rect, screen: &ScreenViewModel, cursor: usize) {
    let items = match &screen.body {
        ScreenBody::Loading => vec![ListItem::new(Line::raw("No data loaded yet."))],
        ScreenBody::Section(vm) => section_items(vm, cursor),
        ScreenBody::Search(vm) => {
            let mut items = Vec::new();
            if vm.total == 0 {
                items.push(ListItem::new(Line::raw(format!(
                    "No records found for \"{}\". Try a different keyword.",
                    vm.query
                ))));
            }
            for group in &vm.groups {
                items.push(ListItem::new(Line::styled(
                    format!(
                        "{} ({})",
                        group.label,
                        group
                            .pagination
                            .as_ref()
                            .map(|p| p.total_items)
                            .unwrap_or(0)
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                // Search groups are read-only; no cursor inside them.
                items.extend(section_items(group, usize::MAX));
            }
            items
        }
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, screen: &ScreenViewModel, mode: &Mode) {
    let first = match mode {
        Mode::SearchInput { input } => Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Mode::GoalEdit { input, .. } => Line::from(vec![
            Span::styled("Description: ", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Mode::Browse => match &screen.fetch_error {
            Some(error) => Line::styled(
                format!("fetch failed, showing last data: {error}"),
                Style::default().fg(Color::Red),
            ),
            None => Line::raw(""),
        },
    };

    let help = match mode {
        Mode::Browse => match screen.active {
            SectionKey::Jobs => {
                "q quit · / search · c clear · ←/→ tabs · n/p page · s size · ↑/↓ row · x rejected · d mark rejected · r refresh"
            }
            SectionKey::DailyGoals | SectionKey::WeeklyGoals | SectionKey::MonthlyGoals => {
                "q quit · / search · c clear · ←/→ tabs · n/p page · s size · ↑/↓ row · space done · e edit · u save · r refresh"
            }
            _ => "q quit · / search · c clear · ←/→ tabs · n/p page · s size · r refresh",
        },
        _ => "enter apply · esc cancel",
    };

    let lines = vec![
        first,
        Line::styled(help, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
