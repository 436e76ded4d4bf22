//! Interactive dashboard.
//!
//! Single-threaded update loop: read a key, map it to a `TuiAction`,
//! dispatch control events to the `DashboardContext`, then re-present and
//! redraw. The renderer owns UI state (input mode); the context owns data.

mod chart_sink;
mod input;

pub use chart_sink::FrameChartSink;
pub use input::{TuiAction, map_key};

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use streamify_runtime::DashboardContext;

use super::traits::ChartSink;
use crate::presentation::presenters::present_dashboard;
use crate::presentation::view_models::{DashboardScreenViewModel, InputMode};
use crate::presentation::views::tui::{
    HeaderView, MetricCardsView, StatusBarView, StreamTableView,
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiRenderer {
    ctx: DashboardContext,
    mode: InputMode,
    loaded_at: DateTime<Local>,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(ctx: DashboardContext) -> Self {
        Self {
            ctx,
            mode: InputMode::Normal,
            loaded_at: Local::now(),
            should_quit: false,
        }
    }

    /// Take over the terminal until the user quits, restoring it afterwards
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            let screen = self.screen();
            terminal.draw(|f| draw(f, &screen))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }
        }

        tracing::info!("dashboard closed");
        Ok(())
    }

    pub fn screen(&self) -> DashboardScreenViewModel {
        present_dashboard(&self.ctx, self.mode, self.loaded_at)
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn context(&self) -> &DashboardContext {
        &self.ctx
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(action) = map_key(key, self.mode) else {
            return;
        };

        match action {
            TuiAction::Quit => self.should_quit = true,
            TuiAction::EnterSearch => self.mode = InputMode::Search,
            TuiAction::LeaveSearch => self.mode = InputMode::Normal,
            TuiAction::Control(event) => {
                self.ctx.dispatch(event);
            }
        }
    }
}

/// Lay out and paint one dashboard frame
pub fn draw(f: &mut Frame, screen: &DashboardScreenViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Min(8),
        Constraint::Length(3),
    ])
    .split(f.area());

    f.render_widget(HeaderView::new(screen), chunks[0]);
    f.render_widget(MetricCardsView::new(&screen.metrics), chunks[1]);

    let panel_count = screen.charts.panels.len().max(1) as u32;
    let chart_areas = Layout::horizontal(
        (0..panel_count).map(|_| Constraint::Ratio(1, panel_count)),
    )
    .split(chunks[2]);
    for (panel, area) in screen.charts.panels.iter().zip(chart_areas.iter()) {
        FrameChartSink::new(f, *area).draw(panel);
    }

    let searching = screen.status.mode == InputMode::Search;
    f.render_widget(StreamTableView::new(&screen.table, searching), chunks[3]);
    f.render_widget(StatusBarView::new(&screen.status), chunks[4]);
}
