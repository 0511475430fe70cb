use std::io::{stdout, Stdout};

use chrono::Utc;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::Terminal;

use crate::data::{Deltas, Metrics, Observation};
use crate::error::MonitorResult;
use crate::monitor::Presenter;
use crate::tui::app::DashboardApp;

pub mod app;
pub mod ui;

pub struct TuiPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: DashboardApp,
}

impl TuiPresenter {
    /// Raw mode stays off: Ctrl-C must keep reaching the process, it is the
    /// only way to stop the monitor.
    pub fn new(symbol: String, table_rows: usize) -> MonitorResult<Self> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            app: DashboardApp::new(symbol, table_rows),
        })
    }
}

impl Presenter for TuiPresenter {
    fn render(
        &mut self,
        rows: &[Observation],
        latest: &Metrics,
        deltas: &Deltas,
    ) -> MonitorResult<()> {
        self.app.rows = rows.to_vec();
        self.app.latest = latest.clone();
        self.app.deltas = deltas.clone();
        self.app.refreshed_at = Some(Utc::now());

        let app = &self.app;
        self.terminal.draw(|f| ui::draw(f, app))?;
        Ok(())
    }
}

impl Drop for TuiPresenter {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    }
}
