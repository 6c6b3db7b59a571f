pub mod app;
pub mod theme;
pub mod views;

use crate::api::client::HttpBackend;
use crate::config::config::Config;
use crate::core::ports::{AnalysisBackend, CredentialStore};
use crate::filesystem::store::FileCredentialStore;
use crate::ui::controller::Controller;
use crate::ui::dispatch::Action;
use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use self::app::{App, Command};
use self::views::draw;

pub async fn launch(config: &Config) -> Result<()> {
    let store: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(config.storage_path.clone()));
    let backend: Arc<dyn AnalysisBackend> =
        Arc::new(HttpBackend::new(config.server_url.clone()));
    let mut controller = Controller::new(backend, store, config.controller_options());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut controller);

    // Restore terminal
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    res
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, controller: &mut Controller) -> Result<()> {
    let mut app = App::new();
    let tick_rate = Duration::from_millis(100);

    controller.dispatch(Action::Loaded);

    loop {
        controller.drain_completions();
        app.apply_notices(controller.take_notices());

        terminal.draw(|f| draw(f, &app, controller.state()))?;

        if !event::poll(tick_rate)? {
            continue;
        }
        let command = match event::read()? {
            Event::Key(k) if k.kind == KeyEventKind::Press => app.on_key(controller.state(), k),
            Event::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                app.on_click(controller.state(), screen, m.column, m.row)
            }
            _ => Command::None,
        };
        match command {
            Command::Dispatch(action) => controller.dispatch(action),
            Command::Quit => return Ok(()),
            Command::None => {}
        }
    }
}
