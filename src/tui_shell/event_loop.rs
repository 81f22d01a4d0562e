use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::session::Confirmation;

use super::commands::completions;
use super::{App, Backend, UiMode};

pub(super) fn run_loop<B: Backend>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: &B,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, backend, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key<B: Backend>(app: &mut App, backend: &B, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if app.modal.is_some() {
        let answer = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        };
        app.confirm(backend, answer);
        return;
    }

    match key.code {
        KeyCode::Char('q') if app.input.is_empty() => {
            app.quit = true;
        }

        KeyCode::Esc => {
            if !app.input.is_empty() {
                app.input.clear();
            } else if app.mode != UiMode::Collection {
                app.mode = UiMode::Collection;
                app.selected = 0;
            } else {
                app.quit = true;
            }
        }

        KeyCode::Enter => {
            if app.input.is_empty() {
                app.default_action(backend);
            } else {
                let line = app.input.submit();
                app.run_line(backend, &line);
            }
        }

        KeyCode::Tab => {
            if let [only] = completions(&app.input.buf).as_slice() {
                app.input.set(format!("{} ", only.name));
            }
        }

        KeyCode::Up => {
            if app.input.is_empty() {
                app.move_up();
            } else {
                app.input.history_up();
            }
        }
        KeyCode::Down => {
            if app.input.is_empty() {
                app.move_down();
            } else {
                app.input.history_down();
            }
        }

        KeyCode::Left => {
            if app.input.is_empty() {
                app.prev_page();
            } else {
                app.input.move_left();
            }
        }
        KeyCode::Right => {
            if app.input.is_empty() {
                app.next_page();
            } else {
                app.input.move_right();
            }
        }
        KeyCode::PageUp => app.prev_page(),
        KeyCode::PageDown => app.next_page(),

        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => {
            if app.input.is_empty() {
                app.request_delete_selected();
            } else {
                app.input.delete();
            }
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
        }
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.history_up();
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.history_down();
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.insert_char(c);
        }

        _ => {}
    }
}
