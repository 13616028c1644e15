//! Terminal UI for kerbside that lets users check council bin collection days.

mod app;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kerbside_core::{model::Premises, plugin::CouncilRegistry, service::KerbsideService};
use kerbside_source_renfrewshire as renfrewshire;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // Source + service setup; sources own their HTTP sessions.
    let plugins = vec![renfrewshire::plugin()];
    let registry = Arc::new(CouncilRegistry::new(plugins));
    let service = Arc::new(KerbsideService::new(registry));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::FetchSchedule => {
                    // Needs a council plus both premises fields
                    let postcode = app.postcode_input.trim().to_owned();
                    let uprn = app.uprn_input.trim().to_owned();
                    if postcode.is_empty() || uprn.is_empty() {
                        app.error_message = Some(
                            "Enter both a postcode and a UPRN, then press Enter".into(),
                        );
                        continue;
                    }

                    let Some(council) = app.selected_council.clone() else {
                        app.error_message = Some("Select a council first".into());
                        continue;
                    };

                    let premises = Premises::new(postcode, uprn);

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.collections_for(council, &premises).await;

                    app.is_loading = false;
                    match res {
                        Ok(collections) => {
                            app.collections = collections;
                            app.screen = Screen::ScheduleView;
                        }
                        Err(err) => {
                            app.collections.clear();
                            app.error_message = Some(format!("Failed to load schedule: {err}"));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
