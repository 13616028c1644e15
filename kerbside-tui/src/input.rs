use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.collections_for`(...) with the entered premises
    FetchSchedule,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::CouncilSelect => match key.code {
            Char('q') => {
                action = Action::Quit;
            }
            Up | Char('k') => {
                if app.council_list_index > 0 {
                    app.council_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.council_list_index + 1 < app.councils.len() {
                    app.council_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_council();
            }
            _ => {}
        },

        Screen::PremisesEntry => match key.code {
            Tab | Up | Down => {
                app.toggle_premises_field();
            }
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.focused_input_mut().push(character);
                }
            }
            Backspace => {
                app.focused_input_mut().pop();
            }
            Enter => {
                action = Action::FetchSchedule;
            }
            Left | Esc => {
                app.screen = Screen::CouncilSelect;
                app.collections.clear();
                app.error_message = None;
            }
            _ => {}
        },

        Screen::ScheduleView => match key.code {
            Char('q') => {
                action = Action::Quit;
            }
            Left | Esc | Char('b') => {
                app.screen = Screen::PremisesEntry;
            }
            _ => {}
        },
    }
    action
}
