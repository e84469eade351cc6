pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

const TICK_RATE_MS: u64 = 250;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

async fn run_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let mut events = EventHandler::new(TICK_RATE_MS);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(app, key),
            Some(Event::Tick) => app.update_flash(),
            None => {
                log::warn!("Terminal input closed, exiting");
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.next_field(),
                KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.previous_field(),

                // Slider and toggles
                KeyCode::Char('h') | KeyCode::Left => app.adjust(-1),
                KeyCode::Char('l') | KeyCode::Right => app.adjust(1),
                KeyCode::PageUp => app.adjust_page(true),
                KeyCode::PageDown => app.adjust_page(false),
                KeyCode::Char(' ') => app.toggle_focused(),

                // Edit symbols on the symbols row, otherwise generate
                KeyCode::Enter => app.activate(),

                // Generate with unchanged settings
                KeyCode::Char('g') | KeyCode::Char('r') => app.regenerate(),

                // Copy
                KeyCode::Char('c') => app.copy_password(),

                // Theme
                KeyCode::Char('t') => app.toggle_theme(),

                // Save settings as defaults
                KeyCode::Char('s') => app.save_settings(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                // Strength breakdown
                KeyCode::Char('b') => app.show_breakdown(),

                _ => {}
            }
        }
        app::InputMode::EditSymbols => {
            match key.code {
                KeyCode::Enter => app.confirm_symbols_input(),
                KeyCode::Esc => app.cancel_symbols_input(),
                KeyCode::Backspace => app.pop_symbol(),

                // Every printable character is a candidate symbol, including letters
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.push_symbol(c)
                }

                // Ignore all other keys (don't propagate to Normal mode)
                _ => {}
            }
        }
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.dismiss_overlay(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_overlay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::sample_app;
    use crate::tui::app::{Field, InputMode};

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let (mut app, _) = sample_app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_copy_key_does_not_quit() {
        let (mut app, clipboard) = sample_app();
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.should_quit);
        assert_eq!(clipboard.contents().as_deref(), Some(app.password.as_str()));
    }

    #[test]
    fn test_arrow_keys_move_slider() {
        let (mut app, _) = sample_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.settings.length, 14);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.settings.length, 6);
    }

    #[test]
    fn test_space_toggles_focused() {
        let (mut app, _) = sample_app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Field::Numbers);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.settings.include_numbers);
    }

    #[test]
    fn test_edit_symbols_flow() {
        let (mut app, _) = sample_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focus, Field::Symbols);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::EditSymbols);

        // 'q' is text here, not quit
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('@'));
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.settings.special_characters, "#@");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (mut app, _) = sample_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, InputMode::Help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_breakdown_toggle() {
        let (mut app, _) = sample_app();
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.input_mode, InputMode::Breakdown);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_generate_key_replaces_password() {
        let (mut app, _) = sample_app();
        app.settings.length = 40;
        let before = app.password.clone();
        press(&mut app, KeyCode::Char('g'));
        assert_ne!(app.password, before);
        assert_eq!(app.password.chars().count(), 40);
    }
}
