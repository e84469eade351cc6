use crate::clipboard::Clipboard;
use crate::config::{Config, ThemeConfig};
use crate::engine::{self, GenerationConfig, StrengthReport};
use crate::tui::theme::{Theme, ThemeColors};
use std::path::PathBuf;
use std::time::Instant;

const FLASH_SECS: u64 = 3;
const LENGTH_PAGE: isize = 10;

/// Form rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Numbers,
    Specials,
    Symbols,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditSymbols,
    Help,
    Breakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

pub struct App {
    pub settings: GenerationConfig,
    pub password: String,
    pub report: StrengthReport,
    pub focus: Field,
    pub input_mode: InputMode,
    pub symbols_input: String,
    pub theme: Theme,
    pub colors: ThemeColors,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub should_quit: bool,
    pub config: Config,
    pub config_path: Option<PathBuf>,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Build the app and generate the first password.
    pub fn new(
        config: Config,
        settings: GenerationConfig,
        theme: Theme,
        config_path: Option<PathBuf>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let settings = GenerationConfig {
            length: engine::clamp_length(settings.length),
            ..settings
        };

        let mut app = Self {
            settings,
            password: String::new(),
            report: engine::analyze(""),
            focus: Field::Length,
            input_mode: InputMode::Normal,
            symbols_input: String::new(),
            theme,
            colors: theme.colors(),
            flash_message: None,
            should_quit: false,
            config,
            config_path,
            clipboard,
        };
        app.regenerate();
        app
    }

    /// Generate a fresh password from the current settings and rate it.
    /// Every settings change ends up here.
    pub fn regenerate(&mut self) {
        match engine::generate(&self.settings) {
            Ok(password) => {
                self.report = engine::analyze(&password);
                self.password = password;
            }
            Err(e) => {
                log::error!("Generation failed: {}", e);
                self.show_flash(format!("Generation failed: {}", e), FlashKind::Error);
            }
        }
    }

    /// Fields currently on screen. The symbols row is hidden while specials are off.
    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Length, Field::Numbers, Field::Specials];
        if self.settings.include_specials {
            fields.push(Field::Symbols);
        }
        fields
    }

    pub fn next_field(&mut self) {
        let fields = self.visible_fields();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + 1) % fields.len()];
    }

    pub fn previous_field(&mut self) {
        let fields = self.visible_fields();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if i == 0 { fields[fields.len() - 1] } else { fields[i - 1] };
    }

    /// Left/Right on the focused field: move the slider or flip a toggle.
    pub fn adjust(&mut self, step: isize) {
        match self.focus {
            Field::Length => self.change_length(step),
            Field::Numbers | Field::Specials => self.toggle_focused(),
            Field::Symbols => {}
        }
    }

    /// PageUp/PageDown: coarse slider steps.
    pub fn adjust_page(&mut self, forward: bool) {
        if self.focus == Field::Length {
            self.change_length(if forward { LENGTH_PAGE } else { -LENGTH_PAGE });
        }
    }

    fn change_length(&mut self, step: isize) {
        let requested = (self.settings.length as isize + step).max(0) as usize;
        let length = engine::clamp_length(requested);
        if length != self.settings.length {
            self.settings.length = length;
            self.regenerate();
        }
    }

    pub fn toggle_focused(&mut self) {
        match self.focus {
            Field::Numbers => {
                self.settings.include_numbers = !self.settings.include_numbers;
            }
            Field::Specials => {
                self.settings.include_specials = !self.settings.include_specials;
            }
            Field::Length | Field::Symbols => return,
        }
        self.regenerate();
    }

    /// Enter in normal mode
    pub fn activate(&mut self) {
        if self.focus == Field::Symbols {
            self.start_symbols_input();
        } else {
            self.regenerate();
        }
    }

    pub fn start_symbols_input(&mut self) {
        if self.settings.include_specials {
            self.symbols_input = self.settings.special_characters.clone();
            self.input_mode = InputMode::EditSymbols;
        }
    }

    pub fn push_symbol(&mut self, c: char) {
        if !c.is_control() {
            self.symbols_input.push(c);
        }
    }

    pub fn pop_symbol(&mut self) {
        self.symbols_input.pop();
    }

    pub fn confirm_symbols_input(&mut self) {
        self.input_mode = InputMode::Normal;
        if self.symbols_input != self.settings.special_characters {
            self.settings.special_characters = std::mem::take(&mut self.symbols_input);
            self.regenerate();
        } else {
            self.symbols_input.clear();
        }
    }

    pub fn cancel_symbols_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.symbols_input.clear();
    }

    pub fn copy_password(&mut self) {
        match self.clipboard.write(&self.password) {
            Ok(()) => self.show_flash(
                "Password copied to clipboard!".to_string(),
                FlashKind::Success,
            ),
            Err(e) => {
                log::warn!("Copy failed: {}", e);
                self.show_flash(format!("Copy failed: {}", e), FlashKind::Error);
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.colors = self.theme.colors();
        self.show_flash(format!("{} theme", self.theme.label()), FlashKind::Info);
    }

    /// Store the current form (and theme) as the config file defaults.
    pub fn save_settings(&mut self) {
        let path = match &self.config_path {
            Some(p) => p.clone(),
            None => match crate::config::get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    self.show_flash(format!("Save failed: {}", e), FlashKind::Error);
                    return;
                }
            },
        };

        self.config.set_generation_config(&self.settings);
        self.config.theme = match self.theme {
            Theme::Dark => ThemeConfig::Dark,
            Theme::Light => ThemeConfig::Light,
        };

        match crate::config::save_config(&path, &self.config) {
            Ok(()) => self.show_flash(
                format!("Saved defaults to {}", path.display()),
                FlashKind::Success,
            ),
            Err(e) => self.show_flash(format!("Save failed: {:#}", e), FlashKind::Error),
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    /// Show help overlay
    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Show strength breakdown overlay
    pub fn show_breakdown(&mut self) {
        self.input_mode = InputMode::Breakdown;
    }

    /// Dismiss any overlay
    pub fn dismiss_overlay(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::engine::{effective_alphabet, StrengthLevel, MAX_LENGTH, MIN_LENGTH};

    pub(crate) fn sample_app() -> (App, MemoryClipboard) {
        let clipboard = MemoryClipboard::default();
        let settings = GenerationConfig {
            length: 12,
            include_numbers: true,
            include_specials: true,
            special_characters: "#".to_string(),
        };
        let app = App::new(
            Config::default(),
            settings,
            Theme::Dark,
            None,
            Box::new(clipboard.clone()),
        );
        (app, clipboard)
    }

    #[test]
    fn test_new_generates_password() {
        let (app, _) = sample_app();
        assert_eq!(app.password.chars().count(), 12);
        assert_eq!(app.report, engine::analyze(&app.password));
    }

    #[test]
    fn test_new_clamps_length() {
        let app = App::new(
            Config::default(),
            GenerationConfig {
                length: 500,
                ..GenerationConfig::default()
            },
            Theme::Dark,
            None,
            Box::new(MemoryClipboard::default()),
        );
        assert_eq!(app.settings.length, MAX_LENGTH);
        assert_eq!(app.password.chars().count(), MAX_LENGTH);
    }

    #[test]
    fn test_length_slider_regenerates_and_clamps() {
        let (mut app, _) = sample_app();
        app.adjust(1);
        assert_eq!(app.settings.length, 13);
        assert_eq!(app.password.chars().count(), 13);

        for _ in 0..20 {
            app.adjust(-1);
        }
        assert_eq!(app.settings.length, MIN_LENGTH);
        assert_eq!(app.password.chars().count(), MIN_LENGTH);

        for _ in 0..20 {
            app.adjust_page(true);
        }
        assert_eq!(app.settings.length, MAX_LENGTH);
    }

    #[test]
    fn test_toggle_numbers_regenerates() {
        let (mut app, _) = sample_app();
        app.focus = Field::Numbers;
        app.toggle_focused();
        assert!(!app.settings.include_numbers);
        let alphabet = effective_alphabet(&app.settings);
        assert!(app.password.chars().all(|c| alphabet.contains(&c)));
        assert!(!app.password.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_symbols_field_hidden_when_specials_off() {
        let (mut app, _) = sample_app();
        assert_eq!(app.visible_fields().len(), 4);

        app.focus = Field::Specials;
        app.adjust(1);
        assert!(!app.settings.include_specials);
        assert_eq!(app.visible_fields().len(), 3);

        app.next_field();
        assert_eq!(app.focus, Field::Length);
        app.previous_field();
        assert_eq!(app.focus, Field::Specials);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let (mut app, _) = sample_app();
        app.previous_field();
        assert_eq!(app.focus, Field::Symbols);
        app.next_field();
        assert_eq!(app.focus, Field::Length);
    }

    #[test]
    fn test_edit_symbols() {
        let (mut app, _) = sample_app();
        app.focus = Field::Symbols;
        app.activate();
        assert_eq!(app.input_mode, InputMode::EditSymbols);
        assert_eq!(app.symbols_input, "#");

        app.pop_symbol();
        app.push_symbol('~');
        app.push_symbol('\t');
        app.confirm_symbols_input();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.settings.special_characters, "~");
        assert!(app.symbols_input.is_empty());
    }

    #[test]
    fn test_cancel_symbols_keeps_settings() {
        let (mut app, _) = sample_app();
        app.start_symbols_input();
        app.push_symbol('%');
        app.cancel_symbols_input();
        assert_eq!(app.settings.special_characters, "#");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_symbols_input_needs_specials() {
        let (mut app, _) = sample_app();
        app.settings.include_specials = false;
        app.start_symbols_input();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_copy_password() {
        let (mut app, clipboard) = sample_app();
        app.copy_password();
        assert_eq!(clipboard.contents().as_deref(), Some(app.password.as_str()));
        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(msg, "Password copied to clipboard!");
        assert_eq!(kind, FlashKind::Success);
    }

    #[test]
    fn test_copy_password_unavailable() {
        let clipboard = MemoryClipboard::denied();
        let mut app = App::new(
            Config::default(),
            GenerationConfig::default(),
            Theme::Dark,
            None,
            Box::new(clipboard.clone()),
        );
        app.copy_password();
        assert!(clipboard.contents().is_none());
        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert!(msg.contains("clipboard unavailable"));
        assert_eq!(kind, FlashKind::Error);
    }

    #[test]
    fn test_toggle_theme() {
        let (mut app, _) = sample_app();
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.colors.base_bg, ThemeColors::light().base_bg);
    }

    #[test]
    fn test_regenerate_replaces_password() {
        let (mut app, _) = sample_app();
        app.settings.length = 64;
        let before = app.password.clone();
        app.regenerate();
        assert_ne!(app.password, before);
        assert_eq!(app.report.level, StrengthLevel::Strong);
    }

    #[test]
    fn test_save_settings_writes_config() {
        let path = std::env::temp_dir().join("pwforge_app_save.yaml");
        let _ = std::fs::remove_file(&path);

        let (mut app, _) = sample_app();
        app.config_path = Some(path.clone());
        app.settings.length = 30;
        app.toggle_theme();
        app.save_settings();

        let loaded = crate::config::load_config(Some(path.clone())).unwrap();
        assert_eq!(loaded.length, 30);
        assert_eq!(loaded.special_characters, "#");
        assert_eq!(loaded.theme, ThemeConfig::Light);
        assert_eq!(app.flash_message.as_ref().unwrap().1, FlashKind::Success);

        let _ = std::fs::remove_file(&path);
    }
}
