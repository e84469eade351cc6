use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};
use crate::engine::{MAX_LENGTH, MIN_LENGTH};
use crate::tui::app::{App, Field, FlashKind, InputMode};
use crate::tui::theme::ThemeColors;

const SLIDER_WIDTH: usize = 30;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let colors = &app.colors;
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.base_bg).fg(colors.base_fg)),
        area,
    );

    // Password box grows with the password, as far as the fixed rows allow.
    // Title, strength, gap, form, status and the box borders take 10 rows.
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let max_rows = area.height.saturating_sub(10).max(1) as usize;
    let password_lines = password_rows(&app.password, inner_width).len().clamp(1, max_rows) as u16;

    // Layout: Title(1) + Password(box) + Strength(1) + gap + Form(4) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),                  // Title bar
        Constraint::Length(password_lines + 2), // Password box
        Constraint::Length(1),                  // Strength
        Constraint::Length(1),                  // Gap
        Constraint::Length(4),                  // Form
        Constraint::Fill(1),
        Constraint::Length(1),                  // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_password(frame, chunks[1], app);
    render_strength(frame, chunks[2], app);
    render_form(frame, chunks[4], app);
    render_status_bar(frame, chunks[6], app);

    match app.input_mode {
        InputMode::Help => render_help_popup(frame, &app.colors),
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Normal | InputMode::EditSymbols => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = "Password Generator";
    let theme_text = format!("{} theme", app.theme.label());
    let padding_len = (area.width as usize).saturating_sub(title.len() + theme_text.len());

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(app.colors.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(theme_text, Style::default().fg(app.colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_password(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" Password ")
        .border_style(Style::default().fg(app.colors.password_border));

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let lines: Vec<Line> = password_rows(&app.password, inner_width)
        .into_iter()
        .map(Line::from)
        .collect();

    let password = Paragraph::new(lines)
        .style(Style::default().fg(app.colors.password_fg).bold())
        .block(block);
    frame.render_widget(password, area);
}

/// Split a password into rows of at most `width` terminal cells.
///
/// Breaks fall between characters, never at spaces, so every character of
/// the password is kept and double-width glyphs are counted as two cells.
fn password_rows(password: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for c in password.chars() {
        let char_width = Span::raw(c.to_string()).width();
        if row_width + char_width > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += char_width;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn render_strength(frame: &mut Frame, area: Rect, app: &App) {
    let level = app.report.level;
    let color = app.colors.strength_color(level);

    let mut spans = vec![
        Span::styled("Strength: ", Style::default().fg(app.colors.field_label)),
        Span::styled(format!("{:<9}", level.as_str()), Style::default().fg(color).bold()),
    ];
    spans.extend(strength_bar(app.report.points, app.report.checks.len(), color, app.colors.bar_empty).spans);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One block per rule, filled for each rule passed
fn strength_bar(points: u8, total: usize, filled_color: Color, empty_color: Color) -> Line<'static> {
    let filled = (points as usize).min(total);
    let empty = total - filled;

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("■ ".repeat(filled), Style::default().fg(filled_color)));
    }
    if empty > 0 {
        spans.push(Span::styled("□ ".repeat(empty), Style::default().fg(empty_color)));
    }
    Line::from(spans)
}

fn length_slider(length: usize, width: usize, colors: &ThemeColors) -> Vec<Span<'static>> {
    let range = (MAX_LENGTH - MIN_LENGTH) as f64;
    let ratio = (length.saturating_sub(MIN_LENGTH) as f64 / range).min(1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    vec![
        Span::raw("["),
        Span::styled("█".repeat(filled), Style::default().fg(colors.slider_filled)),
        Span::styled("░".repeat(empty), Style::default().fg(colors.bar_empty)),
        Span::raw("] "),
        Span::styled(length.to_string(), Style::default().bold()),
    ]
}

fn toggle_spans(on: bool, label: &'static str, colors: &ThemeColors) -> Vec<Span<'static>> {
    let (mark, color) = if on {
        ("[x] ", colors.toggle_on)
    } else {
        ("[ ] ", colors.toggle_off)
    };
    vec![
        Span::styled(mark, Style::default().fg(color).bold()),
        Span::raw(label),
    ]
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let label_style = |field: Field| {
        if field == app.focus && app.input_mode == InputMode::Normal {
            colors.field_focused
        } else {
            Style::default().fg(colors.field_label)
        }
    };

    let mut lines = Vec::new();
    for field in app.visible_fields() {
        let (label, value) = match field {
            Field::Length => (
                "Length   ",
                length_slider(app.settings.length, SLIDER_WIDTH, colors),
            ),
            Field::Numbers => (
                "Numbers  ",
                toggle_spans(app.settings.include_numbers, "Include Numbers", colors),
            ),
            Field::Specials => (
                "Specials ",
                toggle_spans(app.settings.include_specials, "Include Special Characters", colors),
            ),
            Field::Symbols => {
                let value = if app.input_mode == InputMode::EditSymbols {
                    vec![
                        Span::styled(
                            format!("{}|", app.symbols_input),
                            Style::default().fg(colors.slider_filled).bold(),
                        ),
                    ]
                } else if app.settings.special_characters.is_empty() {
                    vec![Span::styled("(none)", Style::default().fg(colors.muted))]
                } else {
                    vec![Span::raw(app.settings.special_characters.clone())]
                };
                ("Custom   ", value)
            }
        };

        let mut spans = vec![Span::styled(label, label_style(field)), Span::raw(" ")];
        spans.extend(value);
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => colors.flash_success,
            FlashKind::Error => colors.flash_error,
            FlashKind::Info => colors.base_fg,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.input_mode {
            InputMode::EditSymbols => &[
                ("Enter", ":confirm "),
                ("Esc", ":cancel "),
                ("Backspace", ":delete"),
            ],
            _ => &[
                ("j/k", ":field "),
                ("h/l", ":adjust "),
                ("g", ":generate "),
                ("c", ":copy "),
                ("t", ":theme "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn popup_block(title: &'static str, colors: &ThemeColors) -> Block<'static> {
    Block::bordered()
        .title(title)
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg))
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, colors: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 16, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = popup_block(" Keyboard Shortcuts ", colors);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let entries = [
        ("j / k / Up/Dn", "Move between fields"),
        ("h / l / Lt/Rt", "Adjust length, flip toggle"),
        ("PgUp / PgDn  ", "Length +/- 10"),
        ("Space        ", "Flip focused toggle"),
        ("Enter        ", "Edit symbols / generate"),
        ("g / r        ", "Generate new password"),
        ("c            ", "Copy to clipboard"),
        ("t            ", "Toggle dark/light theme"),
        ("s            ", "Save settings as defaults"),
        ("b            ", "Strength breakdown"),
        ("q / Ctrl-c   ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{} ", key), key_style),
                Span::raw(*action),
            ])
        })
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Render the strength breakdown popup
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let colors = &app.colors;
    let popup_area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = popup_block(" Strength Breakdown ", colors);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let level = app.report.level;
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(level.as_str(), Style::default().fg(colors.strength_color(level)).bold()),
            Span::raw(format!(" ({}/{} rules)", app.report.points, app.report.checks.len())),
        ]),
        Line::from(""),
    ];

    for check in &app.report.checks {
        let (mark, color) = if check.passed {
            ("[x] ", colors.toggle_on)
        } else {
            ("[ ] ", colors.toggle_off)
        };
        lines.push(Line::from(vec![
            Span::styled(mark, Style::default().fg(color).bold()),
            Span::styled(format!("{:<8}", check.label), Style::default().bold()),
            Span::raw(check.description),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc / b: close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
