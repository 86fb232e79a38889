//! Ratatui rendering of the context menu.
//!
//! Layout is a small centered panel: two status rows, a separator, then the
//! action buttons in a column with Exit set apart at the bottom. The active
//! language drives both the labels and the text alignment (right-aligned for
//! right-to-left locales).

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::i18n::{Direction, Locale};
use crate::session::SessionState;
use crate::status::{StatusType, VisualCategory};

use super::state::{MenuButton, MenuState};

const MIN_PANEL_WIDTH: u16 = 28;

fn category_color(category: VisualCategory) -> Color {
    match category {
        VisualCategory::Connected => Color::Green,
        VisualCategory::Disconnected => Color::Red,
        VisualCategory::Loading => Color::Yellow,
    }
}

fn status_line<'a>(label: &'a str, status: StatusType, locale: Locale) -> Line<'a> {
    let color = category_color(status.category());
    let text = status.label(locale.translation);
    let mut spans = vec![
        Span::raw(label),
        Span::raw(" "),
        Span::styled(status.indicator(), Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(text, Style::default().fg(color)),
    ];
    // RTL mirrors the row: value first, label last.
    if locale.direction == Direction::Rtl {
        spans.reverse();
    }
    Line::from(spans)
}

fn button_line(button: MenuButton, focused: bool, locale: Locale) -> Line<'static> {
    let label = button.label(locale.translation);
    let mut style = if button.is_danger() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Line::from(Span::styled(format!("[ {label} ]"), style))
}

/// Panel width needed for the widest translated string, plus chrome.
fn panel_width(state: &SessionState) -> u16 {
    let locale = state.locale();
    let t = locale.translation;
    let widest = [
        t.connection_label,
        t.app_status_label,
        t.connected,
        t.disconnected,
        t.connecting,
        t.ready,
        t.initializing,
        t.error,
        t.refresh,
        t.settings,
        t.about,
        t.exit,
    ]
    .iter()
    .map(|s| s.width())
    .max()
    .unwrap_or(0);
    // Label column + indicator + gaps + borders.
    ((widest * 2 + 8) as u16).max(MIN_PANEL_WIDTH)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the menu over the full frame.
pub fn render(frame: &mut Frame, state: &SessionState, menu: &MenuState) {
    let locale = state.locale();
    let alignment = match state.direction() {
        Direction::Ltr => Alignment::Left,
        Direction::Rtl => Alignment::Right,
    };

    let mut lines = vec![
        status_line(locale.translation.connection_label, state.connection, locale),
        status_line(locale.translation.app_status_label, state.app_status, locale),
        Line::from(Span::styled(
            "─".repeat(MIN_PANEL_WIDTH as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for button in MenuButton::ALL {
        if button.is_danger() {
            lines.push(Line::from(Span::styled(
                "─".repeat(MIN_PANEL_WIDTH as usize),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(button_line(button, menu.focused() == button, locale));
    }

    // Two borders plus one line per row.
    let height = lines.len() as u16 + 2;
    let area = centered(frame.size(), panel_width(state), height);

    let panel = Paragraph::new(lines).alignment(alignment).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn category_colors_are_distinct() {
        let colors = [
            category_color(VisualCategory::Connected),
            category_color(VisualCategory::Disconnected),
            category_color(VisualCategory::Loading),
        ];
        assert_eq!(colors[0], Color::Green);
        assert_eq!(colors[1], Color::Red);
        assert_eq!(colors[2], Color::Yellow);
    }

    #[test]
    fn panel_width_grows_for_wide_scripts() {
        let mut state = SessionState::default();
        let en_width = panel_width(&state);
        state.apply_language(Language::Ja);
        // Japanese labels are double-width; the panel must not clip them.
        assert!(panel_width(&state) >= en_width);
        assert!(panel_width(&state) >= MIN_PANEL_WIDTH);
    }

    #[test]
    fn centered_area_fits_inside_parent() {
        let parent = Rect::new(0, 0, 80, 24);
        let area = centered(parent, 30, 10);
        assert!(area.x + area.width <= parent.width);
        assert!(area.y + area.height <= parent.height);
    }

    #[test]
    fn centered_area_clamps_to_small_terminals() {
        let parent = Rect::new(0, 0, 10, 4);
        let area = centered(parent, 40, 12);
        assert_eq!(area.width, 10);
        assert_eq!(area.height, 4);
    }

    #[test]
    fn status_line_uses_translated_value() {
        let locale = Locale::resolve(Language::He);
        let line = status_line(
            locale.translation.connection_label,
            StatusType::Connected,
            locale,
        );
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(rendered.contains("חיבור:"));
        assert!(rendered.contains("מחובר"));
        assert!(rendered.contains("●"));
    }

    #[test]
    fn rtl_mirrors_label_and_value_order() {
        let he = Locale::resolve(Language::He);
        let line = status_line(he.translation.connection_label, StatusType::Connected, he);
        assert_eq!(line.spans.first().map(|s| s.content.as_ref()), Some("מחובר"));
        assert_eq!(line.spans.last().map(|s| s.content.as_ref()), Some("חיבור:"));

        let en = Locale::resolve(Language::En);
        let line = status_line(en.translation.connection_label, StatusType::Connected, en);
        assert_eq!(
            line.spans.first().map(|s| s.content.as_ref()),
            Some("Connection:")
        );
        assert_eq!(line.spans.last().map(|s| s.content.as_ref()), Some("Connected"));
    }

    #[test]
    fn focused_button_is_highlighted() {
        let locale = Locale::resolve(Language::En);
        let line = button_line(MenuButton::Refresh, true, locale);
        let style = line.spans[0].style;
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn exit_button_renders_red() {
        let locale = Locale::resolve(Language::En);
        let line = button_line(MenuButton::Exit, false, locale);
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));
    }
}
