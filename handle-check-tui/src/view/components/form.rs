//! 表单卡片组件
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │                                   [☾ Theme]  │
//! │ Welcome!                                     │
//! │ Enter the twitter handle of the account ...  │
//! │ ╭ Twitter Handle ──────────────────────────╮ │
//! │ │ @ TedTalks                      ✔ Valid  │ │
//! │ ╰──────────────────────────────────────────╯ │
//! │ Account ID: 123                     [ NEXT ] │
//! ╰──────────────────────────────────────────────╯
//! ```

use handle_check_core::{ThemeMode, ValidationStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{App, FocusField};
use crate::view::theme::ThemeColors;

/// 输入框前缀
const HANDLE_PREFIX: &str = "@ ";

/// 渲染表单卡片
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.border_style(false))
        .style(Style::default().bg(colors.card))
        .padding(Padding::horizontal(2));

    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 主题切换
            Constraint::Length(1), // 标题
            Constraint::Length(1), // 空行
            Constraint::Length(2), // 说明
            Constraint::Length(1), // 空行
            Constraint::Length(3), // 输入框
            Constraint::Length(1), // 账号 ID
            Constraint::Length(1), // 按钮
            Constraint::Min(0),
        ])
        .split(inner);

    render_theme_toggle(app, colors, frame, rows[0]);

    let texts = &app.texts().form;
    frame.render_widget(
        Paragraph::new(texts.heading).style(colors.text().add_modifier(Modifier::BOLD)),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(texts.instructions)
            .style(colors.text())
            .wrap(Wrap { trim: true }),
        rows[3],
    );

    render_input(app, colors, frame, rows[5]);
    render_footer(app, colors, frame, rows[6], rows[7]);
}

/// 右上角主题切换按钮：深色模式显示太阳，浅色模式显示月亮
fn render_theme_toggle(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let glyph = match app.form.theme() {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    };
    let label = format!("[{glyph} {}]", app.texts().form.theme_toggle);

    let style = if app.focus == FocusField::ThemeToggle {
        colors.button(true)
    } else {
        colors.muted_text()
    };

    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Right),
        area,
    );
}

/// 渲染账号输入框及其状态标记
fn render_input(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let texts = &app.texts().form;
    let focused = app.focus.is_input();

    let block = Block::default()
        .title(format!(" {} ", texts.label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.border_style(focused))
        .style(colors.text());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let adornment = adornment(app, colors);
    let adornment_width = u16::try_from(adornment.width()).unwrap_or(u16::MAX);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(adornment_width)])
        .split(inner);

    let prefix_width = u16::try_from(HANDLE_PREFIX.width()).unwrap_or(0);
    let text_width = usize::from(columns[0].width.saturating_sub(prefix_width + 1));

    let handle = app.form.handle();
    let visible = visible_tail(handle, text_width);
    let mut spans = vec![Span::styled(HANDLE_PREFIX, colors.muted_text())];
    if handle.is_empty() {
        spans.push(Span::styled(
            texts.placeholder,
            colors.muted_text().add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(visible, colors.text()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);
    frame.render_widget(Paragraph::new(adornment).alignment(Alignment::Right), columns[1]);

    if focused && !app.show_help {
        let cursor_offset = u16::try_from(visible.width()).unwrap_or(0) + prefix_width;
        let x = (columns[0].x + cursor_offset).min(columns[0].right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, columns[0].y));
    }
}

/// 输入框末尾的状态标记：校验中显示动画，完成后显示对勾或叉号
fn adornment<'a>(app: &App, colors: &ThemeColors) -> Line<'a> {
    let texts = &app.texts().form;
    let bg = Style::default().bg(colors.card);
    match app.form.status() {
        ValidationStatus::Idle => Line::default(),
        ValidationStatus::Checking => Line::from(Span::styled(
            format!("{} {} ", app.spinner(), texts.checking),
            bg.fg(colors.accent),
        )),
        ValidationStatus::Valid { .. } => Line::from(Span::styled(
            format!("✔ {} ", texts.valid),
            bg.fg(colors.success).add_modifier(Modifier::BOLD),
        )),
        ValidationStatus::Invalid => Line::from(Span::styled(
            format!("✘ {} ", texts.invalid),
            bg.fg(colors.error).add_modifier(Modifier::BOLD),
        )),
    }
}

/// 账号 ID 与 NEXT 按钮
fn render_footer(app: &App, colors: &ThemeColors, frame: &mut Frame, id_area: Rect, button_area: Rect) {
    let texts = &app.texts().form;

    if let Some(id) = app.form.resolved_id() {
        let line = Line::from(vec![
            Span::styled(format!("{}: ", texts.resolved_id), colors.muted_text()),
            Span::styled(id.to_string(), colors.text().fg(colors.success)),
        ]);
        frame.render_widget(Paragraph::new(line), id_area);
    }

    let button = Span::styled(
        format!("  {}  ", texts.next),
        colors.button(app.focus == FocusField::Submit),
    );
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Right),
        button_area,
    );
}

/// 取 `text` 末尾显示宽度不超过 `max_width` 的部分，保证光标所在的结尾可见
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_fully_visible() {
        assert_eq!(visible_tail("TedTalks", 20), "TedTalks");
        assert_eq!(visible_tail("", 5), "");
    }

    #[test]
    fn long_text_keeps_tail() {
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn wide_chars_counted_by_display_width() {
        // 每个汉字宽度为 2
        assert_eq!(visible_tail("账号校验", 5), "校验");
    }
}
