//! 帮助弹窗

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::layout::centered_rect;
use crate::view::theme::ThemeColors;

/// 渲染帮助弹窗
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let help = &app.texts().help;

    let key_width = help
        .entries
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = help
        .entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<key_width$}  "), colors.hint_key()),
                Span::styled(*desc, colors.text()),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(help.close_hint, colors.muted_text())));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(4);
    let popup = centered_rect(area, 64, height);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_style(Style::default().fg(colors.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.border_style(true))
        .style(Style::default().bg(colors.card))
        .padding(Padding::uniform(1));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
