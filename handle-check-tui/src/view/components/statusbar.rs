//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusField};
use crate::view::theme::ThemeColors;

/// 渲染状态栏
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let separator = Style::default().fg(colors.border);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(*key, colors.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, colors.hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(colors.statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &app.texts().hints;
    let mut items = Vec::new();

    match app.focus {
        FocusField::Input => {
            items.push(("Enter", hints.submit));
            items.push(("Ctrl+u", hints.clear));
        }
        FocusField::Submit | FocusField::ThemeToggle => {
            items.push(("Enter", hints.activate));
        }
    }

    items.push(("Tab", hints.switch_focus));
    items.push(("Alt+t", hints.toggle_theme));
    items.push(("F1", hints.help));
    items.push(("Esc", hints.quit));

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_hint_only_for_input() {
        let mut app = App::default();
        assert!(get_hints(&app).iter().any(|(key, _)| *key == "Ctrl+u"));

        app.focus = FocusField::Submit;
        assert!(!get_hints(&app).iter().any(|(key, _)| *key == "Ctrl+u"));
    }
}
