//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::ThemeColors;

/// 表单卡片最大宽度
const CARD_MAX_WIDTH: u16 = 84;
/// 表单卡片高度
const CARD_HEIGHT: u16 = 16;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let colors = ThemeColors::for_mode(app.form.theme());
    let size = frame.area();

    // 页面背景
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        size,
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, &colors, frame, main_layout[0]);

    let card_area = centered_rect(main_layout[1], CARD_MAX_WIDTH, CARD_HEIGHT);
    components::form::render(app, &colors, frame, card_area);

    components::statusbar::render(app, &colors, frame, main_layout[2]);

    // 帮助弹窗（在最上层）
    if app.show_help {
        components::help::render(app, &colors, frame, size);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let title = format!(" {} v{}", app.texts().common.app_name, env!("CARGO_PKG_VERSION"));
    let widget = Paragraph::new(title).style(
        Style::default()
            .bg(colors.background)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(widget, area);
}

/// 在 `area` 中居中放置一个不超过 `width` x `height` 的矩形
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 80, 16);
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 16);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 12);
    }

    #[test]
    fn centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(area, 80, 16);
        assert_eq!(rect, area);
    }
}
