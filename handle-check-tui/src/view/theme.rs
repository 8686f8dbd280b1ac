//! 主题和样式定义

use handle_check_core::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// 页面背景
    pub background: Color,
    /// 表单卡片背景
    pub card: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 按钮背景
    pub accent: Color,
    /// 按钮文字
    pub accent_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl ThemeColors {
    /// 根据主题模式获取配色
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// 浅色主题：蓝色背景 + 白色卡片
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0x1d, 0xa1, 0xf2),
            card: Color::Rgb(255, 255, 255),
            fg: Color::Rgb(15, 20, 25),
            muted: Color::Rgb(83, 100, 113),
            border: Color::Rgb(207, 217, 222),
            border_focused: Color::Rgb(25, 118, 210),
            accent: Color::Rgb(25, 118, 210),
            accent_fg: Color::White,
            success: Color::Rgb(46, 125, 50),
            warning: Color::Rgb(237, 108, 2),
            error: Color::Rgb(211, 47, 47),
        }
    }

    /// 深色主题：黑色背景 + 深灰卡片
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            card: Color::Rgb(0x16, 0x18, 0x1c),
            fg: Color::Rgb(231, 233, 234),
            muted: Color::Rgb(113, 118, 123),
            border: Color::Rgb(47, 51, 54),
            border_focused: Color::Rgb(144, 202, 249),
            accent: Color::Rgb(144, 202, 249),
            accent_fg: Color::Black,
            success: Color::Rgb(102, 187, 106),
            warning: Color::Rgb(255, 167, 38),
            error: Color::Rgb(244, 67, 54),
        }
    }

    /// 卡片内普通文字
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.card)
    }

    /// 次要文字
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted).bg(self.card)
    }

    /// 边框样式
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.border_focused } else { self.border };
        Style::default().fg(color).bg(self.card)
    }

    /// 按钮样式
    pub fn button(&self, focused: bool) -> Style {
        let style = Style::default().bg(self.accent).fg(self.accent_fg);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style.add_modifier(Modifier::BOLD)
        }
    }

    /// 状态栏样式
    pub fn statusbar(&self) -> Style {
        Style::default().bg(self.card).fg(self.fg)
    }

    /// 快捷键提示样式
    pub fn hint_key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_follow_mode() {
        assert_eq!(ThemeColors::for_mode(ThemeMode::Light), ThemeColors::light());
        assert_eq!(ThemeColors::for_mode(ThemeMode::Dark), ThemeColors::dark());
        assert_eq!(ThemeColors::light().background, Color::Rgb(29, 161, 242));
        assert_eq!(ThemeColors::dark().card, Color::Rgb(22, 24, 28));
    }
}
