//! 焦点状态定义

/// 表单中可获得焦点的控件，按 Tab 顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// 账号输入框
    #[default]
    Input,
    /// NEXT 按钮
    Submit,
    /// 右上角主题切换按钮
    ThemeToggle,
}

impl FocusField {
    /// 下一个控件
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FocusField::Input => FocusField::Submit,
            FocusField::Submit => FocusField::ThemeToggle,
            FocusField::ThemeToggle => FocusField::Input,
        }
    }

    /// 上一个控件
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FocusField::Input => FocusField::ThemeToggle,
            FocusField::Submit => FocusField::Input,
            FocusField::ThemeToggle => FocusField::Submit,
        }
    }

    /// 是否是输入框
    pub fn is_input(self) -> bool {
        matches!(self, FocusField::Input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_cycle() {
        let mut focus = FocusField::Input;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, FocusField::Input);
        assert_eq!(FocusField::Input.prev(), FocusField::ThemeToggle);
        assert_eq!(FocusField::Submit.next().prev(), FocusField::Submit);
    }
}
