//! 应用主状态结构

use handle_check_core::{FormState, Validator};

use crate::backend::AppConfig;
use crate::i18n::{Language, Translations};

use super::FocusField;

/// 加载动画帧
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 表单状态
    pub form: FormState,

    /// 校验状态机
    pub validator: Validator,

    /// 当前焦点
    pub focus: FocusField,

    /// 界面语言
    pub language: Language,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 加载动画帧序号
    spinner_frame: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        let language = Language::from_code(&config.language).unwrap_or_else(|| {
            log::warn!("Unknown language {:?}, falling back to en-US", config.language);
            Language::default()
        });

        Self {
            should_quit: false,
            form: FormState::with_theme(config.theme),
            validator: Validator::new(),
            focus: FocusField::default(),
            language,
            show_help: false,
            status_message: None,
            spinner_frame: 0,
        }
    }

    /// 当前语言的翻译
    pub fn texts(&self) -> &'static Translations {
        self.language.texts()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 推进加载动画（仅在校验中）
    pub fn tick(&mut self) {
        if self.form.is_checking() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        } else {
            self.spinner_frame = 0;
        }
    }

    /// 当前加载动画帧
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
