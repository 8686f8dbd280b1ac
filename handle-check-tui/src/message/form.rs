//! 表单消息

use handle_check_core::CheckOutcome;

/// 表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入
    Clear,
    /// 提交当前输入
    Submit,
    /// 后台查询完成
    LookupFinished(CheckOutcome),
}
