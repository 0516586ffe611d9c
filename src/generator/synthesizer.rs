//! 结果合成 - 流水线的统一终点

use crate::generator::decisions::Decisions;

/// 原样移交最终上下文
///
/// 不校验、不过滤，只作为一次运行对外交付前的唯一收口。
pub fn finalize(decisions: Decisions) -> Decisions {
    decisions
}
