use std::sync::Arc;

use crate::config::Config;
use crate::generator::templates::TemplateCatalog;

/// 生成器上下文
///
/// 按启动显式构造后以引用传递，不存在进程级全局状态。
#[derive(Clone)]
pub struct GeneratorContext {
    /// 配置
    pub config: Config,
    /// 模板目录，加载一次后只读共享
    pub templates: Arc<TemplateCatalog>,
}

impl GeneratorContext {
    /// 创建新的生成器上下文
    pub fn new(config: Config) -> Self {
        Self {
            config,
            templates: Arc::new(TemplateCatalog::preset()),
        }
    }
}
