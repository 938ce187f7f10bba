//! 行长统计选项与统计信息（模块）

/// 默认制表符宽度
pub const DEFAULT_TAB_WIDTH: u64 = 8;

/// 行长统计选项（单次运行内不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    /// 每个制表符计入的长度单位（平铺累加，不按列对齐）
    pub tab_width: u64,
    /// 告警阈值；设置后仅报告长度严格大于该值的行
    pub alert_threshold: Option<u64>,
    /// 仅报告每个文件中最长的一行
    pub max_col_only: bool,
}

impl LineOptions {
    /// 是否无条件输出每一行：未设置告警阈值且未开启 max-only
    pub fn always_print(&self) -> bool {
        self.alert_threshold.is_none() && !self.max_col_only
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            alert_threshold: None,
            max_col_only: false,
        }
    }
}

/// 运行统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub lines_scanned: u64,
    pub records_written: u64,
}
