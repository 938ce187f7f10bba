//! 报告策略：决定哪些行边界需要输出，以及输出格式
use std::io::{self, Write};

use crate::engine::{LineBoundary, ScanState};
use crate::options::LineOptions;

/// 报告策略（按运行配置构建一次，跨文件复用）
#[derive(Debug, Clone, Copy)]
pub struct ReportPolicy {
    opts: LineOptions,
    always_print: bool,
}

impl ReportPolicy {
    pub fn new(opts: LineOptions) -> Self {
        Self { opts, always_print: opts.always_print() }
    }

    pub fn options(&self) -> &LineOptions {
        &self.opts
    }

    /// 行边界是否需要立即输出
    /// - 告警：长度严格大于阈值（与 max-only 互不影响）
    /// - 普通模式：无条件输出
    pub fn should_report(&self, ev: &LineBoundary) -> bool {
        let alert = matches!(self.opts.alert_threshold, Some(t) if ev.length > t);
        alert || self.always_print
    }

    /// 文件扫描结束后的最长行记录（仅 max-only 且文件非空时）
    pub fn final_record(&self, state: &ScanState) -> Option<LineBoundary> {
        if self.opts.max_col_only {
            state.longest()
        } else {
            None
        }
    }
}

/// 单条输出记录：`<文件名>:<行号>\t<长度>`
#[derive(Debug, Clone, Copy)]
pub struct OutputRecord<'a> {
    /// 文件名按命令行参数原样输出（原始字节）
    pub file_name: &'a [u8],
    pub line: LineBoundary,
}

impl OutputRecord<'_> {
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.file_name)?;
        writeln!(out, ":{}\t{}", self.line.line_number, self.line.length)
    }
}
