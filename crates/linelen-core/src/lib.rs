//! 行长统计核心库
//!
//! 设计要点：
//! - 引擎逐字节推进，只在行边界产出事件；状态按文件新建，不跨文件共享。
//! - 报告策略由运行配置一次性决定（普通 / 告警 / 仅最长行）。
//! - 文件按路径字节序依次处理，首个 I/O 错误即中止，输出顺序稳定可复现。

mod options;
mod error;
mod engine;
mod report;
mod scan;

pub use options::{LineOptions, ScanStats, DEFAULT_TAB_WIDTH};
pub use error::ScanError;
pub use engine::{LineBoundary, ScanState};
pub use report::{OutputRecord, ReportPolicy};
pub use scan::{scan_and_write, scan_file, scan_reader, sort_paths, FileSummary};
