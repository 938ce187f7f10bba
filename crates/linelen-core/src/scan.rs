//! 扫描主流程：逐个文件分块读取，喂给行长引擎并按策略输出
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::engine::ScanState;
use crate::error::ScanError;
use crate::options::{LineOptions, ScanStats};
use crate::report::{OutputRecord, ReportPolicy};

/// 读取块大小（字节）。任何 >= 1 的值语义一致。
pub(crate) const CHUNK_SIZE: usize = 4096;

/// 单文件扫描结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub lines: u64,
    pub records: u64,
}

/// 按参数路径的原始字节排序（与 strcmp 顺序一致，不按路径组件比较）
pub fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().as_encoded_bytes().cmp(b.as_os_str().as_encoded_bytes()));
}

/// 依次扫描所有文件并把记录写入 `out`
/// - 文件级：先按路径排序，保证输出顺序可复现
/// - 文件内：记录按行号递增；max-only 的最长行记录总在该文件最后
/// - 首个打开/读取错误即中止，不继续后续文件
pub fn scan_and_write(paths: &[PathBuf], out: &mut dyn Write, opts: &LineOptions) -> Result<ScanStats, ScanError> {
    let mut files = paths.to_vec();
    sort_paths(&mut files);

    let policy = ReportPolicy::new(*opts);
    let mut stats = ScanStats::default();

    for path in &files {
        let summary = scan_file(path, out, &policy)?;
        stats.files_scanned += 1;
        stats.lines_scanned += summary.lines;
        stats.records_written += summary.records;
    }

    Ok(stats)
}

/// 打开并扫描单个文件（文件句柄在返回时关闭）
pub fn scan_file(path: &Path, out: &mut dyn Write, policy: &ReportPolicy) -> Result<FileSummary, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open { path: path.to_path_buf(), source })?;
    scan_reader(path, file, out, policy)
}

/// 扫描任意字节流；`path` 同时作为输出中的文件名与错误信息中的路径
pub fn scan_reader<R: Read>(
    path: &Path,
    mut reader: R,
    out: &mut dyn Write,
    policy: &ReportPolicy,
) -> Result<FileSummary, ScanError> {
    let opts = policy.options();
    let file_name = path.as_os_str().as_encoded_bytes();
    let mut state = ScanState::new();
    let mut records = 0u64;
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(ScanError::Read { path: path.to_path_buf(), source }),
        };

        for &b in &buf[..n] {
            if let Some(ev) = state.consume(b, opts) {
                if policy.should_report(&ev) {
                    OutputRecord { file_name, line: ev }.write_to(out).map_err(ScanError::Write)?;
                    records += 1;
                }
            }
        }
    }

    // 文件末尾无换行时补一个行边界
    if let Some(ev) = state.finish(opts) {
        if policy.should_report(&ev) {
            OutputRecord { file_name, line: ev }.write_to(out).map_err(ScanError::Write)?;
            records += 1;
        }
    }

    if let Some(longest) = policy.final_record(&state) {
        OutputRecord { file_name, line: longest }.write_to(out).map_err(ScanError::Write)?;
        records += 1;
    }

    debug!(path = %path.display(), lines = state.lines_seen(), records, "file scanned");
    Ok(FileSummary { lines: state.lines_seen(), records })
}
