//! 行长累计引擎（逐字节状态机）
//!
//! - `\n`：行边界，产出 `LineBoundary` 后清零当前长度、行号加一
//! - `\t`：当前长度加 `tab_width`（平铺累加，不对齐到制表位）
//! - `\r`：忽略
//! - 其他任意字节：长度加一
use crate::options::LineOptions;

/// 行边界事件：行号（从 1 开始）与该行长度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBoundary {
    pub line_number: u64,
    pub length: u64,
}

/// 单个文件的扫描状态（每个文件新建，文件处理完即丢弃）
#[derive(Debug, Clone)]
pub struct ScanState {
    current_length: u64,
    current_line_number: u64,
    longest_length: u64,
    longest_line_number: u64,
    last_byte: Option<u8>,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            current_length: 0,
            current_line_number: 1,
            longest_length: 0,
            longest_line_number: 1,
            last_byte: None,
        }
    }

    /// 处理一个输入字节；遇到行边界时返回事件
    pub fn consume(&mut self, byte: u8, opts: &LineOptions) -> Option<LineBoundary> {
        self.last_byte = Some(byte);
        match byte {
            b'\n' => Some(self.close_line(opts)),
            b'\t' => {
                self.current_length = self.current_length.saturating_add(opts.tab_width);
                None
            }
            b'\r' => None,
            _ => {
                self.current_length = self.current_length.saturating_add(1);
                None
            }
        }
    }

    /// 按顺序处理一段字节，事件交给 `on_line`
    pub fn consume_slice<F>(&mut self, bytes: &[u8], opts: &LineOptions, mut on_line: F)
    where
        F: FnMut(LineBoundary),
    {
        for &b in bytes {
            if let Some(ev) = self.consume(b, opts) {
                on_line(ev);
            }
        }
    }

    /// 输入结束：非空且末尾不是 `\n` 时补一个合成的行边界
    pub fn finish(&mut self, opts: &LineOptions) -> Option<LineBoundary> {
        match self.last_byte {
            Some(b) if b != b'\n' => self.consume(b'\n', opts),
            _ => None,
        }
    }

    /// 最长行记录；输入为空时为 None
    pub fn longest(&self) -> Option<LineBoundary> {
        self.last_byte.map(|_| LineBoundary {
            line_number: self.longest_line_number,
            length: self.longest_length,
        })
    }

    /// 已完成的行数
    pub fn lines_seen(&self) -> u64 {
        self.current_line_number - 1
    }

    pub fn current_line_number(&self) -> u64 {
        self.current_line_number
    }

    fn close_line(&mut self, opts: &LineOptions) -> LineBoundary {
        let ev = LineBoundary {
            line_number: self.current_line_number,
            length: self.current_length,
        };
        // 严格大于：并列时保留最先出现的行
        if opts.max_col_only && ev.length > self.longest_length {
            self.longest_length = ev.length;
            self.longest_line_number = ev.line_number;
        }
        self.current_length = 0;
        self.current_line_number = self.current_line_number.saturating_add(1);
        ev
    }
}
