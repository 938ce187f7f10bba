//! 扫描错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 文件驱动的错误；任何一种都会中止整个运行
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("fopen: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("fread: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write output")]
    Write(#[source] io::Error),
}
