use anyhow::{Context, Result};
use clap::Parser;
use linelen_core::{scan_and_write, LineOptions, DEFAULT_TAB_WIDTH};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

const USAGE: &str = "\
linelen: Get length of each line in a file.
usage:
    linelen [OPTIONS] FILENAME
options:
    -a <int>  Alert only when a line is longer than the given threshold.
    -h        Display this help menu.
    -m        Show only the maximum line length.
    -t <int>  Set the number of characters to count for each tab. (Default 8)
";

/// 命令行入口（基于 clap；帮助与用法文本由 `USAGE` 统一输出）
#[derive(Parser, Debug)]
#[command(
    name = "linelen",
    about = "Get length of each line in a file.",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// 告警阈值：仅输出长度严格大于该值的行
    #[arg(short = 'a', value_name = "int", value_parser = parse_count)]
    alert: Option<u64>,

    /// 显示帮助并退出
    #[arg(short = 'h')]
    show_help: bool,

    /// 每个文件只输出最长的一行
    #[arg(short = 'm')]
    max_col_only: bool,

    /// 每个制表符计入的字符数
    #[arg(short = 't', value_name = "int", value_parser = parse_tab_width, default_value_t = DEFAULT_TAB_WIDTH)]
    tab_width: u64,

    /// 输入文件（处理前按字节序排序）
    #[arg(value_name = "FILENAME")]
    files: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // 日志写到 stderr，stdout 只留给统计记录；RUST_LOG 控制等级
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            debug!(error = %e, "invalid arguments");
            print_usage()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.show_help {
        print_usage()?;
        return Ok(ExitCode::SUCCESS);
    }
    if cli.files.is_empty() {
        print_usage()?;
        return Ok(ExitCode::FAILURE);
    }

    let opts = LineOptions {
        tab_width: cli.tab_width,
        alert_threshold: cli.alert,
        max_col_only: cli.max_col_only,
    };
    info!(files = cli.files.len(), ?opts, "starting scan");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let res = scan_and_write(&cli.files, &mut out, &opts);
    // 出错前已写出的记录也要落到 stdout
    let flushed = out.flush();
    let stats = res?;
    flushed.context("flush stdout")?;

    info!(
        files_scanned = stats.files_scanned,
        lines_scanned = stats.lines_scanned,
        records_written = stats.records_written,
        "scan finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn print_usage() -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(USAGE.as_bytes()).context("write usage")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

/// 解析非负整数：只接受非空的 ASCII 数字串（拒绝 `+5`、`-1` 等）
fn parse_count(s: &str) -> Result<u64, String> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("not a non-negative integer: {s:?}"));
    }
    s.parse::<u64>().map_err(|e| format!("{s:?}: {e}"))
}

/// 解析制表符宽度（正整数）
fn parse_tab_width(s: &str) -> Result<u64, String> {
    match parse_count(s)? {
        0 => Err("tab width must be at least 1".to_string()),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_accepts_digits_only() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("0080"), Ok(80));
        assert!(parse_count("").is_err());
        assert!(parse_count("+5").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count("12a").is_err());
        assert!(parse_count("99999999999999999999999").is_err());
    }

    #[test]
    fn tab_width_must_be_positive() {
        assert_eq!(parse_tab_width("4"), Ok(4));
        assert!(parse_tab_width("0").is_err());
    }

    #[test]
    fn cli_flags_map_to_options() {
        let cli = Cli::try_parse_from(["linelen", "-m", "-a", "80", "-t4", "b.txt", "a.txt"]).unwrap();
        assert_eq!(cli.alert, Some(80));
        assert!(cli.max_col_only);
        assert_eq!(cli.tab_width, 4);
        assert_eq!(cli.files, vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
    }

    #[test]
    fn repeated_option_keeps_last() {
        let cli = Cli::try_parse_from(["linelen", "-a", "1", "-a", "7", "f"]).unwrap();
        assert_eq!(cli.alert, Some(7));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["linelen", "-x", "f"]).is_err());
        assert!(Cli::try_parse_from(["linelen", "--help"]).is_err());
        assert!(Cli::try_parse_from(["linelen", "f", "-a"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
