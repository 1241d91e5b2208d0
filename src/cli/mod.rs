//! 命令行界面
//!
//! `undigraph-cli` 使用的命令解析、执行、结果打印和 Tab 补全

mod commands;
mod completer;
mod printer;

pub use commands::{parse_command, Command, CommandResult, Console};
pub use completer::GraphCompleter;
pub use printer::{OutputFormat, Printer};

use std::path::PathBuf;

/// 历史记录文件名（位于用户主目录）
pub const HISTORY_FILE_NAME: &str = ".undigraph_history";

/// 控制台配置
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// 结果输出格式
    pub output: OutputFormat,
    /// 历史记录文件，None 表示不保存
    pub history_file: Option<PathBuf>,
    /// 最多保留的历史条数
    pub max_history: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)),
            max_history: 1000,
        }
    }
}

impl ConsoleConfig {
    /// 设置输出格式
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// 关闭历史记录
    pub fn without_history(mut self) -> Self {
        self.history_file = None;
        self
    }
}
