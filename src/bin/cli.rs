//! undigraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use tracing_subscriber::EnvFilter;
use undigraph::cli::{CommandResult, Console, ConsoleConfig, GraphCompleter, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "undigraph-cli")]
#[command(about = "undigraph 无向图命令行工具", version)]
struct Args {
    /// 执行以分号分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 不读写历史记录
    #[arg(long)]
    no_history: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("无效的日志级别: {}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ConsoleConfig::default();
    if args.json {
        config = config.with_output(OutputFormat::Json);
    }
    if args.no_history {
        config = config.without_history();
    }

    let mut console = Console::new(&config);

    // 单次执行模式
    if let Some(script) = args.execute {
        for line in script.split(';') {
            if report(console.execute_line(line)) {
                break;
            }
        }
        return Ok(());
    }

    run_interactive(&mut console, &config)
}

/// 输出命令结果，返回是否需要退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            println!("{}", msg.trim_end());
            false
        }
        CommandResult::Error(err) => {
            eprintln!("错误: {}", err);
            false
        }
    }
}

fn run_interactive(console: &mut Console, config: &ConsoleConfig) -> anyhow::Result<()> {
    println!("undigraph CLI v{} - 泛型无向图", undigraph::VERSION);
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let editor_config = Config::builder()
        .max_history_size(config.max_history)?
        .auto_add_history(false)
        .build();
    let mut editor: Editor<GraphCompleter, DefaultHistory> = Editor::with_config(editor_config)?;
    editor.set_helper(Some(GraphCompleter::new()));

    if let Some(path) = &config.history_file {
        // 首次运行时历史文件不存在
        if editor.load_history(path).is_err() {
            tracing::debug!(path = %path.display(), "未加载历史记录");
        }
    }

    loop {
        if let Some(helper) = editor.helper_mut() {
            helper.set_labels(console.graph().labels().cloned());
        }

        match editor.readline("undigraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line)?;
                if report(console.execute_line(line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "保存历史记录失败");
        }
    }

    println!("再见！");
    Ok(())
}
