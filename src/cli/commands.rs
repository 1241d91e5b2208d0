//! 控制台命令处理
//!
//! 解析一行输入为 [`Command`]，并在控制台持有的图上执行

use super::printer::{OutputFormat, Printer};
use super::ConsoleConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, UNWEIGHTED};

/// 控制台命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    Vertices,
    Clear,
    AddVertex(String),
    RemoveVertex(String),
    AddEdge { begin: String, end: String, weight: f64 },
    RemoveEdge { begin: String, end: String, weight: f64 },
    HasEdge { begin: String, end: String },
    Neighbors(String),
    Bfs(String),
    Path { origin: String, destination: String },
    Hops { origin: String, n: usize },
}

/// 命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 解析一行命令
pub fn parse_command(input: &str) -> Result<Command> {
    let mut parts = input.split_whitespace();
    let cmd = match parts.next() {
        Some(cmd) => cmd.to_lowercase(),
        None => return Err(Error::ParseError("空命令".to_string())),
    };
    let args: Vec<&str> = parts.collect();

    let command = match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "stats" | "info" => Command::Stats,
        "vertices" | "ls" => Command::Vertices,
        "clear" => Command::Clear,
        "vertex" | "v" => Command::AddVertex(single(&args, "vertex <标签>")?),
        "remove-vertex" | "rv" => Command::RemoveVertex(single(&args, "remove-vertex <标签>")?),
        "edge" | "e" => {
            let (begin, end, weight) = weighted_pair(&args, "edge <A> <B> [权重]")?;
            Command::AddEdge { begin, end, weight }
        }
        "remove-edge" | "re" => {
            let (begin, end, weight) = weighted_pair(&args, "remove-edge <A> <B> [权重]")?;
            Command::RemoveEdge { begin, end, weight }
        }
        "has-edge" => {
            let (begin, end) = pair(&args, "has-edge <A> <B>")?;
            Command::HasEdge { begin, end }
        }
        "neighbors" | "n" => Command::Neighbors(single(&args, "neighbors <标签>")?),
        "bfs" => Command::Bfs(single(&args, "bfs <起点>")?),
        "path" | "shortest" => {
            let (origin, destination) = pair(&args, "path <起点> <终点>")?;
            Command::Path {
                origin,
                destination,
            }
        }
        "hops" => {
            let (origin, n) = pair(&args, "hops <起点> <N>")?;
            let n = n
                .parse::<usize>()
                .map_err(|_| Error::ParseError(format!("无效的跳数: {}", n)))?;
            Command::Hops { origin, n }
        }
        other => {
            return Err(Error::ParseError(format!(
                "未知命令: {}。输入 'help' 查看帮助。",
                other
            )))
        }
    };

    Ok(command)
}

fn single(args: &[&str], usage: &str) -> Result<String> {
    match args {
        [label] => Ok(label.to_string()),
        _ => Err(Error::ParseError(format!("用法: {}", usage))),
    }
}

fn pair(args: &[&str], usage: &str) -> Result<(String, String)> {
    match args {
        [a, b] => Ok((a.to_string(), b.to_string())),
        _ => Err(Error::ParseError(format!("用法: {}", usage))),
    }
}

fn weighted_pair(args: &[&str], usage: &str) -> Result<(String, String, f64)> {
    match args {
        [a, b] => Ok((a.to_string(), b.to_string(), UNWEIGHTED)),
        [a, b, w] => {
            let weight = w
                .parse::<f64>()
                .map_err(|_| Error::ParseError(format!("无效的权重: {}", w)))?;
            Ok((a.to_string(), b.to_string(), weight))
        }
        _ => Err(Error::ParseError(format!("用法: {}", usage))),
    }
}

/// 控制台状态：持有图与打印器
pub struct Console {
    graph: Graph<String>,
    printer: Printer,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            graph: Graph::new(),
            printer: Printer::new(config.output),
        }
    }

    /// 当前图
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    pub fn output_format(&self) -> OutputFormat {
        self.printer.format()
    }

    /// 解析并执行一行输入
    pub fn execute_line(&mut self, input: &str) -> CommandResult {
        let input = input.trim();
        if input.is_empty() {
            return CommandResult::Continue;
        }
        match parse_command(input) {
            Ok(cmd) => self.execute(cmd),
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    /// 执行命令
    pub fn execute(&mut self, cmd: Command) -> CommandResult {
        match self.run(cmd) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    fn run(&mut self, cmd: Command) -> Result<CommandResult> {
        let message = match cmd {
            Command::Help => Printer::print_help(),
            Command::Quit => return Ok(CommandResult::Exit),
            Command::Stats => self.printer.print_stats(
                self.graph.vertex_count(),
                self.graph.undirected_edge_count(),
                self.graph.edge_count(),
            ),
            Command::Vertices => self.printer.print_vertices(&self.graph.vertices()),
            Command::Clear => {
                self.graph.clear();
                "图已清空".to_string()
            }
            Command::AddVertex(label) => {
                if self.graph.add_vertex(label.clone()) {
                    format!("已添加顶点 {}", label)
                } else {
                    format!("顶点 {} 已存在，已替换为新顶点", label)
                }
            }
            Command::RemoveVertex(label) => {
                let removed = self.graph.remove_vertex(&label)?;
                format!("已删除顶点 {}", removed.label())
            }
            Command::AddEdge { begin, end, weight } => {
                self.graph.try_add_edge(&begin, &end, weight)?;
                format!("已添加边 {} - {} (权重 {})", begin, end, weight)
            }
            Command::RemoveEdge { begin, end, weight } => {
                self.graph.try_remove_edge(&begin, &end, weight)?;
                format!("已删除边 {} - {} (权重 {})", begin, end, weight)
            }
            Command::HasEdge { begin, end } => self.graph.has_edge(&begin, &end).to_string(),
            Command::Neighbors(label) => {
                let vertex = self.graph.require_vertex(&label)?;
                self.printer.print_labels("邻居", vertex.neighbors())
            }
            Command::Bfs(origin) => {
                let order = self.graph.breadth_first_traversal(&origin)?;
                self.printer.print_labels("BFS", &order)
            }
            Command::Path {
                origin,
                destination,
            } => {
                let path = self.graph.find_path(&origin, &destination)?;
                self.printer.print_path(path.as_ref())
            }
            Command::Hops { origin, n } => {
                let found = self.graph.n_hop_neighbors(&origin, n)?;
                self.printer.print_labels(&format!("{} 跳邻居", n), &found)
            }
        };

        Ok(CommandResult::Message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        Console::new(&ConsoleConfig::default().without_history())
    }

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("Q").unwrap(), Command::Quit);
        assert_eq!(
            parse_command("v Alice").unwrap(),
            Command::AddVertex("Alice".to_string())
        );
        assert_eq!(
            parse_command("edge A B").unwrap(),
            Command::AddEdge {
                begin: "A".to_string(),
                end: "B".to_string(),
                weight: 0.0
            }
        );
        assert_eq!(
            parse_command("re A B 1.5").unwrap(),
            Command::RemoveEdge {
                begin: "A".to_string(),
                end: "B".to_string(),
                weight: 1.5
            }
        );
        assert_eq!(
            parse_command("hops A 2").unwrap(),
            Command::Hops {
                origin: "A".to_string(),
                n: 2
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_command(""), Err(Error::ParseError(_))));
        assert!(matches!(parse_command("bfs"), Err(Error::ParseError(_))));
        assert!(matches!(parse_command("edge A B x"), Err(Error::ParseError(_))));
        assert!(matches!(parse_command("hops A -1"), Err(Error::ParseError(_))));
        assert!(matches!(parse_command("frobnicate"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_console_session() {
        let mut console = console();

        for line in ["v A", "v B", "v C", "v D", "e A B", "e B C", "e C D"] {
            assert!(matches!(console.execute_line(line), CommandResult::Message(_)));
        }
        assert_eq!(console.graph().edge_count(), 6);

        assert_eq!(message(console.execute_line("has-edge B A")), "true");
        assert_eq!(
            message(console.execute_line("bfs A")),
            "BFS (4): A -> B -> C -> D\n"
        );
        assert!(message(console.execute_line("path A D")).contains("最短路径长度: 3"));
        assert_eq!(
            message(console.execute_line("hops A 2")),
            "2 跳邻居 (1): C\n"
        );

        assert!(matches!(console.execute_line("rv B"), CommandResult::Message(_)));
        assert_eq!(console.graph().edge_count(), 2);
        assert_eq!(message(console.execute_line("path A D")), "未找到路径\n");
    }

    #[test]
    fn test_console_reports_failures() {
        let mut console = console();
        console.execute_line("v A");

        assert!(matches!(console.execute_line("e A A"), CommandResult::Error(_)));
        assert!(matches!(console.execute_line("bfs Z"), CommandResult::Error(_)));
        assert!(matches!(console.execute_line("rv Z"), CommandResult::Error(_)));
        assert_eq!(console.execute_line("   "), CommandResult::Continue);
        assert_eq!(console.execute_line("quit"), CommandResult::Exit);
    }
}
