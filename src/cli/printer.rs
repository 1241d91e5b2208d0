//! 结果打印器
//!
//! 提供表格和 JSON 两种格式的结果输出

use crate::algorithm::PathResult;
use crate::graph::Vertex;
use prettytable::{format, row, Cell, Row, Table};
use serde_json::json;
use std::fmt::Display;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 表格
    #[default]
    Table,
    /// JSON
    Json,
}

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 设置输出格式
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 打印顶点列表（标签、度数、邻居及权重）
    pub fn print_vertices<T: Display>(&self, vertices: &[&Vertex<T>]) -> String {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<_> = vertices
                    .iter()
                    .map(|v| {
                        let edges: Vec<_> = v
                            .edges()
                            .map(|e| json!({ "target": e.target().to_string(), "weight": e.weight() }))
                            .collect();
                        json!({ "label": v.label().to_string(), "edges": edges })
                    })
                    .collect();
                to_json(&items)
            }
            OutputFormat::Table => {
                if vertices.is_empty() {
                    return "Empty set\n".to_string();
                }

                let mut table = new_table();
                table.set_titles(row!["Vertex", "Degree", "Neighbors"]);
                for v in vertices {
                    let neighbors = v
                        .edges()
                        .map(|e| format!("{} ({})", e.target(), e.weight()))
                        .collect::<Vec<_>>()
                        .join(", ");
                    table.add_row(Row::new(vec![
                        Cell::new(&v.label().to_string()),
                        Cell::new(&v.degree().to_string()),
                        Cell::new(&neighbors),
                    ]));
                }
                format!("{}{} vertex(es) in set\n", table, vertices.len())
            }
        }
    }

    /// 打印遍历或查询得到的标签序列
    pub fn print_labels<'a, T, I>(&self, title: &str, labels: I) -> String
    where
        T: Display + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let labels: Vec<String> = labels.into_iter().map(ToString::to_string).collect();
        match self.format {
            OutputFormat::Json => to_json(&labels),
            OutputFormat::Table => {
                if labels.is_empty() {
                    return format!("{}: (none)\n", title);
                }
                format!("{} ({}): {}\n", title, labels.len(), labels.join(" -> "))
            }
        }
    }

    /// 打印最短路径结果
    pub fn print_path<T: Display>(&self, result: Option<&PathResult<T>>) -> String {
        match (self.format, result) {
            (OutputFormat::Json, Some(path)) => {
                let vertices: Vec<String> = path.vertices.iter().map(ToString::to_string).collect();
                to_json(&json!({
                    "vertices": vertices,
                    "length": path.length,
                    "total_weight": path.total_weight,
                }))
            }
            (OutputFormat::Json, None) => to_json(&json!(null)),
            (OutputFormat::Table, Some(path)) => {
                let route = path
                    .vertices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                format!(
                    "最短路径长度: {}\n路径: {}\n总权重: {}\n",
                    path.length, route, path.total_weight
                )
            }
            (OutputFormat::Table, None) => "未找到路径\n".to_string(),
        }
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, directed_edges: usize) -> String {
        match self.format {
            OutputFormat::Json => to_json(&json!({
                "vertex_count": vertex_count,
                "edge_count": edge_count,
                "directed_edges": directed_edges,
            })),
            OutputFormat::Table => {
                let mut table = new_table();
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", vertex_count.to_string()]);
                table.add_row(row!["Edge Count", edge_count.to_string()]);
                table.add_row(row!["Directed Edge Records", directed_edges.to_string()]);
                table.to_string()
            }
        }
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   undigraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  stats, info                显示图统计信息
  vertices, ls               列出所有顶点及其邻居
  clear                      清空图

顶点与边:
  vertex, v <标签>           添加顶点（已存在则替换并丢弃其边）
  remove-vertex, rv <标签>   删除顶点及其所有边
  edge, e <A> <B> [权重]     添加无向边，权重默认 0
  remove-edge, re <A> <B> [权重]
                             删除无向边
  has-edge <A> <B>           是否存在无权边（任一方向）
  neighbors, n <标签>        按插入顺序列出邻居

遍历与路径:
  bfs <起点>                 广度优先遍历
  path <起点> <终点>         跳数最短路径
  hops <起点> <N>            距离恰好为 N 跳的顶点

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

fn to_json<S: serde::Serialize + ?Sized>(value: &S) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => format!("{}\n", s),
        Err(e) => format!("序列化失败: {}\n", e),
    }
}
