//! undigraph - 泛型无向图
//!
//! 以标签为键的无向图库，支持：
//! - 顶点与带权边的增删，边以对称的两条有向记录存储
//! - 按插入顺序的邻居/权重迭代
//! - 广度优先遍历
//! - 基于 BFS 的跳数最短路径及路径重建
//!
//! 另附交互式命令行 `undigraph-cli`

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{PathResult, UNREACHABLE};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, UNWEIGHTED};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
