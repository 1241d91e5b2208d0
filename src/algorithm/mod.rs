//! 图算法模块
//!
//! 广度优先遍历、跳数最短路径和可达性查询，均以 `Graph` 方法的形式提供

mod path;
mod traversal;

pub use path::{PathResult, UNREACHABLE};
