//! 图核心模块
//!
//! 定义顶点、边和无向图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, UNWEIGHTED};
pub use graph::Graph;
pub use vertex::{EdgeList, Vertex};
