//! 顶点定义
//!
//! 顶点持有标签、按插入顺序排列的边表，以及仅在一次遍历/最短路径查询期间有效的临时状态

use super::edge::{Edge, UNWEIGHTED};
use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 边表（多数顶点度数很小，内联存储）
pub type EdgeList<T> = SmallVec<[Edge<T>; 4]>;

/// 顶点
///
/// 相等性与哈希只看标签，与边表和查询状态无关。
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    /// 顶点标签
    label: T,
    /// 出边列表
    edges: EdgeList<T>,
    /// 是否已访问
    visited: bool,
    /// 到当前查询起点的代价
    cost: f64,
    /// 当前查询路径上的前驱顶点
    predecessor: Option<T>,
}

impl<T> Vertex<T> {
    /// 创建新顶点
    pub fn new(label: T) -> Self {
        Self {
            label,
            edges: SmallVec::new(),
            visited: false,
            cost: 0.0,
            predecessor: None,
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &T {
        &self.label
    }

    /// 按插入顺序遍历边
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.edges.iter()
    }

    /// 按插入顺序遍历邻居，每次调用都得到一个新的迭代器
    pub fn neighbors(&self) -> impl Iterator<Item = &T> + '_ {
        self.edges.iter().map(Edge::target)
    }

    /// 按插入顺序遍历边权重，第 i 个权重对应 `neighbors()` 的第 i 个邻居
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(Edge::weight)
    }

    /// 是否有邻居
    pub fn has_neighbor(&self) -> bool {
        !self.edges.is_empty()
    }

    /// 边表长度
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// 第一个未访问的邻居
    ///
    /// 边表只记录标签，访问标记需要由所属的图查询后通过 `is_visited` 提供。
    pub fn unvisited_neighbor<F>(&self, mut is_visited: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.neighbors().find(|&n| !is_visited(n))
    }

    /// 未访问邻居的数量
    pub fn unvisited_degree<F>(&self, mut is_visited: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.neighbors().filter(|&n| !is_visited(n)).count()
    }

    // ==================== 查询状态 ====================

    /// 标记为已访问
    pub fn visit(&mut self) {
        self.visited = true;
    }

    /// 清除访问标记
    pub fn unvisit(&mut self) {
        self.visited = false;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn set_predecessor(&mut self, predecessor: Option<T>) {
        self.predecessor = predecessor;
    }

    pub fn predecessor(&self) -> Option<&T> {
        self.predecessor.as_ref()
    }

    pub fn has_predecessor(&self) -> bool {
        self.predecessor.is_some()
    }

    /// 重置查询状态（未访问、代价 0、无前驱）
    pub fn reset_traversal_state(&mut self) {
        self.visited = false;
        self.cost = 0.0;
        self.predecessor = None;
    }

    /// 取走边表（删除顶点时使用）
    pub(crate) fn take_edges(&mut self) -> EdgeList<T> {
        std::mem::take(&mut self.edges)
    }
}

impl<T: PartialEq + fmt::Debug> Vertex<T> {
    /// 是否存在指向 `target` 且权重为 `weight` 的边
    pub fn has_edge_to(&self, target: &T, weight: f64) -> bool {
        self.edges.iter().any(|e| e.matches(target, weight))
    }

    /// 添加一条指向 `target` 的边，失败时返回具体原因
    pub fn try_connect(&mut self, target: T, weight: f64) -> Result<()> {
        if target == self.label {
            return Err(Error::SelfLoop(format!("{:?}", self.label)));
        }
        if self.has_edge_to(&target, weight) {
            return Err(Error::DuplicateEdge(format!(
                "{:?} -> {:?} (权重 {})",
                self.label, target, weight
            )));
        }
        self.edges.push(Edge::new(target, weight));
        Ok(())
    }

    /// 添加边；自环或同权重重复边返回 false，且不做任何修改
    pub fn connect(&mut self, target: T, weight: f64) -> bool {
        self.try_connect(target, weight).is_ok()
    }

    /// 添加无权边
    pub fn connect_unweighted(&mut self, target: T) -> bool {
        self.connect(target, UNWEIGHTED)
    }

    /// 删除第一条与 (target, weight) 完全一致的边
    pub fn try_disconnect(&mut self, target: &T, weight: f64) -> Result<Edge<T>> {
        match self.edges.iter().position(|e| e.matches(target, weight)) {
            Some(pos) => Ok(self.edges.remove(pos)),
            None => Err(Error::EdgeNotFound(format!(
                "{:?} -> {:?} (权重 {})",
                self.label, target, weight
            ))),
        }
    }

    pub fn disconnect(&mut self, target: &T, weight: f64) -> bool {
        self.try_disconnect(target, weight).is_ok()
    }

    pub fn disconnect_unweighted(&mut self, target: &T) -> bool {
        self.disconnect(target, UNWEIGHTED)
    }
}

impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for Vertex<T> {}

impl<T: Hash> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
