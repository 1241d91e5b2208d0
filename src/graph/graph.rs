//! 图数据结构
//!
//! 以标签为键的无向图：顶点由映射独占持有，边只记录邻居标签，需要时再回到映射中解析

use super::edge::UNWEIGHTED;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, warn};

/// 无向图
///
/// 每条无向边在两个端点各存一条有向记录，`edge_count` 统计的是有向记录数，
/// 因此总是偶数。
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 标签到顶点的映射（保持插入顺序）
    vertices: IndexMap<T, Vertex<T>>,
    /// 有向边记录数
    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
            edge_count: 0,
        }
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配顶点容量
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 标签此前不存在时返回 true。标签已存在时用新顶点替换旧顶点并返回 false，
    /// 旧顶点的边会先从各邻居处摘除。
    pub fn add_vertex(&mut self, label: T) -> bool {
        let existed = self.vertices.contains_key(&label);
        if existed {
            let dropped = self.detach_incident_edges(&label);
            debug!(?label, dropped, "替换已存在的顶点");
        }
        self.vertices.insert(label.clone(), Vertex::new(label));
        !existed
    }

    /// 删除顶点及其所有关联边，返回被删除的顶点
    pub fn remove_vertex(&mut self, label: &T) -> Result<Vertex<T>> {
        if !self.vertices.contains_key(label) {
            return Err(Error::VertexNotFound(format!("{:?}", label)));
        }

        let dropped = self.detach_incident_edges(label);
        let vertex = self
            .vertices
            .shift_remove(label)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", label)))?;

        debug!(?label, dropped, "删除顶点");
        Ok(vertex)
    }

    /// 摘除 `label` 的所有关联边，返回摘除的无向边数
    fn detach_incident_edges(&mut self, label: &T) -> usize {
        let edges = match self.vertices.get_mut(label) {
            Some(v) => v.take_edges(),
            None => return 0,
        };

        let mut dropped = 0;
        for edge in edges {
            let mirrored = self
                .vertices
                .get_mut(edge.target())
                .map_or(false, |neighbor| neighbor.disconnect(label, edge.weight()));
            if !mirrored {
                warn!(?label, neighbor = ?edge.target(), "邻居缺少对称的边记录");
            }
            self.edge_count = self.edge_count.saturating_sub(2);
            dropped += 1;
        }
        dropped
    }

    /// 获取顶点
    pub fn vertex(&self, label: &T) -> Option<&Vertex<T>> {
        self.vertices.get(label)
    }

    pub(crate) fn vertex_mut(&mut self, label: &T) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(label)
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, label: &T) -> bool {
        self.vertices.contains_key(label)
    }

    /// 获取所有顶点（按插入顺序，空图返回空列表）
    pub fn vertices(&self) -> Vec<&Vertex<T>> {
        self.vertices.values().collect()
    }

    /// 遍历所有顶点标签
    pub fn labels(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加一条无向边，失败时返回具体原因
    ///
    /// 两个方向都先确认不存在同权重的边再连接，因此不会出现只写入一半的情况。
    pub fn try_add_edge(&mut self, begin: &T, end: &T, weight: f64) -> Result<()> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight(weight));
        }
        self.require_vertex(begin)?;
        self.require_vertex(end)?;
        if begin == end {
            return Err(Error::SelfLoop(format!("{:?}", begin)));
        }
        if self.edge_exists(begin, end, weight) || self.edge_exists(end, begin, weight) {
            return Err(Error::DuplicateEdge(format!(
                "{:?} - {:?} (权重 {})",
                begin, end, weight
            )));
        }

        self.endpoint_mut(begin)?.try_connect(end.clone(), weight)?;
        if let Err(e) = self
            .endpoint_mut(end)
            .and_then(|v| v.try_connect(begin.clone(), weight))
        {
            // 回滚前一半
            if let Some(v) = self.vertices.get_mut(begin) {
                v.disconnect(end, weight);
            }
            return Err(e);
        }

        self.edge_count += 2;
        debug!(?begin, ?end, weight, "添加边");
        Ok(())
    }

    /// 添加带权无向边；端点不存在、自环或同权重边已存在时返回 false
    pub fn add_weighted_edge(&mut self, begin: &T, end: &T, weight: f64) -> bool {
        self.try_add_edge(begin, end, weight).is_ok()
    }

    /// 添加无权边（权重 0.0）
    pub fn add_edge(&mut self, begin: &T, end: &T) -> bool {
        self.add_weighted_edge(begin, end, UNWEIGHTED)
    }

    /// 删除一条无向边，两个方向的记录都存在才会删除
    pub fn try_remove_edge(&mut self, begin: &T, end: &T, weight: f64) -> Result<()> {
        self.require_vertex(begin)?;
        self.require_vertex(end)?;

        let forward = self.edge_exists(begin, end, weight);
        let backward = self.edge_exists(end, begin, weight);
        match (forward, backward) {
            (true, true) => {}
            (false, false) => {
                return Err(Error::EdgeNotFound(format!(
                    "{:?} - {:?} (权重 {})",
                    begin, end, weight
                )))
            }
            _ => {
                warn!(?begin, ?end, weight, forward, backward, "发现单向边记录");
                return Err(Error::InconsistentEdge(format!(
                    "{:?} - {:?} (权重 {})",
                    begin, end, weight
                )));
            }
        }

        self.endpoint_mut(begin)?.try_disconnect(end, weight)?;
        self.endpoint_mut(end)?.try_disconnect(begin, weight)?;
        self.edge_count -= 2;
        debug!(?begin, ?end, weight, "删除边");
        Ok(())
    }

    pub fn remove_weighted_edge(&mut self, begin: &T, end: &T, weight: f64) -> bool {
        self.try_remove_edge(begin, end, weight).is_ok()
    }

    /// 删除无权边（权重 0.0）
    pub fn remove_edge(&mut self, begin: &T, end: &T) -> bool {
        self.remove_weighted_edge(begin, end, UNWEIGHTED)
    }

    /// 任一方向存在权重为 `weight` 的边
    pub fn has_weighted_edge(&self, begin: &T, end: &T, weight: f64) -> bool {
        self.edge_exists(begin, end, weight) || self.edge_exists(end, begin, weight)
    }

    /// 任一方向存在无权边
    pub fn has_edge(&self, begin: &T, end: &T) -> bool {
        self.has_weighted_edge(begin, end, UNWEIGHTED)
    }

    /// `begin` 的边表中是否有指向 `end`、权重为 `weight` 的记录
    fn edge_exists(&self, begin: &T, end: &T, weight: f64) -> bool {
        match (self.vertices.get(begin), self.vertices.contains_key(end)) {
            (Some(v), true) => v.has_edge_to(end, weight),
            _ => false,
        }
    }

    /// 有向边记录数（每条无向边计 2）
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 无向边数
    pub fn undirected_edge_count(&self) -> usize {
        self.edge_count / 2
    }

    /// 清空图
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    // ==================== 邻居查询 ====================

    /// 第一个未访问的邻居（依据各顶点当前的访问标记）
    pub fn unvisited_neighbor(&self, label: &T) -> Option<&T> {
        let vertex = self.vertices.get(label)?;
        vertex.unvisited_neighbor(|n| self.vertices.get(n).map_or(true, Vertex::is_visited))
    }

    /// 重置所有顶点的查询状态
    pub fn reset_traversal_state(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset_traversal_state();
        }
    }

    pub(crate) fn require_vertex(&self, label: &T) -> Result<&Vertex<T>> {
        self.vertices
            .get(label)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", label)))
    }

    fn endpoint_mut(&mut self, label: &T) -> Result<&mut Vertex<T>> {
        self.vertices
            .get_mut(label)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", label)))
    }
}
