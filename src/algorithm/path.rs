//! 最短路径与可达性查询
//!
//! 基于 BFS 的无权（跳数）最短路径，通过前驱链重建路径

use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 目标不可达时 `shortest_path` 返回的距离
pub const UNREACHABLE: usize = usize::MAX;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<T> {
    /// 路径上的顶点序列（起点在前）
    pub vertices: Vec<T>,
    /// 路径跳数
    pub length: usize,
    /// 路径总权重
    pub total_weight: f64,
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// BFS 最短路径（跳数）
    ///
    /// 找到终点时沿前驱链把标签压入 `path`，栈顶是起点，依次 `pop` 得到
    /// 起点 → … → 终点。起点与终点标签相同时直接返回 0；终点不可达时返回
    /// [`UNREACHABLE`]。这两种情况都不会修改 `path`。
    pub fn shortest_path(&mut self, origin: &T, destination: &T, path: &mut Vec<T>) -> Result<usize> {
        self.require_vertex(origin)?;
        self.require_vertex(destination)?;
        self.reset_traversal_state();

        if let Some(start) = self.vertex_mut(origin) {
            start.visit();
        }
        if origin == destination {
            return Ok(0);
        }

        let mut queue = VecDeque::new();
        queue.push_back(origin.clone());

        while let Some(current) = queue.pop_front() {
            let current_cost = self.vertex(&current).map_or(0.0, Vertex::cost);

            for neighbor in self.neighbor_snapshot(&current) {
                let Some(vertex) = self.vertex_mut(&neighbor) else {
                    continue;
                };
                if vertex.is_visited() {
                    continue;
                }
                vertex.visit();
                vertex.set_predecessor(Some(current.clone()));
                vertex.set_cost(current_cost + 1.0);
                trace!(from = ?current, to = ?neighbor, cost = vertex.cost(), "发现顶点");

                if &neighbor == destination {
                    let hops = vertex.cost() as usize;
                    self.push_predecessor_chain(destination, path);
                    debug!(?origin, ?destination, hops, "找到最短路径");
                    return Ok(hops);
                }
                queue.push_back(neighbor);
            }
        }

        debug!(?origin, ?destination, "终点不可达");
        Ok(UNREACHABLE)
    }

    /// 从 `destination` 沿前驱链压栈，直到没有前驱的起点
    fn push_predecessor_chain(&self, destination: &T, path: &mut Vec<T>) {
        path.push(destination.clone());
        let mut cursor = self.vertex(destination).and_then(Vertex::predecessor);
        while let Some(label) = cursor {
            path.push(label.clone());
            cursor = self.vertex(label).and_then(Vertex::predecessor);
        }
    }

    /// 最短路径，以 [`PathResult`] 形式返回；不可达时返回 None
    pub fn find_path(&mut self, origin: &T, destination: &T) -> Result<Option<PathResult<T>>> {
        let mut stack = Vec::new();
        let hops = self.shortest_path(origin, destination, &mut stack)?;
        if hops == UNREACHABLE {
            return Ok(None);
        }

        let vertices: Vec<T> = if stack.is_empty() {
            vec![origin.clone()]
        } else {
            stack.into_iter().rev().collect()
        };
        let total_weight: f64 = vertices
            .windows(2)
            .map(|hop| self.hop_weight(&hop[0], &hop[1]))
            .sum();

        Ok(Some(PathResult {
            vertices,
            length: hops,
            total_weight,
        }))
    }

    /// `from` 边表中第一条指向 `to` 的边的权重
    fn hop_weight(&self, from: &T, to: &T) -> f64 {
        self.vertex(from)
            .and_then(|v| v.edges().find(|e| e.target() == to))
            .map_or(0.0, Edge::weight)
    }

    /// 两点间的跳数距离，不可达时返回 None
    pub fn distance(&mut self, origin: &T, destination: &T) -> Result<Option<usize>> {
        let mut scratch = Vec::new();
        let hops = self.shortest_path(origin, destination, &mut scratch)?;
        Ok((hops != UNREACHABLE).then_some(hops))
    }

    /// 判断两点是否连通
    pub fn is_reachable(&mut self, origin: &T, destination: &T) -> Result<bool> {
        Ok(self.distance(origin, destination)?.is_some())
    }

    /// 与 `origin` 距离恰好为 `n` 跳的顶点，按发现顺序返回
    ///
    /// 访问记录放在本次调用的局部表中，不触碰顶点上的查询状态。
    pub fn n_hop_neighbors(&self, origin: &T, n: usize) -> Result<Vec<T>> {
        self.require_vertex(origin)?;

        let mut visited: HashSet<T> = HashSet::new();
        visited.insert(origin.clone());
        let mut level = vec![origin.clone()];

        for _ in 0..n {
            let mut next_level = Vec::new();
            for label in &level {
                for neighbor in self.neighbor_snapshot(label) {
                    if visited.insert(neighbor.clone()) {
                        next_level.push(neighbor);
                    }
                }
            }
            level = next_level;
            if level.is_empty() {
                break;
            }
        }

        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn chain_graph() -> Graph<&'static str> {
        // A - B - C - D，E 孤立
        let mut graph = Graph::new();
        for l in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(l);
        }
        graph.add_edge(&"A", &"B");
        graph.add_edge(&"B", &"C");
        graph.add_edge(&"C", &"D");
        graph
    }

    #[test]
    fn test_shortest_path_chain() {
        let mut graph = chain_graph();
        let mut path = Vec::new();

        assert_eq!(graph.shortest_path(&"A", &"D", &mut path).unwrap(), 3);
        assert_eq!(path.pop(), Some("A"));
        assert_eq!(path.pop(), Some("B"));
        assert_eq!(path.pop(), Some("C"));
        assert_eq!(path.pop(), Some("D"));
        assert!(path.is_empty());
    }

    #[test]
    fn test_shortest_path_prefers_fewer_hops() {
        let mut graph = chain_graph();
        graph.add_weighted_edge(&"A", &"D", 100.0);
        let mut path = Vec::new();

        assert_eq!(graph.shortest_path(&"A", &"D", &mut path).unwrap(), 1);
        assert_eq!(path, vec!["D", "A"]);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let mut graph = chain_graph();
        let mut path = Vec::new();

        assert_eq!(
            graph.shortest_path(&"A", &"E", &mut path).unwrap(),
            UNREACHABLE
        );
        assert!(path.is_empty());
    }

    #[test]
    fn test_shortest_path_same_vertex() {
        let mut graph = chain_graph();
        let mut path = Vec::new();

        assert_eq!(graph.shortest_path(&"A", &"A", &mut path).unwrap(), 0);
        assert!(path.is_empty());
    }

    #[test]
    fn test_shortest_path_same_label_distinct_values() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_vertex("A".to_string());
        let mut path = Vec::new();

        // 两个独立的 String 值，按标签相等判定为同一顶点
        let origin = String::from("A");
        let destination = "A".to_string();
        assert_eq!(
            graph.shortest_path(&origin, &destination, &mut path).unwrap(),
            0
        );
    }

    #[test]
    fn test_shortest_path_unknown_labels() {
        let mut graph = chain_graph();
        let mut path = Vec::new();

        assert!(matches!(
            graph.shortest_path(&"Z", &"A", &mut path),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            graph.shortest_path(&"A", &"Z", &mut path),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_shortest_path_records_costs() {
        let mut graph = chain_graph();
        let mut path = Vec::new();

        graph.shortest_path(&"A", &"C", &mut path).unwrap();
        assert_eq!(graph.vertex(&"B").unwrap().cost(), 1.0);
        assert_eq!(graph.vertex(&"C").unwrap().cost(), 2.0);
        assert_eq!(graph.vertex(&"C").unwrap().predecessor(), Some(&"B"));
        assert!(!graph.vertex(&"A").unwrap().has_predecessor());
    }

    #[test]
    fn test_find_path() {
        let mut graph = Graph::new();
        for l in ["A", "B", "C"] {
            graph.add_vertex(l);
        }
        graph.add_weighted_edge(&"A", &"B", 2.5);
        graph.add_weighted_edge(&"B", &"C", 1.5);

        let result = graph.find_path(&"A", &"C").unwrap().unwrap();
        assert_eq!(result.vertices, vec!["A", "B", "C"]);
        assert_eq!(result.length, 2);
        assert_eq!(result.total_weight, 4.0);

        let same = graph.find_path(&"B", &"B").unwrap().unwrap();
        assert_eq!(same.vertices, vec!["B"]);
        assert_eq!(same.length, 0);
    }

    #[test]
    fn test_distance_and_reachability() {
        let mut graph = chain_graph();

        assert_eq!(graph.distance(&"B", &"D").unwrap(), Some(2));
        assert_eq!(graph.distance(&"B", &"E").unwrap(), None);
        assert!(graph.is_reachable(&"D", &"A").unwrap());
        assert!(!graph.is_reachable(&"E", &"A").unwrap());
        assert_eq!(graph.find_path(&"A", &"E").unwrap(), None);
    }

    #[test]
    fn test_n_hop_neighbors() {
        let mut graph = chain_graph();
        graph.add_edge(&"A", &"E");

        assert_eq!(graph.n_hop_neighbors(&"A", 0).unwrap(), vec!["A"]);
        assert_eq!(graph.n_hop_neighbors(&"A", 1).unwrap(), vec!["B", "E"]);
        assert_eq!(graph.n_hop_neighbors(&"A", 2).unwrap(), vec!["C"]);
        assert!(graph.n_hop_neighbors(&"A", 5).unwrap().is_empty());
        assert!(graph.n_hop_neighbors(&"Z", 1).is_err());
    }
}
