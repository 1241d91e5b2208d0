//! 广度优先遍历

use crate::error::Result;
use crate::graph::Graph;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 邻居快照，遍历过程中需要修改其他顶点的访问标记
pub(crate) type NeighborSnapshot<T> = SmallVec<[T; 8]>;

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// 从 `origin` 开始的广度优先遍历
    ///
    /// 顶点在第一次被发现时即加入结果（而不是出队时），起点排在第一位，
    /// 每个可达顶点恰好出现一次。
    pub fn breadth_first_traversal(&mut self, origin: &T) -> Result<VecDeque<T>> {
        self.require_vertex(origin)?;
        self.reset_traversal_state();

        let mut queue = VecDeque::new();
        let mut order = VecDeque::new();

        if let Some(start) = self.vertex_mut(origin) {
            start.visit();
        }
        queue.push_back(origin.clone());
        order.push_back(origin.clone());

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbor_snapshot(&current) {
                let Some(vertex) = self.vertex_mut(&neighbor) else {
                    continue;
                };
                if vertex.is_visited() {
                    continue;
                }
                vertex.visit();
                trace!(from = ?current, to = ?neighbor, "发现顶点");

                queue.push_back(neighbor.clone());
                order.push_back(neighbor);
            }
        }

        debug!(?origin, reached = order.len(), "广度优先遍历完成");
        Ok(order)
    }

    /// 按边表顺序复制 `label` 的邻居
    pub(crate) fn neighbor_snapshot(&self, label: &T) -> NeighborSnapshot<T> {
        self.vertex(label)
            .map(|v| v.neighbors().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::graph::Graph;

    fn create_test_graph() -> Graph<&'static str> {
        // A - B - D
        // |   |
        // C - E    F（孤立）
        let mut graph = Graph::new();
        for l in ["A", "B", "C", "D", "E", "F"] {
            graph.add_vertex(l);
        }
        graph.add_edge(&"A", &"B");
        graph.add_edge(&"A", &"C");
        graph.add_edge(&"B", &"D");
        graph.add_edge(&"B", &"E");
        graph.add_edge(&"C", &"E");
        graph
    }

    #[test]
    fn test_bfs_order() {
        let mut graph = create_test_graph();

        let order: Vec<_> = graph.breadth_first_traversal(&"A").unwrap().into_iter().collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_bfs_follows_edge_insertion_order() {
        let mut graph = create_test_graph();

        let order: Vec<_> = graph.breadth_first_traversal(&"E").unwrap().into_iter().collect();
        assert_eq!(order, vec!["E", "B", "C", "A", "D"]);
    }

    #[test]
    fn test_bfs_excludes_unreachable() {
        let mut graph = create_test_graph();

        let order = graph.breadth_first_traversal(&"F").unwrap();
        assert_eq!(order.len(), 1);
        assert_eq!(order.front(), Some(&"F"));

        let order = graph.breadth_first_traversal(&"A").unwrap();
        assert!(!order.contains(&"F"));
    }

    #[test]
    fn test_bfs_visits_each_vertex_once() {
        let mut graph: Graph<u32> = Graph::new();
        for i in 0..20 {
            graph.add_vertex(i);
        }
        // 完全图的一部分，制造大量重复发现
        for i in 0..20 {
            for j in (i + 1)..20 {
                if (i + j) % 3 != 0 {
                    graph.add_edge(&i, &j);
                }
            }
        }

        let order = graph.breadth_first_traversal(&0).unwrap();
        assert_eq!(order.len(), 20);
        assert_eq!(order.front(), Some(&0));
        let mut sorted: Vec<_> = order.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 20);
    }

    #[test]
    fn test_bfs_resets_state_between_calls() {
        let mut graph = create_test_graph();

        let first = graph.breadth_first_traversal(&"A").unwrap();
        let second = graph.breadth_first_traversal(&"A").unwrap();
        assert_eq!(first, second);
        assert!(graph.vertex(&"D").unwrap().is_visited());
        assert!(!graph.vertex(&"F").unwrap().is_visited());
    }

    #[test]
    fn test_bfs_unknown_origin() {
        let mut graph = create_test_graph();

        assert!(matches!(
            graph.breadth_first_traversal(&"Z"),
            Err(Error::VertexNotFound(_))
        ));
    }
}
