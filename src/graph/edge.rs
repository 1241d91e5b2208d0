//! 边定义
//!
//! 无向图中每条边在两个端点各存一条有向记录，记录只保存邻居标签和权重

use serde::{Deserialize, Serialize};

/// 未指定权重时使用的边权重（无权边）
pub const UNWEIGHTED: f64 = 0.0;

/// 边（从所属顶点指向 `target` 的一条有向记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// 边权重
    weight: f64,
    /// 目标顶点标签
    target: T,
}

impl<T> Edge<T> {
    /// 创建新边
    pub fn new(target: T, weight: f64) -> Self {
        Self { weight, target }
    }

    /// 创建无权边
    pub fn unweighted(target: T) -> Self {
        Self::new(target, UNWEIGHTED)
    }

    /// 获取边权重
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 获取目标顶点标签
    pub fn target(&self) -> &T {
        &self.target
    }

    /// 拆出目标标签
    pub fn into_target(self) -> T {
        self.target
    }
}

impl<T: PartialEq> Edge<T> {
    /// 目标与权重是否完全一致（权重按数值精确比较，不做容差）
    pub fn matches(&self, target: &T, weight: f64) -> bool {
        self.weight == weight && &self.target == target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_matches_exact_weight() {
        let e = Edge::new("B", 1.5);

        assert!(e.matches(&"B", 1.5));
        assert!(!e.matches(&"B", 1.5000001));
        assert!(!e.matches(&"C", 1.5));
    }

    #[test]
    fn test_unweighted_edge() {
        let e = Edge::unweighted(7u32);

        assert_eq!(e.weight(), UNWEIGHTED);
        assert_eq!(e.target(), &7);
        assert_eq!(e.into_target(), 7);
    }
}
