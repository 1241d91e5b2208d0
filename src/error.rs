//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("不允许自环: {0}")]
    SelfLoop(String),

    #[error("边已存在: {0}")]
    DuplicateEdge(String),

    #[error("无效的边权重: {0}")]
    InvalidWeight(f64),

    #[error("边状态不一致（只存在单向记录）: {0}")]
    InconsistentEdge(String),

    #[error("解析错误: {0}")]
    ParseError(String),
}

impl Error {
    /// 操作引用了图中不存在的顶点或边
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_) | Error::EdgeNotFound(_))
    }

    /// 操作本身不合法（自环、重复边、断开不存在的边等）
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            Error::SelfLoop(_)
                | Error::DuplicateEdge(_)
                | Error::InvalidWeight(_)
                | Error::InconsistentEdge(_)
                | Error::EdgeNotFound(_)
        )
    }
}
