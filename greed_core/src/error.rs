use thiserror::Error;

/// 游戏过程中可能出现的错误
#[derive(Debug, Error)]
pub enum GameError {
    /// 玩家人数不在允许范围内，游戏无法开始
    #[error("玩家人数必须在 {min} 到 {max} 之间，实际为 {count}")]
    RosterSize { count: usize, min: usize, max: usize },

    /// 等待玩家回答时输入已经关闭 (EOF)
    #[error("输入已关闭，游戏中止")]
    InputClosed,

    #[error("控制台读写失败: {0}")]
    Io(#[from] std::io::Error),
}
