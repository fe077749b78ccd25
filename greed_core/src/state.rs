use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// 每回合第一次掷骰的骰子数量
pub const DICE_PER_TURN: usize = 5;
/// 玩家入场 (开始累计分数) 所需的单次最低得分
pub const ENTRY_THRESHOLD: u32 = 300;
/// 任一玩家达到该分数后，当前轮成为最后一轮
pub const FINAL_ROUND_THRESHOLD: u32 = 3000;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
    /// 是否已经入场。未入场的玩家得分不会累计
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    /// 正常进行中
    InProgress,
    /// 已有玩家达到终局分数，正在打最后的轮次
    FinalRoundTriggered,
    /// 赢家已经确定
    Ended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>, // 座位顺序即行动顺序，整局不变
    pub phase: GamePhase,
    pub final_round: bool, // 当前这一轮打完后结束循环
    pub round: u32,        // 已经开始的轮数
}

impl Player {
    pub fn new(name: impl Into<String>) -> Player {
        Player { name: name.into(), score: 0, active: false }
    }
}

impl GameState {
    pub fn new(players: Vec<Player>) -> Self {
        GameState {
            players,
            phase: GamePhase::InProgress,
            final_round: false,
            round: 0,
        }
    }
}

/// 检查玩家人数是否在 [`MIN_PLAYERS`] 到 [`MAX_PLAYERS`] 之间
pub fn validate_roster_size(count: usize) -> Result<(), GameError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(GameError::RosterSize { count, min: MIN_PLAYERS, max: MAX_PLAYERS })
    }
}

/// 按名字顺序创建玩家，所有人从 0 分、未入场开始
pub fn create_players<S: AsRef<str>>(names: &[S]) -> Result<Vec<Player>, GameError> {
    validate_roster_size(names.len())?;
    Ok(names.iter().map(|name| Player::new(name.as_ref())).collect())
}
