use crate::dice::Face;
use crate::state::Player;
use serde::{Deserialize, Serialize};

// --- 引擎 -> 前端 的消息 ---
// 游戏状态改变后，引擎通过 Console::show 把这些事件交给前端展示。

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum GameMessage {
    /// 游戏开始时的欢迎横幅
    Welcome,

    /// 轮到某个玩家
    PlayerTurn { name: String },

    /// 玩家掷出的骰子 (包括热骰重掷)
    DiceRolled { name: String, dice: Vec<Face> },

    /// 玩家单次得分达到入场线，开始累计分数
    PlayerEntered { name: String, points: u32 },

    /// 提示玩家还有多少颗不计分的骰子可以重掷
    HotDiceOffered { dice: usize },

    /// 回合结束后玩家的累计分数
    PlayerPoints { name: String, score: u32 },

    /// 最后一轮开始
    FinalRound,

    /// 按座位顺序列出所有玩家的最终分数
    ScoreTable { players: Vec<Player> },

    Winner { player: Player },
}
