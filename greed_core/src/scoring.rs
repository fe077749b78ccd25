use crate::dice::{Face, MAX_FACE, MIN_FACE};
use crate::state::Player;
use serde::{Deserialize, Serialize};

/// 一次掷骰的计分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub points: u32,
    /// 没有贡献分数的骰子数量，也就是可以"热骰"重掷的骰子
    pub non_scoring: usize,
}

impl ScoreResult {
    /// 部分骰子得分、部分骰子不得分时，可以重掷不得分的那些 (热骰)
    pub fn has_hot_dice(&self) -> bool {
        self.non_scoring >= 1 && self.points > 0
    }
}

// --- 计分表 ---

/// 单个点数出现 `count` 次时的得分
///
/// - 1 点: 三个及以上为 1000 + 100 × (count mod 3)，否则每个 100
/// - 5 点: 三个及以上为 500 + 50 × (count mod 3)，否则每个 50
/// - 其他点数: 三个及以上为 100 × 点数，否则 0
pub fn face_points(face: Face, count: usize) -> u32 {
    let count = count as u32;
    let remainder = count % 3;
    match face {
        1 if count >= 3 => 1000 + 100 * remainder,
        1 => 100 * count,
        5 if count >= 3 => 500 + 50 * remainder,
        5 => 50 * count,
        _ if count >= 3 => 100 * face as u32,
        _ => 0,
    }
}

/// 统计每个点数出现的次数，下标即点数
///
/// # Panics
/// 点数不在 1 到 6 之间时 panic。
fn count_faces(dice: &[Face]) -> [usize; MAX_FACE as usize + 1] {
    let mut counts = [0; MAX_FACE as usize + 1];
    for &face in dice {
        assert!((MIN_FACE..=MAX_FACE).contains(&face), "无效的骰子点数: {}", face);
        counts[face as usize] += 1;
    }
    counts
}

/// 出现过的点数及其次数
fn face_runs(dice: &[Face]) -> impl Iterator<Item = (Face, usize)> {
    let counts = count_faces(dice);
    (MIN_FACE..=MAX_FACE)
        .map(move |face| (face, counts[face as usize]))
        .filter(|&(_, count)| count > 0)
}

/// 整组骰子的总分
pub fn score(dice: &[Face]) -> u32 {
    face_runs(dice).map(|(face, count)| face_points(face, count)).sum()
}

/// 不计分的骰子数量：得分为 0 的点数，其所有骰子都算作不计分
pub fn non_scoring(dice: &[Face]) -> usize {
    face_runs(dice)
        .filter(|&(face, count)| face_points(face, count) == 0)
        .map(|(_, count)| count)
        .sum()
}

pub fn score_roll(dice: &[Face]) -> ScoreResult {
    ScoreResult {
        points: score(dice),
        non_scoring: non_scoring(dice),
    }
}

// --- 分数结算 ---

/// 把得分记到玩家身上
///
/// 得分为 0 时玩家的累计分数会被清零，这是游戏规则本身，不是错误处理。
pub fn assign_points(player: &mut Player, points: u32) {
    match points {
        0 => player.score = 0,
        _ => player.score = player.score.saturating_add(points),
    }
}

/// 按座位顺序找出赢家
///
/// 分数**大于或等于**当前最高分的玩家会成为新的领先者，
/// 所以同分时坐在后面的玩家获胜。
/// 初始领先者是一个名字为空、0 分的占位玩家，玩家列表为空时返回它。
pub fn winner(players: &[Player]) -> Player {
    let mut max_score = 0;
    let mut winner = Player::new("");
    for player in players {
        if player.score >= max_score {
            winner = player.clone();
            max_score = player.score;
        }
    }
    winner
}

// --- 单元测试 ---
