use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 骰子的点数 (1 到 6)
pub type Face = u8;

/// 骰子的最小点数
pub const MIN_FACE: Face = 1;
/// 骰子的最大点数
pub const MAX_FACE: Face = 6;

/// 掷骰器
///
/// 游戏引擎只依赖这个 trait，测试时可以换成预先写好结果的实现。
pub trait Roller {
    /// 掷 `count` 颗骰子，替换上一次的结果并返回新的点数。
    ///
    /// # Panics
    /// `count` 为 0 时 panic。
    fn roll(&mut self, count: usize) -> &[Face];
}

/// 一组骰子，只保留最近一次掷出的结果
#[derive(Debug, Clone)]
pub struct DiceSet<R = StdRng> {
    values: Vec<Face>,
    rng: R,
}

impl DiceSet<StdRng> {
    /// 使用操作系统熵源初始化的骰子
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// 固定种子，每次得到相同的点数序列
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for DiceSet<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DiceSet<R> {
    pub fn with_rng(rng: R) -> Self {
        DiceSet { values: Vec::new(), rng }
    }

    /// 最近一次掷出的点数
    pub fn values(&self) -> &[Face] {
        &self.values
    }
}

impl<R: Rng> Roller for DiceSet<R> {
    fn roll(&mut self, count: usize) -> &[Face] {
        assert!(count >= 1, "至少要掷一颗骰子");

        self.values.clear();
        for _ in 0..count {
            self.values.push(self.rng.random_range(MIN_FACE..=MAX_FACE));
        }
        &self.values
    }
}
