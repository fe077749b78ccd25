use crate::console::Console;
use crate::dice::Roller;
use crate::error::GameError;
use crate::message::GameMessage;
use crate::scoring::{ScoreResult, assign_points, score_roll, winner};
use crate::state::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 热骰环节的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HotDice {
    /// 没有触发热骰
    NotOffered,
    /// 玩家放弃重掷
    Declined { dice: usize },
    /// 玩家重掷了 `dice` 颗骰子，得到 `points` 分
    Rerolled { dice: usize, points: u32 },
}

/// 一个玩家回合的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// 玩家选择不掷骰子
    Skipped,
    /// 未入场，本次得分不足入场线，分数被丢弃
    NotEntered { points: u32 },
    /// 本次得分达到入场线，玩家入场
    Entered { points: u32 },
    /// 已入场玩家的正常计分
    Scored { points: u32, hot_dice: HotDice },
}

/// 游戏控制器
///
/// 持有玩家名单，按座位顺序一轮一轮地推进游戏，直到决出赢家。
/// 所有输入输出都通过 [`Console`] 完成，骰子由 [`Roller`] 提供。
pub struct Game<C, R> {
    console: C,
    dice: R,
    state: GameState,
}

// --- 核心游戏流程函数 ---

impl<C: Console, R: Roller> Game<C, R> {
    /// 创建一局还没有玩家的游戏，玩家在 [`Game::start`] 中通过控制台收集
    pub fn new(console: C, dice: R) -> Self {
        Game { console, dice, state: GameState::new(Vec::new()) }
    }

    /// 使用现成的玩家名单创建游戏
    pub fn with_players(console: C, dice: R, players: Vec<Player>) -> Result<Self, GameError> {
        validate_roster_size(players.len())?;
        Ok(Game { console, dice, state: GameState::new(players) })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 开始一局完整的游戏
    ///
    /// - 显示欢迎信息，询问人数和每位玩家的名字。
    /// - 人数不在 2 到 10 之间时直接返回错误，不会询问名字。
    /// - 随后运行整局游戏并返回赢家。
    pub fn start(&mut self) -> Result<Player, GameError> {
        self.console.show(&GameMessage::Welcome)?;
        let players = self.collect_players()?;
        self.state = GameState::new(players);
        self.run()
    }

    fn collect_players(&mut self) -> Result<Vec<Player>, GameError> {
        let count = self.console.number_of_players()?;
        validate_roster_size(count)?;

        let mut names = Vec::with_capacity(count);
        for index in 0..count {
            names.push(self.console.ask_for_name(index)?);
        }
        create_players(&names)
    }

    /// 用当前的玩家名单跑完整局游戏
    ///
    /// 一直进行完整的轮次，直到某一轮中有玩家达到终局分数；
    /// 那一轮打完后，再强制进行一轮最后的轮次，然后结算赢家。
    pub fn run(&mut self) -> Result<Player, GameError> {
        validate_roster_size(self.state.players.len())?;
        info!(players = self.state.players.len(), "Greed 游戏开始");

        self.play_rounds(false)?;

        self.console.show(&GameMessage::FinalRound)?;
        self.play_rounds(true)?;

        self.state.phase = GamePhase::Ended;
        self.console.show(&GameMessage::ScoreTable { players: self.state.players.clone() })?;

        let game_winner = winner(&self.state.players);
        info!(
            winner = %game_winner.name,
            score = game_winner.score,
            rounds = self.state.round,
            "游戏结束"
        );
        self.console.show(&GameMessage::Winner { player: game_winner.clone() })?;
        Ok(game_winner)
    }

    /// 循环进行轮次，直到某一轮被标记为最后一轮
    ///
    /// `final_round` 为 true 时只进行一轮。
    fn play_rounds(&mut self, final_round: bool) -> Result<(), GameError> {
        self.state.final_round = final_round;
        loop {
            self.state.round += 1;
            debug!(round = self.state.round, final_round = self.state.final_round, "新一轮开始");

            for idx in 0..self.state.players.len() {
                self.play_turn(idx)?;
                self.check_final_round(idx);
            }

            if self.state.final_round {
                return Ok(());
            }
        }
    }

    /// 座位 `idx` 上的玩家达到终局分数时，把当前轮标记为最后一轮
    ///
    /// 只标记，本轮剩下的玩家照常行动。
    fn check_final_round(&mut self, idx: usize) {
        let player = &self.state.players[idx];
        if player.score < FINAL_ROUND_THRESHOLD {
            return;
        }
        if self.state.phase == GamePhase::InProgress {
            let round = self.state.round;
            info!(player = %player.name, score = player.score, round, "达到终局分数");
            self.state.phase = GamePhase::FinalRoundTriggered;
        }
        self.state.final_round = true;
    }

    /// 进行座位 `idx` 上玩家的一个回合
    pub fn play_turn(&mut self, idx: usize) -> Result<TurnOutcome, GameError> {
        let name = self.state.players[idx].name.clone();
        self.console.show(&GameMessage::PlayerTurn { name: name.clone() })?;

        let outcome = if self.console.roll_dice()? {
            self.roll_chance(idx)?
        } else {
            TurnOutcome::Skipped
        };

        let score = self.state.players[idx].score;
        debug!(player = %name, ?outcome, score, "回合结束");
        self.console.show(&GameMessage::PlayerPoints { name, score })?;
        Ok(outcome)
    }

    /// 第一次掷骰：未入场的玩家只检查入场线，已入场的玩家计分并可能触发热骰
    fn roll_chance(&mut self, idx: usize) -> Result<TurnOutcome, GameError> {
        let result = self.roll(idx, DICE_PER_TURN)?;
        let player = &mut self.state.players[idx];

        if !player.active {
            if result.points < ENTRY_THRESHOLD {
                return Ok(TurnOutcome::NotEntered { points: result.points });
            }
            assign_points(player, result.points);
            player.active = true;
            let name = player.name.clone();
            self.console.show(&GameMessage::PlayerEntered { name, points: result.points })?;
            return Ok(TurnOutcome::Entered { points: result.points });
        }

        assign_points(player, result.points);
        let hot_dice = if result.has_hot_dice() {
            self.second_chance(idx, result.non_scoring)?
        } else {
            HotDice::NotOffered
        };
        Ok(TurnOutcome::Scored { points: result.points, hot_dice })
    }

    /// 热骰：只重掷不计分的骰子，新得分直接结算，不会再次触发热骰
    fn second_chance(&mut self, idx: usize, non_scoring: usize) -> Result<HotDice, GameError> {
        self.console.show(&GameMessage::HotDiceOffered { dice: non_scoring })?;
        if !self.console.roll_dice_again()? {
            return Ok(HotDice::Declined { dice: non_scoring });
        }

        let result = self.roll(idx, non_scoring)?;
        assign_points(&mut self.state.players[idx], result.points);
        Ok(HotDice::Rerolled { dice: non_scoring, points: result.points })
    }

    fn roll(&mut self, idx: usize, count: usize) -> Result<ScoreResult, GameError> {
        let dice = self.dice.roll(count).to_vec();
        let result = score_roll(&dice);
        debug!(?dice, points = result.points, non_scoring = result.non_scoring, "掷骰");

        let name = self.state.players[idx].name.clone();
        self.console.show(&GameMessage::DiceRolled { name, dice })?;
        Ok(result)
    }
}

// --- 单元测试 ---
