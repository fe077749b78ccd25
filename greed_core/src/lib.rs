//! # Greed 骰子游戏核心逻辑库
//!
//! 这个 `core` crate 包含了 Greed 游戏的计分规则、玩家与对局状态、
//! 回合状态机，以及引擎与前端之间传递的消息定义。
//! 掷骰子和控制台交互都通过 trait 抽象出来，
//! 因此它可以被终端、图形界面或测试脚本驱动。

mod console;
mod dice;
mod error;
mod logic;
mod message;
mod scoring;
mod state;

pub use console::*;

pub use dice::*;

pub use error::*;

pub use logic::*;

pub use message::*;

pub use scoring::*;

pub use state::*;
