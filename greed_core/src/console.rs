use crate::error::GameError;
use crate::message::GameMessage;

/// 游戏与玩家之间的交互接口
///
/// 所有提问都是阻塞的：引擎会一直等到回答后才继续推进。
/// 终端、图形界面或测试脚本都可以实现它。
pub trait Console {
    /// 询问玩家人数
    fn number_of_players(&mut self) -> Result<usize, GameError>;

    /// 询问第 `index` 位玩家 (从 0 开始) 的名字
    fn ask_for_name(&mut self, index: usize) -> Result<String, GameError>;

    /// 回合开始前询问是否掷骰子
    fn roll_dice(&mut self) -> Result<bool, GameError>;

    /// 热骰时询问是否重掷不计分的骰子
    fn roll_dice_again(&mut self) -> Result<bool, GameError>;

    fn show(&mut self, message: &GameMessage) -> Result<(), GameError>;
}
