use std::io::{self, BufRead, Write};

use greed_core::{Console, GameError, GameMessage};

use crate::config::MessageFormat;

/// 基于文本行的终端控制台
///
/// 输入输出是泛型的，方便在测试里用内存缓冲区代替 stdin/stdout。
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    format: MessageFormat,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, format: MessageFormat) -> Self {
        TerminalConsole { input, output, format }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 打印提示并读取一行回答，输入结束时返回 `InputClosed`
    ///
    /// 非 UTF-8 字节会被替换成 U+FFFD，之后按普通的无效回答处理。
    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn render_text(&mut self, message: &GameMessage) -> io::Result<()> {
        let out = &mut self.output;
        match message {
            GameMessage::Welcome => {
                writeln!(out, "*********************************")?;
                writeln!(out, "**                             **")?;
                writeln!(out, "**   欢迎来到 Greed 骰子游戏   **")?;
                writeln!(out, "**                             **")?;
                writeln!(out, "*********************************")?;
            }
            GameMessage::PlayerTurn { name } => writeln!(out, "\n轮到 {} 了", name)?,
            GameMessage::DiceRolled { name, dice } => {
                writeln!(out, "{}，你的骰子是:", name)?;
                let faces: Vec<String> = dice.iter().map(|d| format!(">> {}", d)).collect();
                writeln!(out, "{}", faces.join("  "))?;
            }
            GameMessage::PlayerEntered { name, points } => {
                writeln!(out, "{} 单次掷出 {} 分，正式入场！", name, points)?
            }
            GameMessage::HotDiceOffered { dice } => writeln!(out, "你还有 {} 颗骰子可以计分", dice)?,
            GameMessage::PlayerPoints { name, score } => writeln!(out, "{} 现在有 {} 分！", name, score)?,
            GameMessage::FinalRound => {
                writeln!(out, "\n*******************************")?;
                writeln!(out, "*  最后一轮开始，掷骰子吧！   *")?;
                writeln!(out, "*******************************")?;
            }
            GameMessage::ScoreTable { players } => {
                writeln!(out, "\n*** 计分表 ***")?;
                writeln!(out, "玩家 | 分数")?;
                for player in players {
                    writeln!(out, "{} | {}", player.name, player.score)?;
                }
                writeln!(out)?;
            }
            GameMessage::Winner { player } => {
                writeln!(out, "\n****   游戏赢家   ****")?;
                writeln!(out, "赢家是 {}，共 {} 分！", player.name, player.score)?;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn number_of_players(&mut self) -> Result<usize, GameError> {
        let line = self.prompt("有多少位玩家要玩 Greed 游戏？\n>> ")?;
        Ok(parse_count(&line))
    }

    fn ask_for_name(&mut self, index: usize) -> Result<String, GameError> {
        self.prompt(&format!("请输入玩家 {} 的名字 >> ", index))
    }

    fn roll_dice(&mut self) -> Result<bool, GameError> {
        let answer = self.prompt("要掷骰子吗？[yes/no]\n")?;
        Ok(parse_yes(&answer))
    }

    fn roll_dice_again(&mut self) -> Result<bool, GameError> {
        let answer = self.prompt("要重掷这些骰子吗？[yes/no]\n")?;
        Ok(parse_yes(&answer))
    }

    fn show(&mut self, message: &GameMessage) -> Result<(), GameError> {
        match self.format {
            MessageFormat::Text => self.render_text(message)?,
            MessageFormat::Json => {
                serde_json::to_writer(&mut self.output, message).map_err(io::Error::from)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }
}

/// 只有 `yes` (不区分大小写) 算作肯定回答
pub fn parse_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// 取行首的整数作为人数；无法解析或为负数时得到 0，随后会被人数校验拒绝
pub fn parse_count(line: &str) -> usize {
    let line = line.trim_start();
    let digits = line.strip_prefix('+').unwrap_or(line);
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}

// --- 单元测试 ---
