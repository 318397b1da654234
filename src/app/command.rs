//! Commands an input layer sends to the running simulation.
//!
//! Text form, one command per line:
//!
//! ```text
//! alive 1 2     dead 1 2     toggle 1 2
//! random 20     pattern glider 3 3
//! step          clear        resize 8 6
//! pause         resume       quit
//! run / start   (same as resume)
//! ```

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetAlive { x: i32, y: i32 },
    SetDead { x: i32, y: i32 },
    Toggle { x: i32, y: i32 },
    Randomize(usize),
    Pattern { name: String, x: i32, y: i32 },
    Step,
    Clear,
    Resize { width: u16, height: u16 },
    Pause,
    Resume,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' expects {expected} argument(s)")]
    Arity {
        command: &'static str,
        expected: usize,
    },

    #[error("invalid number '{0}'")]
    Number(String),
}

fn number<T: FromStr>(raw: &str) -> Result<T, CommandParseError> {
    raw.parse()
        .map_err(|_| CommandParseError::Number(raw.to_string()))
}

fn args<'a, const N: usize>(
    command: &'static str,
    rest: &[&'a str],
) -> Result<[&'a str; N], CommandParseError> {
    <[&str; N]>::try_from(rest).map_err(|_| CommandParseError::Arity {
        command,
        expected: N,
    })
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (head, rest) = words.split_first().ok_or(CommandParseError::Empty)?;

        match head.to_ascii_lowercase().as_str() {
            "alive" | "set" => {
                let [x, y] = args::<2>("alive", rest)?;
                Ok(Self::SetAlive {
                    x: number(x)?,
                    y: number(y)?,
                })
            }
            "dead" | "kill" => {
                let [x, y] = args::<2>("dead", rest)?;
                Ok(Self::SetDead {
                    x: number(x)?,
                    y: number(y)?,
                })
            }
            "toggle" | "t" => {
                let [x, y] = args::<2>("toggle", rest)?;
                Ok(Self::Toggle {
                    x: number(x)?,
                    y: number(y)?,
                })
            }
            "random" | "randomize" => {
                let [count] = args::<1>("random", rest)?;
                Ok(Self::Randomize(number(count)?))
            }
            "pattern" => {
                let [name, x, y] = args::<3>("pattern", rest)?;
                Ok(Self::Pattern {
                    name: name.to_string(),
                    x: number(x)?,
                    y: number(y)?,
                })
            }
            "resize" => {
                let [width, height] = args::<2>("resize", rest)?;
                Ok(Self::Resize {
                    width: number(width)?,
                    height: number(height)?,
                })
            }
            "step" | "s" => args::<0>("step", rest).map(|_| Self::Step),
            "clear" => args::<0>("clear", rest).map(|_| Self::Clear),
            "pause" | "p" => args::<0>("pause", rest).map(|_| Self::Pause),
            "resume" | "r" | "run" | "start" => args::<0>("resume", rest).map(|_| Self::Resume),
            "quit" | "q" | "exit" => args::<0>("quit", rest).map(|_| Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            "toggle 3 -1".parse::<Command>(),
            Ok(Command::Toggle { x: 3, y: -1 })
        );
        assert_eq!(
            "ALIVE 0 4".parse::<Command>(),
            Ok(Command::SetAlive { x: 0, y: 4 })
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!("  pause ".parse::<Command>(), Ok(Command::Pause));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("step".parse::<Command>(), Ok(Command::Step));
        assert_eq!("start".parse::<Command>(), Ok(Command::Resume));
        assert_eq!("Run".parse::<Command>(), Ok(Command::Resume));
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!(
            "pattern Glider 2 2".parse::<Command>(),
            Ok(Command::Pattern {
                name: "Glider".to_string(),
                x: 2,
                y: 2
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandParseError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandParseError::Unknown("dance".to_string()))
        );
        assert_eq!(
            "toggle 1".parse::<Command>(),
            Err(CommandParseError::Arity {
                command: "toggle",
                expected: 2
            })
        );
        assert_eq!(
            "resize -1 4".parse::<Command>(),
            Err(CommandParseError::Number("-1".to_string()))
        );
        assert!("pause now".parse::<Command>().is_err());
    }
}
