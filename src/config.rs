use std::{ops::Range, path::PathBuf, str::FromStr, time::Duration};

use crate::{
    view::{Window, MAX_WINDOW_SIDE},
    LifeError, LifeResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// pattern file to seed from, the built-in seed when absent.
    pub pattern: Option<PathBuf>,
    pub generations: usize,
    pub window: Window,
    pub pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: None,
            generations: 4,
            window: Window::new(0..5, 0..5),
            pause: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// reads the arguments following the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> LifeResult<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--generations" | "-n" => {
                    config.generations = parse_number(&arg, &value(&arg, &mut args)?)?;
                }
                "--window" | "-w" => {
                    config.window = parse_window(&arg, &value(&arg, &mut args)?)?;
                }
                "--pause" | "-p" => {
                    let millis: u64 = parse_number(&arg, &value(&arg, &mut args)?)?;
                    config.pause = Duration::from_millis(millis);
                }
                flag if flag.starts_with('-') => {
                    return Err(invalid(flag, "unknown flag"));
                }
                _ if config.pattern.is_some() => {
                    return Err(invalid(&arg, "only one pattern file may be given"));
                }
                _ => config.pattern = Some(PathBuf::from(&arg)),
            }
        }
        Ok(config)
    }
}

fn value(flag: &str, args: &mut impl Iterator<Item = String>) -> LifeResult<String> {
    args.next()
        .ok_or_else(|| LifeError::MissingValue(flag.to_string()))
}

fn invalid(arg: &str, reason: impl ToString) -> LifeError {
    LifeError::InvalidArgument {
        arg: arg.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_number<T>(flag: &str, text: &str) -> LifeResult<T>
where
    T: FromStr,
    T::Err: ToString,
{
    text.parse()
        .map_err(|err: T::Err| invalid(flag, format!("{text:?}: {}", err.to_string())))
}

/// `X0..X1,Y0..Y1`
fn parse_window(flag: &str, text: &str) -> LifeResult<Window> {
    let (xs, ys) = text
        .split_once(',')
        .ok_or_else(|| invalid(flag, format!("{text:?}: expected X0..X1,Y0..Y1")))?;
    let window = Window::new(parse_range(flag, xs)?, parse_range(flag, ys)?);
    if window.width() > MAX_WINDOW_SIDE || window.height() > MAX_WINDOW_SIDE {
        return Err(invalid(
            flag,
            format!("{text:?}: sides may not exceed {MAX_WINDOW_SIDE} cells"),
        ));
    }
    Ok(window)
}

fn parse_range(flag: &str, text: &str) -> LifeResult<Range<i64>> {
    let (start, end) = text
        .trim()
        .split_once("..")
        .ok_or_else(|| invalid(flag, format!("{text:?}: expected START..END")))?;
    let start: i64 = parse_number(flag, start.trim())?;
    let end: i64 = parse_number(flag, end.trim())?;
    if end < start {
        return Err(invalid(flag, format!("{text:?}: range ends before it starts")));
    }
    Ok(start..end)
}
