mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod swipe;
mod ticker;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [options]

Steer a snake around a grid with the arrow keys (or h j k l, a s w d, or by
dragging with the mouse).  Eat the food to grow and speed up; don't hit the
walls or yourself.

Options:
  -c, --config <FILE>   Read configuration from <FILE>
      --log-file <FILE> Write log messages to <FILE>
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

impl Arguments {
    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::load(&Config::default_path()?, true),
        };
        config.context("failed to load configuration")
    }

    fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let settings = config.settings().context("invalid configuration")?;
        if let Some(path) = self.log_file.as_deref().or(config.log.file.as_deref()) {
            logging::init(path, config.log.level)
                .with_context(|| format!("failed to set up logging to {}", path.display()))?;
        }
        let game = Game::new(settings);
        let mut terminal = ratatui::init();
        let r = execute!(io::stdout(), EnableMouseCapture)
            .and_then(|()| App::new(game).run(&mut terminal));
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        io_result(r)?;
        Ok(())
    }
}

fn main() -> ExitCode {
    let r = Mode::from_parser(Parser::from_env())
        .map_err(anyhow::Error::from)
        .and_then(|mode| match mode {
            Mode::Run(args) => args.run(),
            Mode::Help => {
                print!("{USAGE}");
                Ok(())
            }
            Mode::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        });
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

/// Treat a broken pipe as a normal exit
fn io_result(r: io::Result<()>) -> io::Result<()> {
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Mode, lexopt::Error> {
        Mode::from_parser(Parser::from_args(args))
    }

    #[rstest]
    #[case(&[], Mode::Run(Arguments::default()))]
    #[case(&["--help"], Mode::Help)]
    #[case(&["-h"], Mode::Help)]
    #[case(&["-V"], Mode::Version)]
    #[case(&["--config", "snake.toml", "--version"], Mode::Version)]
    #[case(
        &["-c", "snake.toml"],
        Mode::Run(Arguments { config: Some(PathBuf::from("snake.toml")), log_file: None })
    )]
    #[case(
        &["--log-file=/tmp/snake.log", "--config", "x.toml"],
        Mode::Run(Arguments {
            config: Some(PathBuf::from("x.toml")),
            log_file: Some(PathBuf::from("/tmp/snake.log")),
        })
    )]
    fn test_parse(#[case] args: &[&str], #[case] mode: Mode) {
        assert_eq!(parse(args).expect("arguments should parse"), mode);
    }

    #[rstest]
    #[case(&["--speed", "9"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn test_parse_error(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn broken_pipe_is_success() {
        let r = io_result(Err(io::Error::from(ErrorKind::BrokenPipe)));
        assert!(r.is_ok());
        let r = io_result(Err(io::Error::from(ErrorKind::Other)));
        assert!(r.is_err());
    }
}
