//! Interactive shell
//!
//! One session lives as long as the shell does, so a login carries over to
//! every later command.

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::commands::{App, Command};

const PROMPT: &str = "essays> ";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// What one input line asks the shell to do
#[derive(Debug)]
enum Input {
    Empty,
    Quit,
    Run(Command),
    /// Help text or a parse error, printed as-is
    Message(String),
}

fn parse_line(line: &str) -> Input {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => return Input::Message(format!("error: {e}")),
    };
    match words.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => Input::Empty,
        ["exit" | "quit"] => Input::Quit,
        _ => match ShellLine::try_parse_from(&words) {
            Ok(parsed) => Input::Run(parsed.command),
            Err(e) => Input::Message(e.render().to_string()),
        },
    }
}

pub async fn run(app: &App) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(b"Type `help` for commands, `exit` to leave.\n")
        .await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match parse_line(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Message(text) => text,
            Input::Run(command) => {
                debug!(?command, "Running shell command");
                match app.execute(command).await {
                    Ok(view) => view,
                    Err(e) => format!("Error: {e}"),
                }
            }
        };

        stdout.write_all(output.trim_end().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }

    Ok(())
}
