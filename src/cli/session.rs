use crate::cli::args::{Command, SessionArgs, SessionCommand};
use crate::cli::commands::dispatch;
use crate::cli::output::OutputWriter;
use crate::core::controller::StateController;
use crate::core::logger::FacilityLogger;
use crate::domain::error::FmtlogResult;
use clap::Parser;
use std::io::{BufRead, Write};

const PROMPT: &str = "(fmtlog) ";

/// Interactive session loop
///
/// Reads one command per line; facility state persists across commands for
/// the life of the loop. The logger is the session's handle on the facility
/// itself, exercised by the `write` command. Parse and command errors are
/// reported to the sink and leave the state untouched. Ends on `quit`,
/// `exit` or end of input.
pub fn run<R: BufRead>(
    controller: &StateController,
    logger: &FacilityLogger,
    writer: &dyn OutputWriter,
    mut input: R,
) -> FmtlogResult<()> {
    tracing::debug!("interactive session started");
    let mut line = String::new();
    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        // Whitespace tokenization; quoting is not supported.
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match SessionArgs::try_parse_from(tokens.iter().copied()) {
            Ok(SessionArgs {
                command: SessionCommand::Quit,
            }) => break,
            Ok(SessionArgs { command }) => {
                let result = match command {
                    SessionCommand::Enable(enable) => {
                        dispatch(Command::Enable(enable), controller, writer)
                    }
                    SessionCommand::Disable => dispatch(Command::Disable, controller, writer),
                    SessionCommand::State => dispatch(Command::State, controller, writer),
                    SessionCommand::Write { text } => logger.write(&text.join(" ")),
                    SessionCommand::Quit => break,
                };
                if let Err(err) = result {
                    writer.write_error(&err.to_string())?;
                }
            }
            Err(parse_err) => {
                // Help and version requests render through the same path.
                writer.write_error(&parse_err.to_string())?;
            }
        }
    }
    tracing::debug!("interactive session ended");
    Ok(())
}
