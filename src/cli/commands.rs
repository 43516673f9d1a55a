use crate::cli::args::{Args, Command, EnableArgs};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::cli::session;
use crate::core::controller::{OutputRequest, StateController};
use crate::core::logger::FacilityLogger;
use crate::core::state::FacilityState;
use crate::domain::error::FmtlogError;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Execute CLI command
pub fn execute_command(args: Args) -> Result<(), FmtlogError> {
    let writer = ConsoleWriter::new(args.format);

    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_from_path(config_path.as_ref())?
    } else {
        config_manager.load()?
    };

    // Initialize diagnostics
    if !args.quiet {
        logging::init(&config, args.verbose)?;
    }

    let state = Arc::new(FacilityState::new());
    let controller = StateController::new(state.clone());

    match args.command {
        None => {
            let logger = FacilityLogger::new(state).with_default_file(config.default_file);
            session::run(&controller, &logger, &writer, io::stdin().lock())
        }
        Some(command) => dispatch(command, &controller, &writer),
    }
}

/// Dispatch one already-parsed command against the controller
pub fn dispatch(
    command: Command,
    controller: &StateController,
    writer: &dyn OutputWriter,
) -> Result<(), FmtlogError> {
    match command {
        Command::Enable(enable) => {
            let (level, output) = enable_request(enable);
            controller.enable(level, output)?;
            writer.write_message(&format!(
                "Logging enabled at level '{}'",
                controller.query().level
            ))?;
            Ok(())
        }
        Command::Disable => {
            controller.disable();
            writer.write_message("Logging disabled")?;
            Ok(())
        }
        Command::State => {
            writer.write_state(&controller.query())?;
            Ok(())
        }
    }
}

/// Translate parsed `enable` arguments into the controller's intent
fn enable_request(args: EnableArgs) -> (Option<crate::core::state::Level>, Option<OutputRequest>) {
    let level = args.level.map(Into::into);
    let output = args.output.map(|path| output_request(&path));
    (level, output)
}

/// The literal token `-` is the explicit clear-back-to-default request
fn output_request(path: &Path) -> OutputRequest {
    if path == Path::new("-") {
        OutputRequest::Clear
    } else {
        OutputRequest::Path(path.to_path_buf())
    }
}
