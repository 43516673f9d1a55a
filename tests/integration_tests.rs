use fmtlog::cli::args::{Command, EnableArgs, LevelArg, ReportFormat};
use fmtlog::cli::commands::dispatch;
use fmtlog::cli::output::CaptureWriter;
use fmtlog::{
    Destination, FacilityLogger, FacilityState, FmtlogConfig, FmtlogError, Level, OutputRequest,
    StateController,
};
use std::sync::Arc;

/// Integration tests for the fmtlog library
#[cfg(test)]
mod integration_tests {
    use super::*;

    fn session() -> (Arc<FacilityState>, StateController, CaptureWriter) {
        let state = Arc::new(FacilityState::new());
        let controller = StateController::new(state.clone());
        (state, controller, CaptureWriter::new(ReportFormat::Text))
    }

    #[test]
    fn test_fresh_session_reports_defaults() {
        let (_, controller, writer) = session();
        dispatch(Command::State, &controller, &writer).expect("state");
        assert_eq!(writer.output(), vec!["level:  none\noutput: -".to_string()]);
    }

    #[test]
    fn test_enable_round_trip_through_logger() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("formatters.log");
        let (state, controller, _) = session();

        controller
            .enable(
                Some(Level::AutoFlush),
                Some(OutputRequest::Path(target.clone())),
            )
            .expect("enable");

        let logger = FacilityLogger::new(state);
        logger.write("something logged").expect("write");

        // Auto-flush means the line is on disk immediately.
        let resolved = dir.path().canonicalize().unwrap().join("formatters.log");
        assert_eq!(
            std::fs::read_to_string(resolved).unwrap(),
            "something logged\n"
        );
    }

    #[test]
    fn test_disable_remembers_destination_for_next_enable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (state, controller, _) = session();

        controller
            .enable(
                Some(Level::Fast),
                Some(OutputRequest::Path(dir.path().join("keep.log"))),
            )
            .expect("enable");
        let configured = state.output.get();

        controller.disable();
        assert_eq!(state.level.get(), Level::None);

        controller.enable(None, None).expect("re-enable");
        assert_eq!(state.level.get(), Level::Fast);
        assert_eq!(state.output.get(), configured);
    }

    #[test]
    fn test_state_report_after_configuration() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, controller, writer) = session();

        dispatch(
            Command::Enable(EnableArgs {
                level: Some(LevelArg::AutoFlush),
                output: Some(dir.path().join("foo")),
            }),
            &controller,
            &writer,
        )
        .expect("enable");
        dispatch(Command::State, &controller, &writer).expect("state");

        let resolved = dir.path().canonicalize().unwrap().join("foo");
        assert_eq!(
            writer.output(),
            vec![
                "Logging enabled at level 'auto-flush'".to_string(),
                format!("level:  auto-flush\noutput: {}", resolved.display()),
            ]
        );
    }

    #[test]
    fn test_config_default_file_reaches_logger() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config: FmtlogConfig = toml::from_str(&format!(
            "default_file = \"{}\"",
            dir.path().join("session.log").display()
        ))
        .expect("parse config");

        let (state, controller, _) = session();
        controller.enable(Some(Level::AutoFlush), None).expect("enable");

        // Destination stays Default, so the config-supplied file is used.
        let logger = FacilityLogger::new(state).with_default_file(config.default_file);
        logger.write("routed by config").expect("write");

        assert_eq!(
            std::fs::read_to_string(dir.path().join("session.log")).unwrap(),
            "routed by config\n"
        );
    }

    #[test]
    fn test_home_relative_destination() {
        let (state, controller, _) = session();
        controller
            .enable(None, Some(OutputRequest::Path("~/baz".into())))
            .expect("enable");

        let home = dirs::home_dir()
            .expect("home dir")
            .canonicalize()
            .expect("canonicalize home");
        assert_eq!(state.output.get(), Destination::Path(home.join("baz")));
    }

    #[test]
    fn test_config_serialization() {
        let config = FmtlogConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize config");
        let deserialized: FmtlogConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize config");

        assert_eq!(config.default_file, deserialized.default_file);
        assert_eq!(config.trace_level, deserialized.trace_level);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::None.to_string(), "none");
        assert_eq!(Level::Fast.to_string(), "fast");
        assert_eq!(Level::AutoFlush.to_string(), "auto-flush");
        assert_eq!(Level::CallerInfo.to_string(), "caller-info");
    }

    #[test]
    fn test_error_display() {
        let error = FmtlogError::Config {
            message: "Invalid configuration".to_string(),
        };
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Invalid configuration"));

        let error = FmtlogError::InvalidLevel("loud".to_string());
        assert!(error.to_string().contains("Invalid logging level"));
    }
}
