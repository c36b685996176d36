use inv_domain::config::LoggingConfig;
use inv_logger::Logger;

#[test]
fn default_config_has_no_log_dir() {
    let logger = Logger::from_config("integration-console-only", &LoggingConfig::default())
        .expect("logger should initialize");

    assert!(logger.log_dir().is_none(), "console-only logger should not open a log file");
}
