use argyle_domain::config::LogConfig;
use argyle_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configured_log_directory_receives_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LogConfig { path: Some(log_dir.clone()), json: true, ..LogConfig::default() };

    let logger = Logger::from_config("integration-file-logging", &config)?.console(false).init()?;

    tracing::info!(page = "shop", "navigated");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let written = fs::read_to_string(&log_file)?;
    let first = written.lines().next().expect("log file should not be empty");
    assert!(first.starts_with('{'), "json sink should write JSON lines: {first}");
    assert!(first.contains("navigated"));

    Ok(())
}
