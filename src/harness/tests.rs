#![cfg(test)]

use crate::config::Config;
use crate::video::tests::{exclusive, ScriptedDriver};
use crate::video::RendererBackend;

use super::*;

fn lines(report: &Report) -> Vec<String> {
    report.to_string().lines().map(str::to_string).collect()
}

#[test]
fn test_report_when_everything_comes_up() {
    let _guard = exclusive();
    let config = Config::default();

    let report = run_with(&config, ScriptedDriver::default()).unwrap();
    assert!(report.is_success());
    assert!(report.window().is_some());
    assert!(report.renderer().is_some());

    let lines = lines(&report);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("window = 0x"));
    assert!(lines[1].starts_with("renderer = 0x"));
    assert_eq!(lines[2], "Success!");
}

#[test]
fn test_report_when_no_display_is_available() {
    let _guard = exclusive();
    let config = Config::default();
    let driver = ScriptedDriver {
        fail_window: true,
        ..ScriptedDriver::default()
    };

    let report = run_with(&config, driver).unwrap();
    assert!(!report.is_success());
    assert!(report.window().is_none());
    assert!(report.renderer().is_none());

    let lines = lines(&report);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "window = null");
    assert_eq!(lines[1], "renderer = null");
    assert!(lines[2].starts_with("Error: "));
    assert!(lines[2].contains("no display available"));
}

#[test]
fn test_report_when_renderer_backend_is_unavailable() {
    let _guard = exclusive();
    let mut config = Config::default();
    config.set_renderer_backend(Some(RendererBackend::Software));

    let report = run_with(&config, ScriptedDriver::default()).unwrap();
    assert!(!report.is_success());
    assert!(report.window().is_some());
    assert!(report.renderer().is_none());

    let lines = lines(&report);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("window = 0x"));
    assert_eq!(lines[1], "renderer = null");
    let diagnostic = lines[2].strip_prefix("Error: ").unwrap();
    assert!(!diagnostic.is_empty());
}

#[test]
fn test_resource_failures_do_not_abort_the_run() {
    let _guard = exclusive();
    let config = Config::default();

    // Only subsystem initialization is allowed to abort the run; window
    // and renderer failures must still produce a report.
    for (fail_window, fail_renderer) in [(false, false), (true, false), (false, true)] {
        let driver = ScriptedDriver {
            fail_window,
            fail_renderer,
            ..ScriptedDriver::default()
        };
        assert!(run_with(&config, driver).is_ok());
    }

    let driver = ScriptedDriver {
        fail_init: true,
        ..ScriptedDriver::default()
    };
    assert!(run_with(&config, driver).is_err());
}

#[test]
fn test_report_has_exactly_one_outcome_line() {
    let _guard = exclusive();
    let config = Config::default();

    for fail_renderer in [false, true] {
        let driver = ScriptedDriver {
            fail_renderer,
            ..ScriptedDriver::default()
        };
        let report = run_with(&config, driver).unwrap();
        let rendered = report.to_string();
        let success_lines = rendered.lines().filter(|line| *line == "Success!").count();
        let error_lines = rendered
            .lines()
            .filter(|line| line.starts_with("Error: "))
            .count();
        assert_eq!(success_lines + error_lines, 1);
    }
}

#[test]
fn test_subsystem_is_released_after_each_run() {
    let _guard = exclusive();
    let config = Config::default();

    // Repeated runs must leave no subsystem state behind.
    for _ in 0..3 {
        let report = run_with(&config, ScriptedDriver::default()).unwrap();
        assert!(report.is_success());
    }
}
