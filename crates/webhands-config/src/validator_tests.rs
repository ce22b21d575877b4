use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_zero_max_steps() {
    let mut config = Config::default();
    config.agent.max_steps = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "agent.max_steps"));
}

#[test]
fn test_validate_zero_actions_per_step() {
    let mut config = Config::default();
    config.agent.max_actions_per_step = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "agent.max_actions_per_step"));
}

#[test]
fn test_validate_zero_failures_warning() {
    let mut config = Config::default();
    config.agent.max_failures = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "agent.max_failures"));
}

#[test]
fn test_validate_zero_page_scrolls_warning() {
    let mut config = Config::default();
    config.scroll.max_page_scrolls = Some(0);

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "scroll.max_page_scrolls"));
}

#[test]
fn test_validate_done_cannot_be_disabled() {
    let mut config = Config::default();
    config.actions.disabled.push("done".to_string());

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
}

#[test]
fn test_validate_duplicate_disabled_warning() {
    let mut config = Config::default();
    config.actions.disabled = vec!["wait".to_string(), "wait".to_string()];

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_ensure_valid_reports_first_error() {
    let mut config = Config::default();
    config.agent.max_steps = 0;

    let err = ConfigValidator::ensure_valid(&config).unwrap_err();
    assert!(err.to_string().contains("agent.max_steps"));
}
