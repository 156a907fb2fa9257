use std::path::PathBuf;
use std::time::Duration;

use promptwizard::{ClipboardConfig, Config, Language, TargetAi};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var("PROMPT_LANG");
    std::env::remove_var("PROMPT_TARGET");
    std::env::remove_var("PROMPT_COPIED_RESET_MS");
    std::env::remove_var("PROMPT_CLIPBOARD");
}

#[test]
#[serial]
fn config_from_env_defaults() {
    clear_env();
    let cfg = Config::from_env();
    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.target, TargetAi::Midjourney);
    assert_eq!(cfg.copied_reset, Duration::from_millis(2000));
    assert_eq!(cfg.clipboard, ClipboardConfig::Stdout);
}

#[test]
#[serial]
fn config_from_env_custom_values() {
    clear_env();
    std::env::set_var("PROMPT_LANG", "pl");
    std::env::set_var("PROMPT_TARGET", "sd");
    std::env::set_var("PROMPT_COPIED_RESET_MS", "500");
    std::env::set_var("PROMPT_CLIPBOARD", "file:/tmp/prompt.txt");
    let cfg = Config::from_env();
    assert_eq!(cfg.language, Language::Pl);
    assert_eq!(cfg.target, TargetAi::StableDiffusion);
    assert_eq!(cfg.copied_reset, Duration::from_millis(500));
    assert_eq!(
        cfg.clipboard,
        ClipboardConfig::File(PathBuf::from("/tmp/prompt.txt"))
    );
    clear_env();
}

#[test]
#[serial]
fn config_from_env_invalid_values_fall_back() {
    clear_env();
    std::env::set_var("PROMPT_LANG", "klingon");
    std::env::set_var("PROMPT_TARGET", "imagen");
    std::env::set_var("PROMPT_COPIED_RESET_MS", "soon");
    std::env::set_var("PROMPT_CLIPBOARD", "pasteboard");
    let cfg = Config::from_env();
    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.target, TargetAi::Midjourney);
    assert_eq!(cfg.copied_reset, Duration::from_millis(2000));
    assert_eq!(cfg.clipboard, ClipboardConfig::Stdout);
    clear_env();
}

#[cfg(not(feature = "system-clipboard"))]
#[test]
fn system_clipboard_needs_feature() {
    assert!(ClipboardConfig::System.open().is_err());
}
