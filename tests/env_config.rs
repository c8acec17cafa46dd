//! Reconciler configuration read from the process environment.

use lazy_lifecycle::ReconcilerConfig;

#[test]
fn test_reconciler_config_from_env() {
    // SAFETY: the only test in this binary, so nothing reads the environment concurrently
    unsafe {
        std::env::set_var("LAZY_LIFECYCLE_LOG", "on");
        std::env::set_var("LAZY_LIFECYCLE_LABEL", "  env-tab ");
    }

    let config = ReconcilerConfig::from_env().unwrap();
    assert!(config.log_enabled);
    assert_eq!(config.label.as_deref(), Some("env-tab"));
}
