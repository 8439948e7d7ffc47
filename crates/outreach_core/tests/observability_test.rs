use outreach_core::{LogFormat, init_observability, shutdown_observability};

#[test]
fn test_init_observability_once() {
    let result = init_observability("outreach-test", LogFormat::Pretty, 60);
    assert!(
        result.is_ok(),
        "Observability initialization should succeed: {:?}",
        result.err()
    );

    // The global subscriber can only be installed once per process.
    let second = init_observability("outreach-test", LogFormat::Json, 60);
    assert!(second.is_err());

    shutdown_observability();
}
