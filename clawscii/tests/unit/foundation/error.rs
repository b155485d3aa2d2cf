use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ClawError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ClawError::decode("claw.png", anyhow::anyhow!("truncated"))
            .to_string()
            .contains("decode error: 'claw.png'")
    );
    assert!(
        ClawError::output(3, "high", std::io::Error::other("disk full"))
            .to_string()
            .contains("output error: frame 3 tier 'high'")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ClawError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn output_error_exposes_io_source() {
    let err = ClawError::output(1, "low", std::io::Error::other("denied"));
    let source = std::error::Error::source(&err).map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("denied"));
}
