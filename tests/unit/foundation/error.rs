use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CubeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CubeError::controller("x")
            .to_string()
            .contains("controller error:")
    );
    assert!(
        CubeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CubeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
