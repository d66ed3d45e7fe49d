use super::*;

#[test]
fn source_targets_configured_identity_url() {
    let config = ClientConfig::from_raw(Some("https://id.example.com/")).unwrap();
    let source = HttpIdentitySource::new(&config);
    assert_eq!(source.url(), "https://id.example.com/api/auth/me");
}

#[test]
fn same_origin_source_uses_relative_url() {
    let source = HttpIdentitySource::new(&ClientConfig::default());
    assert_eq!(source.url(), "/api/auth/me");
}

#[test]
fn status_error_names_the_status() {
    let err = IdentityError::Status { status: 502 };
    assert_eq!(err.to_string(), "identity service returned status 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_has_no_transport() {
    let source = HttpIdentitySource::new(&ClientConfig::default());
    let result = futures::executor::block_on(source.fetch_identity());
    assert_eq!(result, Err(IdentityError::Unavailable));
}
