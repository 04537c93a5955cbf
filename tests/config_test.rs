use audiohook::presentation::config::{DEFAULT_CALLBACK_PATH, derive_callback_path};

#[test]
fn given_url_with_path_when_deriving_then_path_is_extracted() {
    assert_eq!(
        derive_callback_path("https://bridge.example.com/hooks/operations"),
        "/hooks/operations"
    );
}

#[test]
fn given_url_with_query_when_deriving_then_query_is_stripped() {
    assert_eq!(
        derive_callback_path("https://bridge.example.com/hooks/operations?token=abc"),
        "/hooks/operations"
    );
}

#[test]
fn given_url_without_path_when_deriving_then_default_is_used() {
    assert_eq!(
        derive_callback_path("https://bridge.example.com"),
        DEFAULT_CALLBACK_PATH
    );
}

#[test]
fn given_url_with_bare_slash_when_deriving_then_default_is_used() {
    assert_eq!(
        derive_callback_path("https://bridge.example.com/"),
        DEFAULT_CALLBACK_PATH
    );
}

#[test]
fn given_url_with_port_when_deriving_then_path_is_extracted() {
    assert_eq!(
        derive_callback_path("http://10.0.0.5:3000/hooks/operations"),
        "/hooks/operations"
    );
}
