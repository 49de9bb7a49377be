use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn url_appends_path_to_base() {
    assert_eq!(
        url("/stations"),
        format!("{}/stations", crate::config::API_BASE_URL)
    );
}

#[test]
fn url_keeps_base_without_trailing_slash() {
    assert!(!url("/stations").contains("//stations"));
}
