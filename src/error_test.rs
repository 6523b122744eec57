use super::*;

#[test]
fn warn_on_err_passes_values_through() {
    let ok: Result<u8, BrowserError> = Ok(7);
    assert_eq!(warn_on_err("theme", ok), Some(7));
}

#[test]
fn warn_on_err_swallows_failures() {
    let failed: Result<u8, BrowserError> = Err(BrowserError::Missing("window"));
    assert_eq!(warn_on_err("theme", failed), None);
}

#[test]
fn browser_error_names_the_missing_global() {
    assert_eq!(BrowserError::Missing("document.body").to_string(), "browser global 'document.body' is unavailable");
}
