//! Field rules shared by the validated configuration types

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

use super::labels::is_hostname_segment;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Absolute http(s) URL with a host
pub(crate) fn absolute_url(value: &str) -> Result<(), ValidationError> {
    let parsed =
        Url::parse(value).map_err(|_| rule_error("absolute_url", "must be an absolute URL"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(rule_error("http_scheme", "must use the http or https scheme"));
    }
    if !parsed.has_host() {
        return Err(rule_error("url_host", "must name a host"));
    }

    Ok(())
}

/// Dot-separated hostname labels: ASCII alphanumerics and '-'
pub(crate) fn hostname_segment(value: &str) -> Result<(), ValidationError> {
    if is_hostname_segment(value) {
        Ok(())
    } else {
        Err(rule_error(
            "hostname_segment",
            "must be dot-separated hostname labels",
        ))
    }
}
