use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::percent_decode_str;
use url::Url;

/// Standard base64 of the UTF-8 bytes of `normal`, padded, no line breaks.
pub fn base64_encode(normal: &str) -> String {
    STANDARD.encode(normal.as_bytes())
}

/// `Authorization` header value for the user-info embedded in `url`, if any.
///
/// `https://user:pw@host/` gives `Basic dXNlcjpwdw==`. The credentials are
/// always `user:password`, so `user@` and `user:@` both encode `user:`.
///
/// Components are percent-decoded first, so `p%40ss` is sent as `p@ss`.
/// This differs from encoding the raw, still-escaped user-info.
pub fn basic_auth_header(url: &Url) -> Option<String> {
    let username = url.username();
    let password = url.password();
    if username.is_empty() && password.is_none() {
        return None;
    }

    let mut user_info = percent_decode_str(username).decode_utf8_lossy().into_owned();
    user_info.push(':');
    if let Some(password) = password {
        user_info.push_str(&percent_decode_str(password).decode_utf8_lossy());
    }

    Some(format!("Basic {}", base64_encode(&user_info)))
}
