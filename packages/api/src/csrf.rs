//! # CSRF token lookup
//!
//! The backend sets a `csrftoken` cookie and expects its value echoed in an
//! `X-CSRFToken` header on every state-changing request. The token is read
//! from `document.cookie` at send time, so a rotated cookie is picked up on
//! the very next request.

pub const COOKIE_NAME: &str = "csrftoken";
pub const HEADER_NAME: &str = "X-CSRFToken";

/// Current token from the browser's cookie jar, if present.
#[cfg(target_arch = "wasm32")]
pub fn token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, COOKIE_NAME)
}

/// Off-browser there is no cookie jar.
#[cfg(not(target_arch = "wasm32"))]
pub fn token() -> Option<String> {
    None
}

/// Extract one cookie's decoded value from a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    for part in cookies.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            return Some(percent_decode(value));
        }
    }
    None
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Minimal percent-decoding for cookie values. Malformed escapes pass
/// through untouched.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_named_cookie() {
        let jar = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(cookie_value(jar, "csrftoken"), Some("tok456".to_string()));
    }

    #[test]
    fn ignores_cookies_whose_name_merely_starts_the_same() {
        let jar = "csrftoken_old=stale; csrftoken=fresh";
        assert_eq!(cookie_value(jar, "csrftoken"), Some("fresh".to_string()));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("sessionid=abc123", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn decodes_percent_escapes() {
        let jar = "csrftoken=a%3Db%20c";
        assert_eq!(cookie_value(jar, "csrftoken"), Some("a=b c".to_string()));
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn empty_value_is_allowed() {
        assert_eq!(cookie_value("csrftoken=; other=1", "csrftoken"), Some(String::new()));
    }
}
