//! Session cookie construction and parsing.
//!
//! Tokens issued at login are mirrored into `HttpOnly` cookies so browser
//! clients work without managing an Authorization header. The access
//! cookie is readable by every route; the refresh cookie is scoped to the
//! auth endpoints.

use axum::http::HeaderMap;

/// Cookie carrying the JWT access token.
pub const ACCESS_COOKIE: &str = "lifeline_access";

/// Cookie carrying the opaque refresh token.
pub const REFRESH_COOKIE: &str = "lifeline_refresh";

/// Path the refresh cookie is scoped to.
const REFRESH_PATH: &str = "/api/v1/auth";

/// `Set-Cookie` value for the access token.
pub fn access_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{ACCESS_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value for the refresh token.
pub fn refresh_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{REFRESH_COOKIE}={token}; Path={REFRESH_PATH}; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    )
}

/// `Set-Cookie` values that clear both session cookies (logout).
pub fn clear_cookies() -> [String; 2] {
    [
        format!("{ACCESS_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
        format!("{REFRESH_COOKIE}=; Path={REFRESH_PATH}; HttpOnly; SameSite=Lax; Max-Age=0"),
    ]
}

/// Extract a cookie value from the request's `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn test_cookie_value_parses_multiple_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            "other=1; lifeline_access=tok-abc; lifeline_refresh=tok-def"
                .parse()
                .unwrap(),
        );

        assert_eq!(
            cookie_value(&headers, ACCESS_COOKIE).as_deref(),
            Some("tok-abc")
        );
        assert_eq!(
            cookie_value(&headers, REFRESH_COOKIE).as_deref(),
            Some("tok-def")
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_cookie_value_without_header() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_value(&headers, ACCESS_COOKIE), None);
    }

    #[test]
    fn test_access_cookie_attributes() {
        let cookie = access_cookie("tok", 900);
        assert!(cookie.starts_with("lifeline_access=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=900"));
    }

    #[test]
    fn test_clear_cookies_expire_immediately() {
        for cookie in clear_cookies() {
            assert!(cookie.contains("Max-Age=0"));
        }
    }
}
