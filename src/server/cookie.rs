//! Visitor cookie parsing and `Set-Cookie` construction

use axum::http::{header, HeaderMap};

/// Name of the cookie carrying the visitor identifier
pub const COOKIE_NAME: &str = "uuid";

/// Value of the named cookie from every `Cookie` header on the request.
///
/// A cookie that is present but empty yields `Some("")`.
pub fn find(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Attributes of the visitor cookie for one deployment environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieAttributes {
    pub domain: Option<String>,
    pub http_only: bool,
    pub secure: bool,
    pub max_age: Option<i64>,
}

impl CookieAttributes {
    /// Render `name=value` with these attributes
    pub fn render(&self, name: &str, value: &str) -> String {
        let mut cookie = format!("{}={}; Path=/", name, value);
        if let Some(domain) = &self.domain {
            cookie.push_str("; Domain=");
            cookie.push_str(domain);
        }
        if let Some(max_age) = self.max_age {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(header::COOKIE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_find_cookie() {
        let h = headers(&["theme=dark; uuid=abc-123; lang=en"]);
        assert_eq!(find(&h, COOKIE_NAME), Some("abc-123".to_string()));
        assert_eq!(find(&h, "missing"), None);
    }

    #[test]
    fn test_find_across_headers_and_quotes() {
        let h = headers(&["theme=dark", "uuid=\"quoted\""]);
        assert_eq!(find(&h, COOKIE_NAME), Some("quoted".to_string()));
    }

    #[test]
    fn test_name_must_match_exactly() {
        let h = headers(&["xuuid=1; uuidx=2; UUID=3"]);
        assert_eq!(find(&h, COOKIE_NAME), None);

        let h = headers(&["xuuid=1; uuid=real"]);
        assert_eq!(find(&h, COOKIE_NAME), Some("real".to_string()));
    }

    #[test]
    fn test_empty_value_is_present() {
        let h = headers(&["uuid=; other=1"]);
        assert_eq!(find(&h, COOKIE_NAME), Some(String::new()));
        assert_eq!(find(&HeaderMap::new(), COOKIE_NAME), None);
    }

    #[test]
    fn test_render_development() {
        let attrs = CookieAttributes::default();
        assert_eq!(attrs.render("uuid", "v"), "uuid=v; Path=/");
    }

    #[test]
    fn test_render_production() {
        let attrs = CookieAttributes {
            domain: Some("brittle.systems".to_string()),
            http_only: true,
            secure: true,
            max_age: Some(60),
        };
        assert_eq!(
            attrs.render("uuid", "v"),
            "uuid=v; Path=/; Domain=brittle.systems; Max-Age=60; HttpOnly; Secure"
        );
    }
}
