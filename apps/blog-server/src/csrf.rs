//! CSRF protection for the post forms.
//!
//! Each rendered form carries a random token in a hidden field and the same token in a
//! cookie signed with the application key. A submission is accepted only when the cookie
//! signature verifies and both copies match.

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use uuid::Uuid;

pub const CSRF_COOKIE: &str = "csrf_token";
pub const CSRF_FIELD: &str = "csrf_token";
pub const CSRF_ERROR: &str = "The CSRF token is missing or invalid.";

/// The token for a form render and the signed cookie that carries it.
pub struct CsrfToken {
    pub token: String,
    pub cookie: Cookie<'static>,
}

/// Token for the next form rendered for `req`.
///
/// A token already held in a valid signed cookie is reused, so several open forms stay
/// submittable. Otherwise a new one is generated.
pub fn issue(req: &HttpRequest, key: &Key) -> CsrfToken {
    let token = signed_token(req, key).unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    let mut jar = CookieJar::new();
    jar.signed_mut(key).add(
        Cookie::build(CSRF_COOKIE, token.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish(),
    );
    // An unsigned placeholder never verifies, so a missing jar entry fails closed.
    let cookie = jar
        .get(CSRF_COOKIE)
        .cloned()
        .unwrap_or_else(|| Cookie::new(CSRF_COOKIE, ""));

    CsrfToken { token, cookie }
}

/// Check `submitted` against the signed cookie on `req`.
pub fn verify(req: &HttpRequest, key: &Key, submitted: &str) -> bool {
    !submitted.is_empty() && signed_token(req, key).is_some_and(|token| token == submitted)
}

/// The token in the request's cookie, if its signature verifies.
fn signed_token(req: &HttpRequest, key: &Key) -> Option<String> {
    let cookie = req.cookie(CSRF_COOKIE)?;

    let mut jar = CookieJar::new();
    jar.add_original(cookie);

    jar.signed(key)
        .get(CSRF_COOKIE)
        .map(|verified| verified.value().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn test_issued_token_verifies() {
        let key = Key::generate();
        let issued = issue(&TestRequest::default().to_http_request(), &key);
        let req = TestRequest::default()
            .cookie(issued.cookie.clone())
            .to_http_request();

        assert!(verify(&req, &key, &issued.token));
        assert!(!verify(&req, &key, "something-else"));
        assert!(!verify(&req, &key, ""));
    }

    #[test]
    fn test_cookie_signed_with_other_key_is_rejected() {
        let issued = issue(&TestRequest::default().to_http_request(), &Key::generate());
        let req = TestRequest::default()
            .cookie(issued.cookie.clone())
            .to_http_request();

        assert!(!verify(&req, &Key::generate(), &issued.token));
    }

    #[test]
    fn test_unsigned_cookie_is_rejected() {
        let key = Key::generate();
        let req = TestRequest::default()
            .cookie(Cookie::new(CSRF_COOKIE, "abc"))
            .to_http_request();

        assert!(!verify(&req, &key, "abc"));
    }

    #[test]
    fn test_valid_cookie_token_is_reused() {
        let key = Key::generate();
        let first = issue(&TestRequest::default().to_http_request(), &key);
        let req = TestRequest::default()
            .cookie(first.cookie.clone())
            .to_http_request();

        let second = issue(&req, &key);
        assert_eq!(second.token, first.token);
        assert!(verify(&req, &key, &first.token));
    }

    #[test]
    fn test_forged_cookie_gets_fresh_token() {
        let key = Key::generate();
        let req = TestRequest::default()
            .cookie(Cookie::new(CSRF_COOKIE, "abc"))
            .to_http_request();

        let issued = issue(&req, &key);
        assert_ne!(issued.token, "abc");
        assert!(!issued.token.is_empty());
    }

    #[test]
    fn test_missing_cookie_is_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(!verify(&req, &Key::generate(), "abc"));
    }
}
