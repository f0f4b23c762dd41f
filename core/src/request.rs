use http::header::CONTENT_TYPE;
use http::header::HeaderName;
use http::request::Parts;
use http::HeaderMap;
use http::Method;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Read-only view of a request while it is being signed.
///
/// Borrows the method, path and headers of the request together with the
/// already-buffered body. Nothing here mutates the request.
#[derive(Debug, Clone, Copy)]
pub struct SigningRequest<'a> {
    method: &'a Method,
    path: &'a str,
    headers: &'a HeaderMap,
    body: &'a [u8],
}

impl<'a> SigningRequest<'a> {
    /// Build a signing view from request parts and body bytes.
    pub fn new(parts: &'a Parts, body: &'a [u8]) -> Self {
        Self {
            method: &parts.method,
            path: parts.uri.path(),
            headers: &parts.headers,
            body,
        }
    }

    /// Build a signing view from a whole request.
    pub fn from_request<B: AsRef<[u8]>>(req: &'a http::Request<B>) -> Self {
        Self {
            method: req.method(),
            path: req.uri().path(),
            headers: req.headers(),
            body: req.body().as_ref(),
        }
    }

    /// HTTP method, as sent.
    #[inline]
    pub fn method(&self) -> &Method {
        self.method
    }

    /// URI path without query.
    #[inline]
    pub fn path(&self) -> &str {
        self.path
    }

    /// Raw body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        self.body
    }

    /// Get all values of a header joined with `", "`.
    ///
    /// Header names are case-insensitive. Returns an empty string if the header
    /// is absent; bytes that aren't valid UTF-8 are replaced lossily.
    pub fn header_line(&self, name: &HeaderName) -> String {
        let values: Vec<_> = self
            .headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect();

        values.join(", ")
    }

    /// Whether the body takes part in the string to sign.
    ///
    /// The body is included unless the method is exactly `GET` or the
    /// `content-type` contains `multipart/form-data` in any case.
    pub fn body_included(&self) -> bool {
        if self.method.as_str() == "GET" {
            return false;
        }

        !self
            .header_line(&CONTENT_TYPE)
            .to_ascii_lowercase()
            .contains(MULTIPART_FORM_DATA)
    }
}
