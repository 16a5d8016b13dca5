//! Request and outcome types.

use std::collections::HashMap;

use serde::Serialize;

use super::route::Method;

/// The minimal request the dispatcher consumes.
///
/// # Examples
///
/// ```
/// use folio::dispatch::{Method, Request};
///
/// let request = Request::new(Method::Post, "/docs/intro")
///     .with_param("content", "<p>Hello</p>")
///     .with_param("mtime", "");
/// assert_eq!(request.param("content"), Some("<p>Hello</p>"));
/// assert_eq!(request.param("title"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    params: HashMap<String, String>,
}

impl Request {
    /// A request with no parameters.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
        }
    }

    /// Add one parameter. A repeated name keeps the last value.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Add several parameters.
    #[must_use]
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The request method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The request path, undecoded beyond what the transport did.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A parameter value.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The path as an absolute URL path, for redirects and form targets.
    ///
    /// Each segment is percent-encoded, so a page named `what?is` links to
    /// `/what%3Fis` and a query can be appended safely.
    #[must_use]
    pub fn location(&self) -> String {
        let encoded = self
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("/{encoded}")
    }
}

/// What the dispatcher decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The request was unusable.
    BadRequest {
        /// What was wrong.
        message: String,
    },
    /// The page changed since the client loaded it.
    Conflict {
        /// Which page and tokens conflicted.
        message: String,
    },
    /// Send the client elsewhere.
    Redirect {
        /// Target URL path, possibly with a query.
        location: String,
    },
    /// A rendered response.
    Ok {
        /// `Content-Type` header value.
        content_type: String,
        /// Response body.
        body: String,
    },
}

impl Outcome {
    /// The HTTP status code conventionally used for this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::dispatch::Outcome;
    ///
    /// let outcome = Outcome::Redirect { location: "/".into() };
    /// assert_eq!(outcome.status_code(), 303);
    /// ```
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::Conflict { .. } => 409,
            Self::Redirect { .. } => 303,
            Self::Ok { .. } => 200,
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}
