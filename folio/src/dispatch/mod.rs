//! Request dispatch.
//!
//! A [`Request`] names a page path, a [`Method`] and string parameters.
//! The `action` parameter (default `view`) and the method select a
//! handler from a [`RouteTable`]; the handler resolves the path, talks to
//! the store and yields an [`Outcome`].
//!
//! Request-level failures become outcomes: an unknown action, an unrouted
//! pair, a path that escapes the root or bad parameters are
//! [`Outcome::BadRequest`], and a stale token is [`Outcome::Conflict`].
//! Storage failures and malformed pages are returned as errors.
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::WikiSettings;
//! use folio::dispatch::{Method, Outcome, Request};
//! use folio::Wiki;
//!
//! let wiki = Wiki::open(WikiSettings::new("/srv/wiki")).unwrap();
//!
//! let save = Request::new(Method::Post, "/index")
//!     .with_param("title", "Home")
//!     .with_param("content", "<p>Welcome</p>");
//! assert_eq!(
//!     wiki.handle(&save).unwrap(),
//!     Outcome::Redirect { location: "/index".into() }
//! );
//! ```

mod handlers;
pub mod render;
mod request;
mod route;

pub use request::{Outcome, Request};
pub use route::{Action, Handler, Method, RouteTable};

use crate::error::{Error, Result};
use crate::wiki::Wiki;

/// Route `request` through `routes`.
///
/// # Errors
///
/// Propagates storage errors and [`Error::MalformedResource`] from the
/// handler.
pub fn dispatch(wiki: &Wiki, routes: &RouteTable, request: &Request) -> Result<Outcome> {
    let action = match request.param("action") {
        None | Some("") => Action::View,
        Some(name) => match name.parse::<Action>() {
            Ok(action) => action,
            Err(message) => return Ok(Outcome::BadRequest { message }),
        },
    };

    let Some(handler) = routes.lookup(action, request.method()) else {
        return Ok(Outcome::bad_request(format!(
            "{} is not supported for action '{action}'",
            request.method()
        )));
    };

    log::debug!("{} {} ({action})", request.method(), request.path());

    match handler(wiki, request) {
        Err(err @ Error::PathEscape { .. }) => Ok(Outcome::bad_request(err.to_string())),
        Err(err @ Error::Conflict { .. }) => Ok(Outcome::Conflict {
            message: err.to_string(),
        }),
        other => other,
    }
}
