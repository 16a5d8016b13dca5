//! The (action, method) route table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::wiki::Wiki;

use super::handlers;
use super::request::{Outcome, Request};

/// What the client wants to do with a page, from the `action` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Show or save the page. The default when `action` is absent.
    View,
    /// Show the edit form.
    Edit,
}

impl Action {
    /// The parameter value naming this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            _ => Err(format!("unknown action '{s}'")),
        }
    }
}

/// Request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `POST`
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Head => write!(f, "HEAD"),
            Self::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            _ => Err(format!("unsupported method '{s}'")),
        }
    }
}

/// A request handler.
pub type Handler = fn(&Wiki, &Request) -> Result<Outcome>;

/// Explicit mapping from (action, method) to handler.
///
/// The table is checked when built: every pair appears at most once, and
/// an action answering `HEAD` must also answer `GET`.
///
/// # Examples
///
/// ```
/// use folio::dispatch::{Action, Method, RouteTable};
///
/// let routes = RouteTable::standard().unwrap();
/// assert!(routes.lookup(Action::View, Method::Get).is_some());
/// assert!(routes.lookup(Action::Edit, Method::Post).is_none());
/// ```
#[derive(Clone)]
pub struct RouteTable {
    routes: HashMap<(Action, Method), Handler>,
}

impl RouteTable {
    /// Build a table from explicit routes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] if the table is empty, a pair is
    /// routed twice, or a `HEAD` route has no matching `GET` route.
    pub fn new(entries: impl IntoIterator<Item = (Action, Method, Handler)>) -> Result<Self> {
        let mut routes = HashMap::new();

        for (action, method, handler) in entries {
            if routes.insert((action, method), handler).is_some() {
                return Err(Error::InvalidRoute {
                    details: format!("{action} {method} is routed more than once"),
                });
            }
        }

        if routes.is_empty() {
            return Err(Error::InvalidRoute {
                details: "no routes defined".into(),
            });
        }

        for &(action, method) in routes.keys() {
            if method == Method::Head && !routes.contains_key(&(action, Method::Get)) {
                return Err(Error::InvalidRoute {
                    details: format!("{action} HEAD has no matching GET route"),
                });
            }
        }

        Ok(Self { routes })
    }

    /// The wiki's routes: view and edit pages, save on `POST`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the table passes the same checks as any
    /// other.
    pub fn standard() -> Result<Self> {
        let routes: [(Action, Method, Handler); 5] = [
            (Action::View, Method::Get, handlers::view),
            (Action::View, Method::Head, handlers::view),
            (Action::View, Method::Post, handlers::save),
            (Action::Edit, Method::Get, handlers::edit),
            (Action::Edit, Method::Head, handlers::edit),
        ];
        Self::new(routes)
    }

    /// The handler for a pair, if routed.
    #[must_use]
    pub fn lookup(&self, action: Action, method: Method) -> Option<Handler> {
        self.routes.get(&(action, method)).copied()
    }

    /// All routed pairs, sorted.
    #[must_use]
    pub fn routes(&self) -> Vec<(Action, Method)> {
        let mut pairs: Vec<_> = self.routes.keys().copied().collect();
        pairs.sort();
        pairs
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes())
            .finish()
    }
}
