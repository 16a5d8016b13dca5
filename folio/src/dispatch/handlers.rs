//! The standard route handlers.

use crate::error::Result;
use crate::wiki::Wiki;

use super::render;
use super::request::{Outcome, Request};

/// Show a page, or send the client to create it.
pub(super) fn view(wiki: &Wiki, request: &Request) -> Result<Outcome> {
    let page = wiki.load(request.path())?;
    let location = request.location();

    if !page.exists() {
        return Ok(Outcome::Redirect {
            location: format!("{location}?action=edit"),
        });
    }

    Ok(Outcome::Ok {
        content_type: wiki.settings().content_type_header(),
        body: render::page_view(&page, &location),
    })
}

/// Show the edit form with the page's current token.
pub(super) fn edit(wiki: &Wiki, request: &Request) -> Result<Outcome> {
    let page = wiki.load(request.path())?;

    Ok(Outcome::Ok {
        content_type: wiki.settings().content_type_header(),
        body: render::edit_form(&page, &request.location()),
    })
}

/// Save submitted content if the submitted token is still current.
///
/// A blank or missing title keeps the page's current one.
pub(super) fn save(wiki: &Wiki, request: &Request) -> Result<Outcome> {
    let key = wiki.resolve(request.path())?;

    let Some(content) = request.param("content") else {
        return Ok(Outcome::bad_request("missing required parameter 'content'"));
    };

    let expected = match parse_token(request.param("mtime")) {
        Ok(token) => token,
        Err(message) => return Ok(Outcome::bad_request(message)),
    };

    let title = match request.param("title").map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => title.to_string(),
        None => wiki.store().load(&key)?.title().to_string(),
    };

    wiki.store().update(&key, expected, &title, content)?;

    Ok(Outcome::Redirect {
        location: request.location(),
    })
}

/// Parse the `mtime` parameter. Absent or blank means "no page yet".
fn parse_token(raw: Option<&str>) -> std::result::Result<Option<i64>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("invalid mtime '{value}': expected whole seconds")),
    }
}
