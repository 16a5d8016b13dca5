//! HTML for the view and edit pages.

use crate::page::document::escape_html;
use crate::page::Page;

/// Render a stored page for reading.
///
/// The body is page markup and is emitted as is; everything else is
/// escaped.
#[must_use]
pub fn page_view(page: &Page, location: &str) -> String {
    let title = escape_html(page.title());
    let location = escape_html(location);
    let modified = page
        .modified_at()
        .map(|t| format!(" data-modified=\"{t}\""))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>{title}</title>\n</head>\n<body>\n\
         <h1>{title}</h1>\n<div class=\"page\">{body}</div>\n\
         <p class=\"meta\"{modified}><a href=\"{location}?action=edit\">Edit this page</a></p>\n\
         </body>\n</html>\n",
        body = page.body(),
    )
}

/// Render the edit form for a page, existing or not.
///
/// The page's token travels in the hidden `mtime` field and comes back
/// with the save, empty for a page that does not exist yet.
#[must_use]
pub fn edit_form(page: &Page, location: &str) -> String {
    let title = escape_html(page.title());
    let location = escape_html(location);
    let mtime = page.modified_at().map(|t| t.to_string()).unwrap_or_default();
    let heading = if page.exists() { "Edit" } else { "Create" };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>{heading} {title}</title>\n</head>\n<body>\n\
         <h1>{heading} {title}</h1>\n\
         <form method=\"post\" action=\"{location}\">\n\
         <input type=\"hidden\" name=\"mtime\" value=\"{mtime}\">\n\
         <p><label>Title <input type=\"text\" name=\"title\" value=\"{title}\"></label></p>\n\
         <p><textarea name=\"content\" rows=\"20\" cols=\"80\">{body}</textarea></p>\n\
         <p><input type=\"submit\" value=\"Save\"> <a href=\"{location}\">Cancel</a></p>\n\
         </form>\n</body>\n</html>\n",
        body = escape_html(page.body()),
    )
}
