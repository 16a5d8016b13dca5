//! Serve command implementation.
//!
//! A small HTTP front end over the wiki's dispatcher, built on
//! `tiny_http`. Each request is handled on its own thread; the wiki is
//! shared behind an `Arc`.
//!
//! Outcomes map to responses as follows:
//!
//! | outcome      | status | body                     |
//! |--------------|--------|--------------------------|
//! | `Ok`         | 200    | rendered page            |
//! | `Redirect`   | 303    | empty, `Location` header |
//! | `BadRequest` | 400    | plain-text message       |
//! | `Conflict`   | 409    | plain-text message       |
//! | error        | 500    | plain-text message       |
//!
//! A `POST` body larger than [`MAX_FORM_BYTES`] is refused with 413 before
//! dispatch, so a page is never saved from a truncated form.

use crate::error::CliError;
use crate::utils::{load_settings, GlobalOptions};
use clap::Args;
use folio::config::schema::{DEFAULT_INTERFACE, DEFAULT_SERVE_PORT};
use folio::config::{ConfigBuilder, ServeConfig};
use folio::dispatch::{Method, Outcome, Request};
use folio::Wiki;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Response, Server, StatusCode};

/// Largest form body accepted on `POST`.
const MAX_FORM_BYTES: u64 = 4 * 1024 * 1024;

/// Serve the wiki over HTTP.
#[derive(Args)]
pub struct ServeCommand {
    /// Interface to bind
    #[arg(long, value_name = "ADDR", env = "FOLIO_SERVE_INTERFACE")]
    pub interface: Option<String>,

    /// Port to bind
    #[arg(long, value_name = "PORT", env = "FOLIO_SERVE_PORT")]
    pub port: Option<u16>,
}

impl ServeCommand {
    /// Execute the serve command. Blocks until the process is stopped.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let serve = self.serve_config(global)?;
        let interface = serve.interface.as_deref().unwrap_or(DEFAULT_INTERFACE);
        let port = serve.port.unwrap_or(DEFAULT_SERVE_PORT);

        let wiki = Arc::new(Wiki::open(load_settings(global)?)?);

        let server = Server::http((interface, port))
            .map_err(|e| CliError::Io(std::io::Error::other(e.to_string())))?;

        if !global.quiet {
            eprintln!(
                "Serving {} on http://{interface}:{port}",
                wiki.settings().root.display()
            );
        }

        for request in server.incoming_requests() {
            let wiki = Arc::clone(&wiki);
            thread::spawn(move || {
                if let Err(e) = handle_request(&wiki, request) {
                    log::warn!("request error: {e}");
                }
            });
        }

        Ok(())
    }

    /// Interface and port: flags, then configuration.
    fn serve_config(&self, global: &GlobalOptions) -> Result<ServeConfig, CliError> {
        let mut builder = ConfigBuilder::new();
        if let Some(ref dir) = global.data_dir {
            builder = builder.with_data_dir(dir);
        }
        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let configured = config.serve.unwrap_or_default();
        Ok(ServeConfig {
            interface: self.interface.clone().or(configured.interface),
            port: self.port.or(configured.port),
        })
    }
}

/// Translate one HTTP request, dispatch it and send the response.
fn handle_request(wiki: &Wiki, mut request: tiny_http::Request) -> std::io::Result<()> {
    let response = build_response(wiki, &mut request)?;
    request.respond(response)
}

fn build_response(
    wiki: &Wiki,
    request: &mut tiny_http::Request,
) -> std::io::Result<Response<Cursor<Vec<u8>>>> {
    let method = match request.method() {
        tiny_http::Method::Get => Some(Method::Get),
        tiny_http::Method::Head => Some(Method::Head),
        tiny_http::Method::Post => Some(Method::Post),
        _ => None,
    };
    let Some(method) = method else {
        let message = format!("method {} is not supported", request.method());
        return Ok(text_response(405, &message));
    };

    let url = request.url().to_string();
    let (path, query) = split_url(&url);
    let mut params = parse_form(query);

    if method == Method::Post {
        if request
            .body_length()
            .is_some_and(|len| u64::try_from(len).map_or(true, |len| len > MAX_FORM_BYTES))
        {
            return Ok(too_large());
        }
        let Some(body) = read_form_body(request.as_reader(), MAX_FORM_BYTES)? else {
            return Ok(too_large());
        };
        let Ok(body) = String::from_utf8(body) else {
            return Ok(text_response(400, "form body is not valid UTF-8"));
        };
        params.extend(parse_form(&body));
    }

    let path = decode(path);
    log::debug!("{method} {path}");
    let dispatched = Request::new(method, path).with_params(params);

    Ok(match wiki.handle(&dispatched) {
        Ok(outcome) => outcome_response(&outcome),
        Err(e) => {
            log::error!("{} {}: {e}", dispatched.method(), dispatched.path());
            text_response(500, &e.to_string())
        }
    })
}

/// Read at most `limit` bytes of body. `None` means the body was longer.
fn read_form_body(reader: &mut dyn Read, limit: u64) -> std::io::Result<Option<Vec<u8>>> {
    let mut body = Vec::new();
    reader.take(limit + 1).read_to_end(&mut body)?;
    if u64::try_from(body.len()).map_or(true, |len| len > limit) {
        return Ok(None);
    }
    Ok(Some(body))
}

fn too_large() -> Response<Cursor<Vec<u8>>> {
    text_response(
        413,
        &format!("form body exceeds {MAX_FORM_BYTES} bytes; nothing was saved"),
    )
}

fn outcome_response(outcome: &Outcome) -> Response<Cursor<Vec<u8>>> {
    let status = outcome.status_code();
    match outcome {
        Outcome::Ok { content_type, body } => {
            let response = Response::from_string(body.as_str()).with_status_code(status);
            match header("Content-Type", content_type) {
                Some(h) => response.with_header(h),
                None => response,
            }
        }
        Outcome::Redirect { location } => {
            let response = Response::from_string("").with_status_code(status);
            match header("Location", location) {
                Some(h) => response.with_header(h),
                None => response,
            }
        }
        Outcome::BadRequest { message } | Outcome::Conflict { message } => {
            text_response(status, message)
        }
    }
}

fn text_response(status: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_string(format!("{message}\n"))
        .with_status_code(StatusCode(status));
    match header("Content-Type", "text/plain; charset=utf-8") {
        Some(h) => response.with_header(h),
        None => response,
    }
}

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

/// Split a request target into path and query.
fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Percent-decode one URL component, keeping the raw text if it is not
/// valid UTF-8.
fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Parse an `application/x-www-form-urlencoded` string.
///
/// Later duplicates win; a name without `=` gets an empty value.
fn parse_form(input: &str) -> HashMap<String, String> {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                decode(&name.replace('+', " ")),
                decode(&value.replace('+', " ")),
            )
        })
        .collect()
}
