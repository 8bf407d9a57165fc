//! SPA entry document hosting.
//!
//! Any route the API and static assets did not match gets the front-end
//! entry document, with the `<title>` and Open Graph tags rewritten for the
//! route so link previews show the filtered game or platform instead of the
//! generic site title. The document is read per request, so a redeployed
//! bundle is picked up without a restart.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::Router;
use getservers_domain::config::SiteConfig;
use getservers_domain::games;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Rendered head metadata for one front-end route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub url: String,
}

pub fn page_meta(site: &SiteConfig, filter: Option<&str>) -> PageMeta {
    match filter {
        Some(filter) => {
            let display = games::display_name_for_filter(filter);
            PageMeta {
                title: format!("{} Servers - {}", display, site.title),
                description: format!("Browse {} servers on {}", display, site.title),
                url: format!("{}/#/{}", site.domain, filter),
            }
        }
        None => PageMeta {
            title: format!("Server List - {}", site.title),
            description: format!("CoD Client Server list | {}", site.title),
            url: format!("{}/#/", site.domain),
        },
    }
}

/// Browse filter from a request path: exactly one segment, excluding the
/// detail-view prefixes (`/s/:id`, `/server/:ip/:port`).
pub fn filter_from_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let first = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    if first == "s" || first == "server" || first == "index.html" {
        return None;
    }
    Some(first)
}

/// Rewrite the entry document's head for the given metadata. Tags missing
/// from the document are inserted before `</head>`.
pub fn render_entry(html: &str, meta: &PageMeta) -> String {
    let html = set_title(html, &meta.title);
    let html = set_meta_property(&html, "og:title", &meta.title);
    let html = set_meta_property(&html, "og:description", &meta.description);
    set_meta_property(&html, "og:url", &meta.url)
}

fn set_title(html: &str, title: &str) -> String {
    match (html.find("<title>"), html.find("</title>")) {
        (Some(start), Some(end)) if start < end => {
            format!(
                "{}<title>{}</title>{}",
                &html[..start],
                title,
                &html[end + "</title>".len()..]
            )
        }
        _ => insert_into_head(html, &format!("<title>{}</title>", title)),
    }
}

fn set_meta_property(html: &str, property: &str, content: &str) -> String {
    let needle = format!("property=\"{}\"", property);
    let Some(needle_pos) = html.find(&needle) else {
        return insert_into_head(
            html,
            &format!("<meta property=\"{}\" content=\"{}\">", property, content),
        );
    };

    let tag_start = html[..needle_pos].rfind('<').unwrap_or(needle_pos);
    let Some(tag_len) = html[tag_start..].find('>') else {
        return html.to_string();
    };
    let tag_end = tag_start + tag_len + 1;

    let rebuilt = set_content_attr(&html[tag_start..tag_end], content);
    format!("{}{}{}", &html[..tag_start], rebuilt, &html[tag_end..])
}

fn set_content_attr(tag: &str, content: &str) -> String {
    let Some(attr_pos) = tag.find("content=\"") else {
        let head = tag.trim_end_matches('>').trim_end_matches('/').trim_end();
        return format!("{} content=\"{}\">", head, content);
    };
    let value_start = attr_pos + "content=\"".len();
    match tag[value_start..].find('"') {
        Some(value_len) => format!(
            "{}{}{}",
            &tag[..value_start],
            content,
            &tag[value_start + value_len..]
        ),
        None => tag.to_string(),
    }
}

fn insert_into_head(html: &str, tag: &str) -> String {
    match html.find("</head>") {
        Some(pos) => format!("{}{}\n{}", &html[..pos], tag, &html[pos..]),
        None => format!("{}{}", tag, html),
    }
}

// ---------------------------------------------------------------------------
// Fallback router
// ---------------------------------------------------------------------------

/// Served when the front-end bundle is missing, so the API keeps working
/// on a bare deployment.
const BARE_SHELL: &str =
    "<!DOCTYPE html>\n<html>\n<head>\n</head>\n<body>\n<div id=\"app\"></div>\n</body>\n</html>\n";

#[derive(Clone)]
struct SpaState {
    index_path: Arc<PathBuf>,
    site: Arc<SiteConfig>,
}

/// Fallback router serving the rendered entry document for every path.
pub fn entry_router(index_path: PathBuf, site: SiteConfig) -> Router {
    let state = SpaState {
        index_path: Arc::new(index_path),
        site: Arc::new(site),
    };
    Router::new().fallback(serve_entry).with_state(state)
}

#[instrument(skip(state), name = "spa_entry")]
async fn serve_entry(State(state): State<SpaState>, uri: Uri) -> Html<String> {
    let meta = page_meta(&state.site, filter_from_path(uri.path()));

    let html = match tokio::fs::read_to_string(state.index_path.as_ref()).await {
        Ok(html) => html,
        Err(e) => {
            debug!(error = %e, "Entry document unreadable, serving bare shell");
            BARE_SHELL.to_string()
        }
    };

    Html(render_entry(&html, &meta))
}
