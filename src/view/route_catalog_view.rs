//! The explorer page: navigation sidebar plus per-namespace route panels.

use std::sync::Arc;

use crate::core::state::runtime::catalog::catalog_runtime_state::CatalogRuntimeState;
use crate::domain::catalog::entity::RouteCatalog;
use crate::domain::catalog::namespace::{namespace_anchor, namespace_title};
use crate::view::html::{escape, page};
use crate::view::icons;
use crate::view::route_detail_panel::RouteDetailPanel;
use crate::view::style::method_accent;

pub const PAGE_TITLE: &str = "API Explorer";

/// Seconds between self-reloads of the loading page.
pub const LOADING_REFRESH_SECS: u32 = 3;

pub struct RouteCatalogView {
    catalog: Option<Arc<RouteCatalog>>,
}

impl RouteCatalogView {
    /// An empty catalog renders the same as a missing one.
    pub fn new(catalog: Option<Arc<RouteCatalog>>) -> Self {
        Self {
            catalog: catalog.filter(|c| !c.is_empty()),
        }
    }

    pub fn from_state(state: &CatalogRuntimeState) -> Self {
        Self::new(state.ready_catalog().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn render(&self) -> String {
        match &self.catalog {
            None => page(PAGE_TITLE, &render_loading(), Some(LOADING_REFRESH_SECS)),
            Some(catalog) => {
                let mut body = String::with_capacity(16 * 1024);
                body.push_str("<main>\n");
                render_sidebar(&mut body, catalog);
                render_details(&mut body, catalog);
                body.push_str("</main>");
                page(PAGE_TITLE, &body, None)
            }
        }
    }

    /// Plain-text rendering with every panel expanded.
    pub fn render_text(&self) -> String {
        let Some(catalog) = &self.catalog else {
            return "Loading...".to_string();
        };

        let mut sections = Vec::new();
        for (key, routes) in catalog.namespaces() {
            let mut lines = vec![namespace_title(key)];
            for entry in routes {
                let mut panel = RouteDetailPanel::from_entry(entry);
                panel.toggle();
                lines.push(panel.render_text());
            }
            sections.push(lines.join("\n"));
        }
        sections.join("\n\n")
    }
}

fn render_loading() -> String {
    format!("<main><div class=\"loading\">{}</div></main>", icons::SPINNER)
}

fn render_sidebar(html: &mut String, catalog: &RouteCatalog) {
    html.push_str("<aside>\n<h1>");
    html.push_str(icons::LOGO);
    html.push_str("<div>API<span class=\"dot\"> .</span> Explorer</div></h1>\n");
    // Not wired to any filtering.
    html.push_str("<input class=\"search\" type=\"search\" placeholder=\"Search routes...\">\n");

    for (key, routes) in catalog.namespaces() {
        html.push_str("<div class=\"nav-group\"><h2><a href=\"#");
        html.push_str(&escape(&namespace_anchor(key)));
        html.push_str("\">");
        html.push_str(&escape(&namespace_title(key)));
        html.push_str("</a></h2>\n");

        for entry in routes {
            html.push_str("<div class=\"nav-route\"><span class=\"method");
            if let Some(accent) = method_accent(&entry.method) {
                html.push(' ');
                html.push_str(&accent.text_class());
            }
            html.push_str("\">");
            html.push_str(&escape(entry.method.as_code()));
            html.push_str("</span><span class=\"path\">");
            html.push_str(&escape(&entry.path));
            html.push_str("</span></div>\n");
        }

        html.push_str("</div>\n");
    }

    html.push_str("</aside>\n");
}

fn render_details(html: &mut String, catalog: &RouteCatalog) {
    html.push_str("<section class=\"details\">\n");

    for (key, routes) in catalog.namespaces() {
        html.push_str("<div class=\"namespace\" id=\"");
        html.push_str(&escape(&namespace_anchor(key)));
        html.push_str("\"><h2>");
        html.push_str(&escape(&namespace_title(key)));
        html.push_str("</h2>\n<div class=\"routes\">\n");

        for entry in routes {
            html.push_str(&RouteDetailPanel::from_entry(entry).render());
        }

        html.push_str("</div></div>\n");
    }

    html.push_str("</section>\n");
}
