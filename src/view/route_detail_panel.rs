//! One route rendered as a collapsible disclosure.

use crate::domain::catalog::entity::{
    HttpMethod, ParameterGroup, ParameterSpec, ResponseSpec, RouteDocumentation, RouteEntry,
};
use crate::view::html::escape;
use crate::view::icons;
use crate::view::style::{
    lock_icon, method_accent, CHECK_GLYPH, DASH_GLYPH, OPTIONS_PLACEHOLDER, OPTIONS_SEPARATOR,
};

/// Presentational panel for a single route.
///
/// The panel borrows its data and owns only the `expanded` flag, which
/// starts closed every time a panel is built. Routes without documentation
/// have no disclosure at all, so toggling them is a no-op.
#[derive(Debug, Clone)]
pub struct RouteDetailPanel<'a> {
    method: &'a HttpMethod,
    path: &'a str,
    docs: Option<&'a RouteDocumentation>,
    expanded: bool,
}

impl<'a> RouteDetailPanel<'a> {
    pub fn new(method: &'a HttpMethod, path: &'a str, docs: Option<&'a RouteDocumentation>) -> Self {
        Self {
            method,
            path,
            docs,
            expanded: false,
        }
    }

    pub fn from_entry(entry: &'a RouteEntry) -> Self {
        Self::new(&entry.method, &entry.path, entry.docs.as_ref())
    }

    pub fn has_disclosure(&self) -> bool {
        self.docs.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the disclosure. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.has_disclosure() {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    pub fn docs(&self) -> Option<&'a RouteDocumentation> {
        self.docs
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(1024);
        let method_attr = escape(self.method.as_code());

        match self.docs {
            Some(docs) => {
                html.push_str("<details class=\"route-panel\" data-method=\"");
                html.push_str(&method_attr);
                html.push('"');
                if self.expanded {
                    html.push_str(" open");
                }
                html.push_str(">\n<summary class=\"");
                html.push_str(&self.header_class());
                html.push_str("\">");
                self.render_header_content(&mut html);
                html.push_str("</summary>\n");
                render_body(&mut html, docs);
                html.push_str("</details>\n");
            }
            None => {
                html.push_str("<div class=\"route-panel undocumented\" data-method=\"");
                html.push_str(&method_attr);
                html.push_str("\">\n<div class=\"");
                html.push_str(&self.header_class());
                html.push_str("\">");
                self.render_header_content(&mut html);
                html.push_str("</div>\n</div>\n");
            }
        }

        html
    }

    /// Plain-text rendering; the body appears only while expanded.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();

        let mut header = format!("{} {}", self.method, self.path);
        if let Some(summary) = self.docs.map(|d| d.summary.as_str()).filter(|s| !s.is_empty()) {
            header.push_str("  ");
            header.push_str(summary);
        }
        lines.push(header);

        if let (true, Some(docs)) = (self.expanded, self.docs) {
            if !docs.description.is_empty() {
                lines.push(format!("  Description: {}", docs.description));
            }
            for (group, specs) in docs.non_empty_groups() {
                lines.push(format!("  {}", group.title()));
                lines.push("    Name | Type | Options | Required | Must Exist In DB | Description".into());
                for spec in specs {
                    lines.push(format!("    {}", ParameterCells::from_spec(spec).to_text_row()));
                }
            }
            if let Some(response) = &docs.response {
                lines.push(format!("  Response: {}", response_line(response)));
            }
        }

        lines.join("\n")
    }

    fn header_class(&self) -> String {
        match method_accent(self.method) {
            Some(accent) => format!("route-header {}", accent.background_class()),
            None => "route-header".to_string(),
        }
    }

    fn render_header_content(&self, html: &mut String) {
        html.push_str("<span class=\"route-left\"><span class=\"method");
        if let Some(accent) = method_accent(self.method) {
            html.push(' ');
            html.push_str(&accent.text_class());
        }
        html.push_str("\">");
        html.push_str(&escape(self.method.as_code()));
        html.push_str("</span>");

        let access = self.docs.and_then(|d| d.access.as_ref());
        if let Some((access, icon)) = access.and_then(|a| lock_icon(a).map(|icon| (a, icon))) {
            html.push_str("<span class=\"access\" title=\"");
            html.push_str(&escape(access.as_code()));
            html.push_str("\">");
            html.push_str(icon.svg());
            html.push_str("</span>");
        }

        html.push_str("<span class=\"route-path\">");
        html.push_str(&escape(self.path));
        html.push_str("</span></span>");

        html.push_str("<span class=\"route-right\">");
        if let Some(summary) = self.docs.map(|d| d.summary.as_str()).filter(|s| !s.is_empty()) {
            html.push_str("<span class=\"route-summary\">");
            html.push_str(&escape(summary));
            html.push_str("</span>");
        }
        if self.has_disclosure() {
            html.push_str("<span class=\"chevron\">");
            html.push_str(icons::CHEVRON_DOWN);
            html.push_str("</span>");
        }
        html.push_str("</span>");
    }
}

/// Body stays in the document while collapsed; `<details>` hides it.
fn render_body(html: &mut String, docs: &RouteDocumentation) {
    html.push_str("<div class=\"route-body\">\n");

    if !docs.description.is_empty() {
        html.push_str("<section class=\"description\"><h3>Description</h3><p>");
        html.push_str(&escape(&docs.description));
        html.push_str("</p></section>\n");
    }

    for (group, specs) in docs.non_empty_groups() {
        render_parameter_table(html, group, specs);
    }

    if let Some(response) = &docs.response {
        html.push_str("<section class=\"response-section\"><h3>Response</h3><div class=\"response\">");
        html.push_str(&format!("<code class=\"status\">{}</code>", response.status));
        html.push_str("<span class=\"muted\">");
        html.push_str(&escape(&response.description));
        html.push_str(" - <code>");
        html.push_str(&escape(&response.body));
        html.push_str("</code></span></div></section>\n");
    }

    html.push_str("</div>\n");
}

fn render_parameter_table(html: &mut String, group: ParameterGroup, specs: &[ParameterSpec]) {
    html.push_str("<section class=\"parameters\" data-group=\"");
    html.push_str(group.title());
    html.push_str("\"><h3>");
    html.push_str(group.title());
    html.push_str("</h3>\n<table>\n<thead><tr>");
    html.push_str("<th class=\"left\">Name</th><th>Type</th><th>Options</th><th>Required</th>");
    html.push_str("<th>Must Exist In DB</th><th class=\"left\">Description</th>");
    html.push_str("</tr></thead>\n<tbody>\n");

    for spec in specs {
        let cells = ParameterCells::from_spec(spec);

        html.push_str("<tr><td class=\"left\">");
        html.push_str(&escape(cells.name));
        html.push_str("</td><td><code>");
        html.push_str(&escape(cells.kind));
        html.push_str("</code></td><td>");
        match &cells.options {
            Some(options) => html.push_str(&escape(options)),
            None => {
                html.push_str("<span class=\"muted\">");
                html.push_str(OPTIONS_PLACEHOLDER);
                html.push_str("</span>");
            }
        }
        html.push_str("</td><td>");
        if cells.required {
            html.push_str("<span class=\"required\">");
            html.push_str(&glyph(true));
            if let Some(condition) = cells.condition {
                html.push_str("<span class=\"muted\">(");
                html.push_str(&escape(condition));
                html.push_str(")</span>");
            }
            html.push_str("</span>");
        } else {
            html.push_str(&glyph(false));
        }
        html.push_str("</td><td>");
        html.push_str(&glyph(cells.must_exist));
        html.push_str("</td><td class=\"left muted\">");
        html.push_str(&escape(cells.description));
        html.push_str("</td></tr>\n");
    }

    html.push_str("</tbody>\n</table></section>\n");
}

fn glyph(on: bool) -> String {
    if on {
        format!("<span class=\"glyph check\">{}</span>", CHECK_GLYPH)
    } else {
        format!("<span class=\"glyph dash\">{}</span>", DASH_GLYPH)
    }
}

/// `<status> <description> - <body>`
pub fn response_line(response: &ResponseSpec) -> String {
    format!("{} {} - {}", response.status, response.description, response.body)
}

/// Display values of one parameter table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterCells<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub options: Option<String>,
    pub required: bool,
    pub condition: Option<&'a str>,
    pub must_exist: bool,
    pub description: &'a str,
}

impl<'a> ParameterCells<'a> {
    pub fn from_spec(spec: &'a ParameterSpec) -> Self {
        Self {
            name: &spec.name,
            kind: &spec.kind,
            options: spec.options().map(|o| o.join(OPTIONS_SEPARATOR)),
            required: spec.required.is_required(),
            condition: spec.required.condition(),
            must_exist: spec.must_exist,
            description: &spec.description,
        }
    }

    /// `name | type | options | required | must exist | description`
    pub fn to_text_row(&self) -> String {
        let required = match (self.required, self.condition) {
            (true, Some(condition)) => format!("{} ({})", CHECK_GLYPH, condition),
            (true, None) => CHECK_GLYPH.to_string(),
            (false, _) => DASH_GLYPH.to_string(),
        };

        [
            self.name.to_string(),
            self.kind.to_string(),
            self.options.clone().unwrap_or_else(|| OPTIONS_PLACEHOLDER.to_string()),
            required,
            if self.must_exist { CHECK_GLYPH } else { DASH_GLYPH }.to_string(),
            self.description.to_string(),
        ]
        .join(" | ")
    }
}
