//! Minimal HTML assembly helpers.

/// Escape text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a rendered body in the full document with the shared stylesheet.
///
/// `refresh_secs` asks the browser to reload the page from this server.
pub fn page(title: &str, body: &str, refresh_secs: Option<u32>) -> String {
    let mut html = String::with_capacity(body.len() + STYLESHEET.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    if let Some(secs) = refresh_secs {
        html.push_str(&format!("<meta http-equiv=\"refresh\" content=\"{}\">\n", secs));
    }
    html.push_str("<title>");
    html.push_str(&escape(title));
    html.push_str("</title>\n<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}

const STYLESHEET: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
:root{interpolate-size:allow-keywords}
body{background:#0a0a0a;color:#f5f5f5;font-family:Urbanist,-apple-system,'Segoe UI',sans-serif;height:100dvh;display:flex}
main{display:flex;width:100%;height:100dvh}
code{font-family:ui-monospace,SFMono-Regular,Menlo,monospace}
svg.icon{width:1.25rem;height:1.25rem;flex-shrink:0}
.loading{width:100%;height:100%;display:flex;align-items:center;justify-content:center;color:#71717a}
.loading svg{width:2.5rem;height:2.5rem}
aside{width:33%;padding:2rem;border-right:2px solid rgba(38,38,38,.5);overflow:auto}
aside h1{display:flex;align-items:center;gap:.5rem;white-space:nowrap;margin-bottom:2rem;font-size:1.5rem;letter-spacing:.05em;font-weight:700}
aside h1 svg{width:2.25rem;height:2.25rem;color:#84cc16}
aside h1 .dot{color:#84cc16}
.search{width:100%;margin-bottom:2.5rem;padding:.6rem .8rem;border-radius:.375rem;border:1px solid #27272a;background:#18181b;color:#d4d4d8}
.nav-group{margin-bottom:2rem}
.nav-group h2{font-weight:700;letter-spacing:.1em;text-transform:uppercase;color:#71717a;margin-bottom:1rem;font-size:1rem}
.nav-group h2 a{color:inherit;text-decoration:none}
.nav-route{padding:.5rem 0}
.nav-route .method{font-weight:600;letter-spacing:.025em}
.nav-route .path{margin-left:.5rem;letter-spacing:.025em;color:#71717a}
section.details{padding:3rem;width:100%;overflow:auto}
.namespace{margin-top:4rem}
.namespace>h2{font-size:1.875rem;font-weight:600;letter-spacing:.05em;position:relative;padding-left:1.25rem;margin-bottom:2rem}
.namespace>h2::after{content:'';position:absolute;left:0;top:50%;transform:translateY(-50%);width:.25rem;height:2.5rem;border-radius:9999px;background:#84cc16}
.routes>*+*{margin-top:.75rem}
.route-header{display:flex;align-items:center;justify-content:space-between;border-radius:.375rem;padding:.5rem;width:100%;list-style:none;cursor:default}
details>.route-header{cursor:pointer}
.route-header::-webkit-details-marker{display:none}
.route-left,.route-right{display:flex;align-items:center;gap:1rem}
.route-right{margin-right:.5rem}
.route-header .method{font-size:1.125rem;letter-spacing:.1em;font-weight:600;padding:.5rem 0;width:6rem;text-align:center}
.route-path{font-size:1.125rem;letter-spacing:.025em}
.chevron{padding:.5rem;display:flex;transition:transform .2s}
details[open] .chevron{transform:rotate(180deg)}
details::details-content{height:0;overflow:hidden;transition:height .3s,content-visibility .3s allow-discrete}
details[open]::details-content{height:auto}
.route-body{margin-top:.5rem;padding:1.5rem;background:rgba(24,24,27,.5);border-radius:.375rem}
.route-body>section+section{margin-top:2rem}
.route-body h3{font-size:1.25rem;font-weight:600;letter-spacing:.05em;margin-bottom:1rem}
.route-body p,.muted{color:#71717a}
table{width:100%;border-collapse:collapse}
thead tr{border-bottom:2px solid #27272a;color:#71717a}
th,td{padding:.5rem;text-align:center}
th.left,td.left{text-align:left}
tbody tr+tr{border-top:1px solid rgba(39,39,42,.5)}
.glyph.check{color:#22c55e}
.glyph.dash{color:#71717a}
.required{display:inline-flex;flex-direction:column;align-items:center;gap:.5rem}
.response{display:flex;align-items:center;gap:1rem}
.accent-green{color:#22c55e}.bg-green{background:rgba(34,197,94,.05);color:rgba(220,252,231,.7)}
.accent-blue{color:#3b82f6}.bg-blue{background:rgba(59,130,246,.05);color:rgba(219,234,254,.7)}
.accent-yellow{color:#eab308}.bg-yellow{background:rgba(234,179,8,.05);color:rgba(254,249,195,.7)}
.accent-orange{color:#f97316}.bg-orange{background:rgba(249,115,22,.05);color:rgba(255,237,213,.7)}
.accent-red{color:#ef4444}.bg-red{background:rgba(239,68,68,.05);color:rgba(254,226,226,.7)}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("/users/:id"), "/users/:id");
    }

    #[test]
    fn page_adds_refresh_only_when_asked() {
        assert!(page("t", "", Some(3)).contains("http-equiv=\"refresh\" content=\"3\""));
        assert!(!page("t", "", None).contains("http-equiv"));
    }
}
