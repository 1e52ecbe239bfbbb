//! # HTML Rendering
//!
//! Server-side rendering of the shell's screens. Views only read core state;
//! every decision (filtering, validation, routing) is made in `folio_core`.

pub mod home;
pub mod not_found;
pub mod sections;

use std::time::Duration;

use folio_core::content::{copyright, quick_links, PROFILE, SOCIAL_LINKS};
use folio_core::motion::{Stagger, DEFAULT_THRESHOLD};
use folio_core::theme::ThemeMode;

pub use home::{render_home, HomeView};
pub use not_found::render_not_found;

/// Per-request presentation settings
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub theme: ThemeMode,
    pub loading_delay: Duration,
    pub reveal_interval: Duration,
}

/// Escape text for use in element content and quoted attributes
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

/// `style` attribute carrying a child's entrance timing as CSS variables
pub fn entrance_style(stagger: Stagger, index: usize) -> String {
    let entrance = stagger.entrance(index, true);
    format!(
        r#"style="--delay:{}ms;--duration:{}ms""#,
        entrance.delay.as_millis(),
        entrance.duration.as_millis()
    )
}

/// Full document around `body`
pub fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/styles.css">
<noscript><style>[data-reveal] [style*="--delay"] {{ opacity: 1; transform: none; }} .fill {{ width: var(--level); }} .loading-gate {{ display: none; }}</style></noscript>
</head>
<body data-reveal-threshold="{threshold}">
{header}
{body}
{footer}
<script src="/assets/reveal.js" defer></script>
</body>
</html>
"#,
        theme = ctx.theme.as_str(),
        title = escape(title),
        threshold = DEFAULT_THRESHOLD,
        header = render_header(ctx),
        body = body,
        footer = render_footer(),
    )
}

fn render_header(ctx: &PageContext) -> String {
    let links: String = quick_links()
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}">{}</a>"#,
                escape(&link.href),
                escape(link.label)
            )
        })
        .collect();
    let toggle_label = match ctx.theme {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };
    format!(
        r#"<header class="site-header">
<a class="brand" href="/">{name}</a>
<nav>{links}</nav>
<form method="post" action="/theme"><button type="submit" class="theme-toggle">{toggle}</button></form>
</header>"#,
        name = escape(PROFILE.name),
        links = links,
        toggle = toggle_label,
    )
}

fn render_footer() -> String {
    let socials: String = SOCIAL_LINKS
        .iter()
        .map(|social| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" aria-label="{name}">{name}</a>"#,
                escape(social.url),
                name = escape(social.name)
            )
        })
        .collect();
    let links: String = quick_links()
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape(&link.href),
                escape(link.label)
            )
        })
        .collect();
    format!(
        r#"<footer class="site-footer">
<div><h3>{name}</h3><p>{tagline}</p><div class="socials">{socials}</div></div>
<div><h3>Quick Links</h3><ul>{links}</ul></div>
<p class="copyright">{copyright}</p>
</footer>"#,
        name = escape(PROFILE.name),
        tagline = escape(PROFILE.tagline),
        socials = socials,
        links = links,
        copyright = escape(&copyright(PROFILE.name)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_entrance_style() {
        assert_eq!(
            entrance_style(Stagger::SECTION, 2),
            r#"style="--delay:200ms;--duration:500ms""#
        );
    }

    #[test]
    fn test_layout_carries_theme() {
        let ctx = PageContext {
            theme: ThemeMode::Dark,
            loading_delay: Duration::from_millis(1000),
            reveal_interval: Duration::from_millis(100),
        };
        let html = layout(&ctx, "Title", "<main></main>");
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("Light mode"));
        assert!(html.contains("<main></main>"));
    }
}
