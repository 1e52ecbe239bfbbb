//! Not-found screen, rendered for every path other than the home path.

use super::{layout, PageContext};

pub fn render_not_found(ctx: &PageContext) -> String {
    let body = r#"<main class="not-found">
<h1>404</h1>
<h2>Page Not Found</h2>
<p>Sorry, the page you are looking for does not exist or has been moved.</p>
<a href="/" class="btn btn-light">Go Back Home</a>
</main>"#;
    layout(ctx, "Page Not Found", body)
}
