//! Home screen: loading overlay followed by the sections in page order.

use folio_core::contact::ContactSession;
use folio_core::content::PROFILE;
use folio_core::gallery::GalleryView;
use folio_core::shell::{HomeSection, HOME_SECTIONS};

use super::{layout, sections, PageContext};

/// State the home screen reads
pub struct HomeView<'a> {
    pub gallery: &'a GalleryView,
    pub contact: &'a ContactSession,
}

/// Overlay shown until the loading gate opens
fn loading_overlay(ctx: &PageContext) -> String {
    format!(
        r#"<div class="loading-gate" style="--gate:{}ms" aria-hidden="true"><div class="spinner"></div><p>Loading...</p></div>"#,
        ctx.loading_delay.as_millis()
    )
}

fn render_section(ctx: &PageContext, view: &HomeView<'_>, section: HomeSection) -> String {
    match section {
        HomeSection::Hero => sections::hero(ctx),
        HomeSection::About => sections::about(),
        HomeSection::Projects => sections::projects(view.gallery),
        HomeSection::Skills => sections::skills(),
        HomeSection::Contact => sections::contact(view.contact),
    }
}

pub fn render_home(ctx: &PageContext, view: &HomeView<'_>) -> String {
    let main: String = HOME_SECTIONS
        .iter()
        .map(|section| render_section(ctx, view, *section))
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        "{}\n<main style=\"--gate:{}ms\">\n{}\n</main>",
        loading_overlay(ctx),
        ctx.loading_delay.as_millis(),
        main
    );
    layout(ctx, &format!("{} | Portfolio", PROFILE.name), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::contact::{Field, SubmitOutcome};
    use folio_core::theme::ThemeMode;
    use std::time::Duration;

    fn ctx() -> PageContext {
        PageContext {
            theme: ThemeMode::Light,
            loading_delay: Duration::from_millis(1000),
            reveal_interval: Duration::from_millis(100),
        }
    }

    fn render(gallery: &GalleryView, contact: &ContactSession) -> String {
        render_home(&ctx(), &HomeView { gallery, contact })
    }

    #[test]
    fn test_sections_in_page_order() {
        let html = render(&GalleryView::new(), &ContactSession::new());
        let positions: Vec<usize> = ["home", "about", "projects", "skills", "contact"]
            .iter()
            .map(|id| html.find(&format!(r#"id="{}""#, id)).expect(id))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_gallery_selection_is_rendered() {
        let mut gallery = GalleryView::new();
        gallery.select_category("Backend");
        let html = render(&gallery, &ContactSession::new());
        assert_eq!(html.matches(r#"class="card project""#).count(), 1);
        assert!(html.contains("Blog API"));
        assert!(html.contains(r#"class="chip active" href="/?category=Backend#projects""#));
    }

    #[test]
    fn test_unknown_category_renders_empty_grid() {
        let mut gallery = GalleryView::new();
        gallery.select_category("Mobile");
        let html = render(&gallery, &ContactSession::new());
        assert_eq!(html.matches(r#"class="card project""#).count(), 0);
        assert!(html.contains("No projects in this category yet."));
    }

    #[test]
    fn test_validation_errors_inline() {
        let mut contact = ContactSession::new();
        contact.edit(Field::Email, "not-an-email");
        assert_eq!(contact.begin_submit(), Err(SubmitOutcome::Invalid));

        let html = render(&GalleryView::new(), &contact);
        assert!(html.contains("Name is required"));
        assert!(html.contains("Please enter a valid email"));
        assert!(html.contains("Message is required"));
        assert!(html.contains(r#"value="not-an-email""#));
    }

    #[test]
    fn test_submitting_disables_button() {
        let mut contact = ContactSession::new();
        contact.edit(Field::Name, "Jane Doe");
        contact.edit(Field::Email, "jane@example.com");
        contact.edit(Field::Message, "Hello");
        contact.begin_submit().unwrap();

        let html = render(&GalleryView::new(), &contact);
        assert!(html.contains(r#"<button type="submit" class="btn btn-primary" disabled>Sending...</button>"#));
    }

    #[test]
    fn test_loading_overlay_uses_configured_delay() {
        let html = render(&GalleryView::new(), &ContactSession::new());
        assert!(html.contains(r#"style="--gate:1000ms""#));
    }
}
