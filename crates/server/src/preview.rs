//! # Terminal Preview
//!
//! Drives the headless page model without a browser: the loading gate,
//! scroll-triggered section latches on a simulated viewport, the typed role
//! line and the filtered gallery.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio_core::config::SiteConfig;
use folio_core::content::PROFILE;
use folio_core::gallery::GalleryView;
use folio_core::motion::{run_reveal, ScrollViewport, SectionReveal, TextReveal, DEFAULT_THRESHOLD};
use folio_core::shell::{Screen, Shell, HOME_PATH, HOME_SECTIONS};

/// Viewport height used for the simulated scroll
const VIEWPORT_HEIGHT: f64 = 800.0;
/// Every section is laid out with the same height
const SECTION_HEIGHT: f64 = 900.0;
const SCROLL_STEP: f64 = 400.0;

pub async fn run_preview(config: &SiteConfig, category: Option<String>) -> anyhow::Result<()> {
    let shell = Shell::mount(config.loading_delay());
    if shell.screen(HOME_PATH) == Screen::Loading {
        println!("⏳ Loading ({} ms)...", shell.gate().delay().as_millis());
    }
    shell.gate().wait_ready().await;

    let sections = match shell.screen(HOME_PATH) {
        Screen::Home(sections) => sections,
        other => anyhow::bail!("unexpected screen for home path: {:?}", other),
    };
    println!("✅ Ready, {} sections", sections.len());

    // Hero role line
    let typed = Arc::new(Mutex::new(String::new()));
    let sink = typed.clone();
    let reveal = TextReveal::new(PROFILE.role);
    let steps = reveal.steps() as u32;
    let _typing = run_reveal(reveal, config.reveal_interval(), move |text| {
        if let Ok(mut line) = sink.lock() {
            *line = text.to_string();
        }
    });
    tokio::time::sleep(config.reveal_interval() * (steps + 1)).await;
    let role = typed.lock().map(|line| line.clone()).unwrap_or_default();
    println!("{}\n{}", PROFILE.name, role);

    // Scroll through the page and report entrances
    let mut viewport = ScrollViewport::new(VIEWPORT_HEIGHT);
    for (i, section) in HOME_SECTIONS.iter().enumerate() {
        viewport.place(section.anchor(), i as f64 * SECTION_HEIGHT, SECTION_HEIGHT);
    }
    let reveals: Vec<SectionReveal> = sections
        .iter()
        .map(|section| SectionReveal::attach(&mut viewport, section.anchor(), DEFAULT_THRESHOLD))
        .collect();

    let page_height = SECTION_HEIGHT * HOME_SECTIONS.len() as f64;
    let mut offset = 0.0;
    let mut announced = vec![false; reveals.len()];
    while offset <= page_height {
        viewport.scroll_to(offset);
        for (reveal, seen) in reveals.iter().zip(announced.iter_mut()) {
            if reveal.is_visible() && !*seen {
                *seen = true;
                println!("  ↳ #{} entered at scroll {}", reveal.section(), viewport.offset());
            }
        }
        offset += SCROLL_STEP;
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    // Gallery
    let mut gallery = GalleryView::new();
    if let Some(category) = category {
        gallery.select_category(&category);
    }
    println!("\nProjects [{}]", gallery.selected().label());
    let cards = gallery.cards();
    if cards.is_empty() {
        println!("  (no projects in this category)");
    }
    for card in cards {
        println!("  #{} {} ({}) - {}", card.key, card.title, card.badge, card.tags.join(", "));
    }

    Ok(())
}
