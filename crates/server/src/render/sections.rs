//! Markup for the five home sections.

use folio_core::contact::{ContactSession, Field};
use folio_core::content::{CONTACT_INFO, PROFILE, SKILL_CATEGORIES, SOCIAL_LINKS, STRENGTHS, WORKFLOW};
use folio_core::gallery::GalleryView;
use folio_core::motion::{Stagger, TextReveal};
use folio_core::shell::HomeSection;

use super::{entrance_style, escape, PageContext};

/// Opening tag of a scroll-revealed section
fn open_section(section: HomeSection) -> String {
    format!(
        r#"<section id="{}" class="section" data-reveal>"#,
        section.anchor()
    )
}

pub fn hero(ctx: &PageContext) -> String {
    let reveal = TextReveal::new(PROFILE.role);
    let steps = reveal.steps();
    let typing_ms = ctx.reveal_interval.as_millis() * steps as u128;
    let socials: String = SOCIAL_LINKS
        .iter()
        .take(2)
        .map(|social| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" aria-label="{name}">{name}</a>"#,
                escape(social.url),
                name = escape(social.name)
            )
        })
        .collect();
    format!(
        r#"<section id="{anchor}" class="hero">
<h3>{greeting}</h3>
<h1>{name}</h1>
<h2 class="typed" style="--steps:{steps};--typing:{typing}ms">{role}</h2>
<p>{intro}</p>
<div class="actions">
<a href="/#projects" class="btn btn-primary">View Projects</a>
<a href="/#contact" class="btn btn-outline">Hire Me</a>
<a href="{resume}" class="btn btn-outline" download>Resume</a>
</div>
<div class="socials">{socials}</div>
</section>"#,
        anchor = HomeSection::Hero.anchor(),
        greeting = escape(PROFILE.greeting),
        name = escape(PROFILE.name),
        steps = steps,
        typing = typing_ms,
        role = escape(reveal.target()),
        intro = escape(PROFILE.intro),
        resume = escape(PROFILE.resume),
        socials = socials,
    )
}

pub fn about() -> String {
    let stagger = Stagger::ABOUT;
    let paragraphs: String = PROFILE
        .about
        .iter()
        .enumerate()
        .map(|(i, text)| format!("<p {}>{}</p>", entrance_style(stagger, i + 2), escape(text)))
        .collect();
    let strengths: String = STRENGTHS
        .iter()
        .enumerate()
        .map(|(i, strength)| {
            format!(
                r#"<div class="card" {}><h4>{}</h4><p>{}</p></div>"#,
                entrance_style(stagger, i),
                escape(strength.title),
                escape(strength.description)
            )
        })
        .collect();
    format!(
        r#"{open}
<h2 class="section-title" {title_style}>About Me</h2>
<div class="about-body" {body_style}>
<img src="{portrait}" alt="{name}">
<div>{paragraphs}</div>
</div>
<h3 class="section-subtitle">My Core Strengths</h3>
<div class="grid strengths" data-reveal>{strengths}</div>
</section>"#,
        open = open_section(HomeSection::About),
        title_style = entrance_style(stagger, 0),
        body_style = entrance_style(stagger, 1),
        portrait = escape(PROFILE.portrait),
        name = escape(PROFILE.name),
        paragraphs = paragraphs,
        strengths = strengths,
    )
}

pub fn projects(gallery: &GalleryView) -> String {
    let stagger = Stagger::SECTION;
    let selectors: String = gallery
        .selectors()
        .iter()
        .map(|button| {
            let class = if button.active { "chip active" } else { "chip" };
            format!(
                r#"<a class="{}" href="/?category={}#projects">{}</a>"#,
                class,
                escape(&button.label.replace(' ', "+")),
                escape(button.label)
            )
        })
        .collect();

    let cards: String = gallery
        .cards()
        .iter()
        .map(|card| {
            let tags: String = card
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
                .collect();
            format!(
                r#"<article class="card project" data-key="{key}" style="--delay:{delay}ms;--duration:{duration}ms">
<img src="{image}" alt="{title}">
<div class="card-body">
<div class="card-head"><h3>{title}</h3><span class="badge">{badge}</span></div>
<p>{description}</p>
<div class="tags">{tags}</div>
<div class="links">
<a href="{demo}" target="_blank" rel="noopener noreferrer">Live Demo</a>
<a href="{source}" target="_blank" rel="noopener noreferrer">Source Code</a>
</div>
</div>
</article>"#,
                key = card.key,
                delay = card.entrance_delay.as_millis(),
                duration = stagger.duration.as_millis(),
                image = escape(card.image),
                title = escape(card.title),
                badge = escape(card.badge),
                description = escape(card.description),
                tags = tags,
                demo = escape(card.demo_link),
                source = escape(card.source_link),
            )
        })
        .collect();

    let grid = if cards.is_empty() {
        r#"<p class="empty">No projects in this category yet.</p>"#.to_string()
    } else {
        format!(r#"<div class="grid projects">{}</div>"#, cards)
    };

    format!(
        r#"{open}
<h2 class="section-title" {s0}>My Projects</h2>
<p class="lead" {s1}>Here are a few of my recent projects that highlight my expertise in solving real-world challenges and building full-stack solutions using modern technologies.</p>
<nav class="selectors" {s2}>{selectors}</nav>
{grid}
<div class="more"><a class="btn btn-outline" href="https://github.com/PrakashBind/" target="_blank" rel="noopener noreferrer">View More on GitHub</a></div>
</section>"#,
        open = open_section(HomeSection::Projects),
        s0 = entrance_style(stagger, 0),
        s1 = entrance_style(stagger, 1),
        s2 = entrance_style(stagger, 2),
        selectors = selectors,
        grid = grid,
    )
}

pub fn skills() -> String {
    let stagger = Stagger::SECTION;
    let categories: String = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(ci, category)| {
            let rows: String = category
                .skills
                .iter()
                .enumerate()
                .map(|(si, skill)| {
                    format!(
                        r#"<div class="skill" style="--delay:{row}ms"><div class="skill-head"><span>{name}</span><span>{level}%</span></div><div class="bar"><div class="fill" style="--level:{level}%;--delay:{bar}ms;--duration:{dur}ms"></div></div></div>"#,
                        row = Stagger::SKILL_ROW.delay_for(si).as_millis(),
                        name = escape(skill.name),
                        level = skill.level,
                        bar = Stagger::SKILL_BAR.delay_for(si).as_millis(),
                        dur = Stagger::SKILL_BAR.duration.as_millis(),
                    )
                })
                .collect();
            format!(
                r#"<div class="card skill-category" {}><h3>{}</h3>{}</div>"#,
                entrance_style(stagger, ci + 2),
                escape(category.title),
                rows
            )
        })
        .collect();
    let steps: String = WORKFLOW
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let side = if i % 2 == 0 { "left" } else { "right" };
            format!(
                r#"<li class="step {side}" {style}><span class="step-no">{no}</span><h4>{title}</h4><p>{description}</p></li>"#,
                side = side,
                style = entrance_style(Stagger::WORKFLOW_STEP, i),
                no = i + 1,
                title = escape(step.title),
                description = escape(step.description),
            )
        })
        .collect();
    format!(
        r#"{open}
<h2 class="section-title" {s0}>My Skills</h2>
<p class="lead" {s1}>Throughout my journey as a MERN Stack Developer, I've built a diverse set of technical skills, enabling me to deliver efficient, scalable, and maintainable web applications.</p>
<div class="grid skills">{categories}</div>
<h3 class="section-subtitle">Development Workflow</h3>
<ol class="timeline" data-reveal>{steps}</ol>
</section>"#,
        open = open_section(HomeSection::Skills),
        s0 = entrance_style(stagger, 0),
        s1 = entrance_style(stagger, 1),
        categories = categories,
        steps = steps,
    )
}

fn field_error(session: &ContactSession, field: Field) -> String {
    match session.errors().get(field) {
        Some(text) => format!(r#"<p class="field-error">{}</p>"#, escape(text)),
        None => String::new(),
    }
}

fn input_class(session: &ContactSession, field: Field) -> &'static str {
    if session.errors().get(field).is_some() {
        "input invalid"
    } else {
        "input"
    }
}

pub fn contact(session: &ContactSession) -> String {
    let stagger = Stagger::SECTION;
    let form = session.form();
    let info: String = CONTACT_INFO
        .iter()
        .map(|item| {
            format!(
                r#"<div class="info"><h4>{}</h4><a href="{}">{}</a></div>"#,
                escape(item.title),
                escape(item.link),
                escape(item.value)
            )
        })
        .collect();
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
    let status = match session.status().message() {
        Some(text) => format!(
            r#"<p class="status {}">{}</p>"#,
            session.status().as_str(),
            escape(text)
        ),
        None => String::new(),
    };
    let (disabled, button) = if session.is_submitting() {
        (" disabled", "Sending...")
    } else {
        ("", "Send Message")
    };

    format!(
        r#"{open}
<h2 class="section-title" {s0}>Get In Touch</h2>
<p class="lead" {s1}>I'm currently open to freelance opportunities and full-time MERN Stack Developer roles. If you have a project that needs clean code, modern design, and reliable delivery, feel free to get in touch!</p>
<div class="contact-grid">
<div class="card" {s2}><h3>Contact Information</h3>{info}<h4>Follow Me</h4><div class="socials">{socials}</div></div>
<div class="card" {s3}>
<h3>Send Me a Message</h3>
<form method="post" action="/message#contact" data-contact-form novalidate>
<label for="name">Full Name *</label>
<input type="text" id="name" name="name" class="{name_class}" value="{name}" placeholder="John Doe">
{name_error}
<label for="email">Email Address *</label>
<input type="email" id="email" name="email" class="{email_class}" value="{email}" placeholder="john@example.com">
{email_error}
<label for="subject">Subject</label>
<input type="text" id="subject" name="subject" class="input" value="{subject}" placeholder="Project Inquiry">
<label for="message">Message *</label>
<textarea id="message" name="message" rows="5" class="{message_class}" placeholder="Hello, I'd like to talk about...">{message}</textarea>
{message_error}
<button type="submit" class="btn btn-primary"{disabled}>{button}</button>
{status}
</form>
</div>
</div>
</section>"#,
        open = open_section(HomeSection::Contact),
        s0 = entrance_style(stagger, 0),
        s1 = entrance_style(stagger, 1),
        s2 = entrance_style(stagger, 2),
        s3 = entrance_style(stagger, 3),
        info = info,
        socials = socials,
        name_class = input_class(session, Field::Name),
        name = escape(&form.name),
        name_error = field_error(session, Field::Name),
        email_class = input_class(session, Field::Email),
        email = escape(&form.email),
        email_error = field_error(session, Field::Email),
        subject = escape(&form.subject),
        message_class = input_class(session, Field::Message),
        message = escape(&form.message),
        message_error = field_error(session, Field::Message),
        disabled = disabled,
        button = button,
        status = status,
    )
}
