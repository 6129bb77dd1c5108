//! HTML page generation.
//!
//! Renders the portfolio into a single static page and copies the asset
//! directory next to it.
//!
//! ## Page Structure
//!
//! ```text
//! <html class="js">                  # class added by an inline head script
//! ├── header.site-header             # brand, nav links, resume button, menu toggle
//! ├── div.nav-overlay                # mobile menu: backdrop + slide-in panel
//! ├── main
//! │   ├── section#hero
//! │   ├── section#about              # stats count up on reveal
//! │   ├── ...                        # every registry section, in order
//! │   └── section#contact            # client-only form + acknowledgment panel
//! ├── footer#footer
//! ├── script#folio-behavior          # behaviour constants as JSON
//! └── script                         # static/site.js
//! ```
//!
//! Every `<section>` and the footer carry `data-reveal-threshold`; count-up
//! figures carry `data-count-target`, `data-count-prefix` and
//! `data-count-suffix`. The script reads nothing else, so the numbers it runs
//! on are the ones in `config.toml`.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── Mausam_Patel_Resume.pdf        # copied from the assets dir
//! └── profile-photo.png
//! ```
//!
//! ## Fail-Open Reveal
//!
//! Reveal styles only apply under `html.js`, and the head script only adds
//! that class when the browser has `IntersectionObserver`. Without it (or
//! without JavaScript) every section renders fully visible.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/site.js`: nav state, reveal, count-up, carousel, contact form

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, ContentError, Portfolio};
use crate::interaction::MULTIPLE_LABEL;
use crate::sections::{self, FOOTER_ID, HERO_ID, SECTIONS};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Marks the document as script-enhanced, but only where reveal can work.
const HEAD_JS: &str =
    "if('IntersectionObserver' in window){document.documentElement.classList.add('js')}";

/// Behaviour constants handed to `site.js`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BehaviorScript {
    scroll_threshold: f64,
    active_offset: f64,
    count_up_duration_ms: u64,
    count_up_steps: u32,
    sections: Vec<&'static str>,
}

impl BehaviorScript {
    fn from_config(config: &SiteConfig) -> Self {
        let b = &config.behavior;
        Self {
            scroll_threshold: b.scroll_threshold,
            active_offset: b.active_offset,
            count_up_duration_ms: b.count_up.duration_ms,
            count_up_steps: b.count_up.steps,
            sections: SECTIONS.iter().map(|s| s.id).collect(),
        }
    }
}

/// What a build produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub page: PathBuf,
    pub page_bytes: usize,
    pub sections: usize,
    /// Files copied from the assets dir, relative to it.
    pub assets: Vec<PathBuf>,
    /// Files the page links to that the assets dir does not provide.
    pub missing_assets: Vec<PathBuf>,
}

/// Render `portfolio` into `output_dir/index.html` and copy `assets_dir` (if
/// it exists) into `output_dir`.
pub fn generate(
    portfolio: &Portfolio,
    config: &SiteConfig,
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets = if assets_dir.is_dir() {
        copy_dir_recursive(assets_dir, output_dir)?
    } else {
        Vec::new()
    };

    let page = render_page(portfolio, config)?.into_string();
    let page_path = output_dir.join("index.html");
    fs::write(&page_path, &page)?;

    Ok(GenerateReport {
        page: page_path,
        page_bytes: page.len(),
        sections: SECTIONS.len(),
        assets,
        missing_assets: portfolio.missing_assets(assets_dir),
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied.push(rel.to_path_buf());
        }
    }
    Ok(copied)
}

/// Render the whole page.
pub fn render_page(portfolio: &Portfolio, config: &SiteConfig) -> Result<Markup, GenerateError> {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let behavior = behavior_json(config)?;
    let reveal = |id: &str| config.behavior.reveal.threshold_for(id);

    let content = html! {
        (site_header(portfolio, HERO_ID))
        (mobile_menu(portfolio, HERO_ID))
        main {
            (render_hero(portfolio, reveal(HERO_ID)))
            (render_about(&portfolio.about, reveal("about")))
            (render_experience(&portfolio.experience, reveal("experience")))
            (render_skills(&portfolio.skills, reveal("skills")))
            (render_tools(&portfolio.tools, reveal("tools")))
            (render_certifications(&portfolio.certifications, reveal("certifications")))
            (render_achievements(&portfolio.achievements, reveal("achievements")))
            (render_education(&portfolio.education, reveal("education")))
            (render_references(&portfolio.references, reveal("references")))
            (render_contact(portfolio, reveal("contact")))
        }
        (render_footer(portfolio, reveal(FOOTER_ID)))
        script type="application/json" id="folio-behavior" { (PreEscaped(behavior)) }
        script { (PreEscaped(JS)) }
    };

    let title = format!("{} | {}", portfolio.profile.name, portfolio.profile.headline);
    Ok(base_document(&title, &portfolio.profile.tagline, &css, content))
}

/// Behaviour JSON, safe to embed in a `<script>` element.
fn behavior_json(config: &SiteConfig) -> Result<String, GenerateError> {
    let json = serde_json::to_string(&BehaviorScript::from_config(config))?;
    Ok(json.replace("</", "<\\/"))
}

/// Inline Markdown to HTML.
fn markdown(source: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    out
}

// ============================================================================
// Shell
// ============================================================================

fn base_document(title: &str, description: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                script { (PreEscaped(HEAD_JS)) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Fixed header: brand, desktop nav, resume button, mobile menu toggle.
fn site_header(portfolio: &Portfolio, active: &str) -> Markup {
    html! {
        header.site-header {
            div.container.header-inner {
                a.brand href=(sections::anchor(HERO_ID)) data-section=(HERO_ID) {
                    (portfolio.profile.name)
                }
                nav.site-nav aria-label="Primary" {
                    (render_nav(active))
                }
                a.btn.btn-small.resume-link href=(portfolio.profile.resume_path) download {
                    "Resume"
                }
                button.nav-toggle type="button" aria-label="Toggle menu" aria-expanded="false" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
            }
        }
    }
}

/// Section links, marking `active` as current.
pub fn render_nav(active: &str) -> Markup {
    html! {
        ul.nav-links {
            @for link in sections::nav_links() {
                li {
                    a class=[(link.id == active).then_some("current")] href=(sections::anchor(link.id)) data-section=(link.id) {
                        (link.label)
                    }
                }
            }
        }
    }
}

fn mobile_menu(portfolio: &Portfolio, active: &str) -> Markup {
    html! {
        div.nav-overlay {
            div.nav-backdrop {}
            div.nav-panel {
                nav aria-label="Mobile" {
                    (render_nav(active))
                }
                a.btn.btn-block href=(portfolio.profile.resume_path) download {
                    "Download Resume"
                }
            }
        }
    }
}

/// Section heading: small label line plus headline.
fn section_heading(label: &str, headline: &str, intro: Option<&str>) -> Markup {
    html! {
        div.section-heading {
            span.section-label { (label) }
            h2.section-headline { (headline) }
            @if let Some(intro) = intro.filter(|s| !s.is_empty()) {
                p.section-intro { (intro) }
            }
        }
    }
}

/// A count-up figure, rendered at its final value so the page reads right
/// without the script. The script resets it to zero when it arms the reveal.
/// Zero targets render the fixed label and carry no data attributes.
fn counter(target: u32, prefix: &str, suffix: &str) -> Markup {
    html! {
        @if target == 0 {
            span.count { (MULTIPLE_LABEL) }
        } @else {
            span.count
                data-count-target=(target)
                data-count-prefix=(prefix)
                data-count-suffix=(suffix)
            {
                (prefix) (target) (suffix)
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn render_hero(portfolio: &Portfolio, threshold: f64) -> Markup {
    let p = &portfolio.profile;
    html! {
        section id="hero" class="section hero reveal" data-reveal-threshold=(threshold) {
            div.container.hero-grid {
                div.hero-text {
                    span.section-label { (p.headline) }
                    h1 { (p.name) }
                    p.hero-tagline { (p.tagline) }
                    ul.hero-contact {
                        li { (p.location) }
                        li { a href=(content::tel_href(&p.phone)) { (p.phone) } }
                        li { a href=(content::mailto_href(&p.email)) { (p.email) } }
                    }
                    div.hero-actions {
                        a.btn href=(sections::anchor("contact")) data-section="contact" { "Get in Touch" }
                        a.btn-link href=(p.resume_path) download { "Download Resume" }
                    }
                }
                div.hero-photo {
                    img src=(p.photo_path) alt=(p.name) width="384" height="384";
                }
            }
            a.scroll-hint href=(sections::anchor("about")) data-section="about" {
                "Scroll" span aria-hidden="true" { "\u{2193}" }
            }
        }
    }
}

fn render_about(about: &content::About, threshold: f64) -> Markup {
    html! {
        section id="about" class="section reveal" data-reveal-threshold=(threshold) {
            div.container.narrow {
                (section_heading(&about.label, &about.headline, None))
                div.about-grid {
                    div.about-text {
                        @for paragraph in &about.paragraphs {
                            (PreEscaped(markdown(paragraph)))
                        }
                    }
                    @if !about.strengths.is_empty() {
                        div.about-strengths {
                            h3 { "Core Strengths" }
                            ul.tags {
                                @for strength in &about.strengths {
                                    li.tag { (strength) }
                                }
                            }
                        }
                    }
                }
                @if !about.stats.is_empty() {
                    div.stats {
                        @for stat in &about.stats {
                            div.stat {
                                div.stat-number { (counter(stat.target, &stat.prefix, &stat.suffix)) }
                                div.stat-label { (stat.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_experience(experience: &content::ExperienceSection, threshold: f64) -> Markup {
    html! {
        section id="experience" class="section alt reveal" data-reveal-threshold=(threshold) {
            div.container.narrow {
                (section_heading(&experience.label, &experience.headline, None))
                ol.timeline {
                    @for item in &experience.items {
                        li.timeline-item.current[item.current] {
                            article.card {
                                header.card-header {
                                    div {
                                        h3 { (item.position) }
                                        p.muted { (item.company) }
                                    }
                                    @if item.current {
                                        span.badge { "Current" }
                                    }
                                }
                                p.meta {
                                    span { (item.period) }
                                    span { (item.location) }
                                }
                                p { (item.description) }
                                @if !item.highlights.is_empty() {
                                    ul.tags.small {
                                        @for highlight in &item.highlights {
                                            li.tag { (highlight) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_skills(skills: &content::SkillsSection, threshold: f64) -> Markup {
    html! {
        section id="skills" class="section reveal" data-reveal-threshold=(threshold) {
            div.container {
                (section_heading(&skills.label, &skills.headline, None))
                div.skill-grid {
                    @for category in &skills.categories {
                        div.card.skill-category {
                            h3 { (category.title) }
                            @for skill in &category.skills {
                                div.skill {
                                    div.skill-row {
                                        span { (skill.name) }
                                        span.muted { (skill.level) "%" }
                                    }
                                    div.skill-bar {
                                        div.skill-fill style={ "--level: " (skill.level) "%" } {}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_tools(tools: &content::ToolsSection, threshold: f64) -> Markup {
    html! {
        section id="tools" class="section alt reveal" data-reveal-threshold=(threshold) {
            div.container {
                (section_heading(&tools.label, &tools.headline, None))
                div.tool-grid {
                    @for tool in &tools.items {
                        div.card.tool {
                            span.badge.subtle { (tool.level) }
                            h3 { (tool.name) }
                            ul.checklist {
                                @for feature in &tool.features {
                                    li { (feature) }
                                }
                            }
                        }
                    }
                }
                @if !tools.focus_areas.is_empty() {
                    ul.tags.centered {
                        @for area in &tools.focus_areas {
                            li.tag.outline { (area) }
                        }
                    }
                }
            }
        }
    }
}

fn render_certifications(certs: &content::CertificationsSection, threshold: f64) -> Markup {
    let len = certs.items.len();
    html! {
        section id="certifications" class="section reveal" data-reveal-threshold=(threshold) {
            div.container.narrow {
                (section_heading(&certs.label, &certs.headline, None))
                div.carousel data-carousel-length=(len) {
                    div.carousel-track {
                        @for (index, cert) in certs.items.iter().enumerate() {
                            article.card.carousel-slide.active[index == 0]
                                data-index=(index)
                                aria-hidden=(if index == 0 { "false" } else { "true" })
                            {
                                h3 { (cert.name) }
                                p.meta {
                                    span { (cert.issuer) }
                                    span { (cert.date) }
                                }
                                p { (cert.description) }
                                ul.tags.small {
                                    @for skill in &cert.skills {
                                        li.tag { (skill) }
                                    }
                                }
                            }
                        }
                    }
                    div.carousel-controls {
                        button.carousel-prev type="button" aria-label="Previous certification" { "\u{2190}" }
                        span.carousel-position { "1 / " (len) }
                        button.carousel-next type="button" aria-label="Next certification" { "\u{2192}" }
                    }
                    ol.carousel-picker {
                        @for (index, cert) in certs.items.iter().enumerate() {
                            li {
                                button.carousel-pick.active[index == 0] type="button" data-index=(index) {
                                    span.pick-name { (cert.name) }
                                    span.pick-issuer { (cert.issuer) }
                                }
                            }
                        }
                    }
                }
                @if !certs.additional.is_empty() {
                    div.additional {
                        p.muted { "Additional Certifications" }
                        ul.tags.centered {
                            @for cert in &certs.additional {
                                li.tag.outline { (cert) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_achievements(achievements: &content::AchievementsSection, threshold: f64) -> Markup {
    html! {
        section id="achievements" class="section dark reveal" data-reveal-threshold=(threshold) {
            div.container {
                (section_heading(&achievements.label, &achievements.headline, Some(achievements.intro.as_str())))
                div.achievement-grid {
                    @for item in &achievements.items {
                        div.achievement {
                            div.stat-number { (counter(item.target, &item.prefix, &item.suffix)) }
                            h3 { (item.label) }
                            p { (item.description) }
                        }
                    }
                }
            }
        }
    }
}

fn render_education(education: &content::EducationSection, threshold: f64) -> Markup {
    html! {
        section id="education" class="section alt reveal" data-reveal-threshold=(threshold) {
            div.container.narrow {
                (section_heading(&education.label, &education.headline, None))
                @for item in &education.items {
                    article.card.education-item {
                        header.card-header {
                            div {
                                h3 { (item.title) }
                                p.muted { (item.institution) }
                            }
                            @if let Some(gpa) = &item.gpa {
                                span.badge.subtle { "GPA " (gpa) }
                            }
                        }
                        p.meta {
                            span { (item.period) }
                            @if let Some(location) = &item.location {
                                span { (location) }
                            }
                        }
                        p { (item.description) }
                    }
                }
            }
        }
    }
}

fn render_references(references: &content::ReferencesSection, threshold: f64) -> Markup {
    html! {
        section id="references" class="section reveal" data-reveal-threshold=(threshold) {
            div.container {
                (section_heading(&references.label, &references.headline, None))
                div.reference-grid {
                    @for reference in &references.items {
                        article.card.reference {
                            div.reference-head {
                                span.avatar aria-hidden="true" { (reference.initials()) }
                                div {
                                    h3 { (reference.name) }
                                    p.muted { (reference.title) }
                                }
                            }
                            p.muted { (reference.company) }
                            span.tag.small { (reference.relationship) }
                            div.reference-contact {
                                a href=(content::mailto_href(&reference.email)) { (reference.email) }
                                a href=(content::tel_href(&reference.phone)) { (reference.phone) }
                            }
                        }
                    }
                }
                @if !references.note.is_empty() {
                    p.muted.centered { (references.note) }
                }
            }
        }
    }
}

fn render_contact(portfolio: &Portfolio, threshold: f64) -> Markup {
    let contact = &portfolio.contact;
    let p = &portfolio.profile;
    html! {
        section id="contact" class="section alt reveal" data-reveal-threshold=(threshold) {
            div.container {
                (section_heading(&contact.label, &contact.headline, Some(contact.intro.as_str())))
                div.contact-grid {
                    div.contact-info {
                        dl.contact-cards {
                            div.contact-card {
                                dt { "Location" }
                                dd { (contact.location) }
                            }
                            div.contact-card {
                                dt { "Phone" }
                                dd { a href=(content::tel_href(&p.phone)) { (p.phone) } }
                            }
                            div.contact-card {
                                dt { "Email" }
                                dd { a href=(content::mailto_href(&p.email)) { (p.email) } }
                            }
                        }
                        @if !contact.target_roles.is_empty() {
                            h3 { "Target Roles" }
                            ul.tags {
                                @for role in &contact.target_roles {
                                    li.tag.outline { (role) }
                                }
                            }
                        }
                        div.availability {
                            strong { (contact.availability_title) }
                            p.muted { (contact.availability_note) }
                        }
                    }
                    div.card.contact-form-card {
                        (contact_form())
                        div.form-ack hidden {
                            h3 { "Message Sent" }
                            p.muted { "Thank you for reaching out. I'll get back to you soon." }
                        }
                    }
                }
            }
        }
    }
}

fn contact_form() -> Markup {
    html! {
        form.contact-form {
            div.form-row {
                div.field {
                    label for="name" { "Name *" }
                    input id="name" name="name" type="text" placeholder="Your name" required;
                }
                div.field {
                    label for="email" { "Email *" }
                    input id="email" name="email" type="email" placeholder="your@email.com" required;
                }
            }
            div.field {
                label for="phone" { "Phone" }
                input id="phone" name="phone" type="tel" placeholder="(123) 456-7890";
            }
            div.field {
                label for="message" { "Message *" }
                textarea id="message" name="message" rows="4" placeholder="How can I help you?" required {}
            }
            button.btn.btn-block type="submit" { "Send Message" }
        }
    }
}

fn render_footer(portfolio: &Portfolio, threshold: f64) -> Markup {
    let p = &portfolio.profile;
    html! {
        footer id="footer" class="site-footer reveal" data-reveal-threshold=(threshold) {
            div.container {
                div.footer-top {
                    div {
                        h3 { (p.name) }
                        p { (portfolio.footer_tagline()) }
                    }
                    nav.footer-nav aria-label="Footer" {
                        @for link in sections::nav_links() {
                            a href=(sections::anchor(link.id)) data-section=(link.id) { (link.label) }
                        }
                    }
                    div.footer-actions {
                        a.icon-link href=(p.linkedin) target="_blank" rel="noopener noreferrer" { "LinkedIn" }
                        a.icon-link href=(content::mailto_href(&p.email)) { "Email" }
                        a.btn.btn-light href=(p.resume_path) download { "Resume" }
                    }
                }
                div.footer-bottom {
                    p { "\u{a9} " (portfolio.footer.copyright_year) " " (p.name) ". All rights reserved." }
                    button.back-to-top type="button" { "Back to top " span aria-hidden="true" { "\u{2191}" } }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
