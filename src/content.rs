//! Portfolio content: everything the page says.
//!
//! Content lives in a single TOML document with one table per section. A
//! default document is compiled into the binary (`content/portfolio.toml`), so
//! `folio build` works without any input; `--content FILE` replaces it.
//!
//! ## Shape
//!
//! ```toml
//! [profile]                 # name, headline, contact details, asset paths
//! [about]                   # paragraphs (inline Markdown), strengths
//! [[about.stats]]           # count-up figures
//! [experience]
//! [[experience.items]]
//! [skills]
//! [[skills.categories]]     # title + skills = [{ name, level }]
//! [tools]
//! [[tools.items]]
//! [certifications]
//! [[certifications.items]]  # carousel slides, at least one
//! [achievements]
//! [[achievements.items]]    # count-up figures with descriptions
//! [education]
//! [[education.items]]
//! [references]
//! [[references.items]]
//! [contact]
//! [footer]
//! ```
//!
//! Every section table carries its own `label` (the small caps line above the
//! heading) and `headline`. Unknown keys are rejected, as in `config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
}

/// Built-in content document.
pub const DEFAULT_CONTENT: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub experience: ExperienceSection,
    pub skills: SkillsSection,
    pub tools: ToolsSection,
    pub certifications: CertificationsSection,
    pub achievements: AchievementsSection,
    pub education: EducationSection,
    pub references: ReferencesSection,
    pub contact: Contact,
    #[serde(default)]
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    /// Role line shown above the name.
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    /// Site-absolute path of the downloadable resume, served from the assets dir.
    pub resume_path: String,
    pub photo_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    pub label: String,
    pub headline: String,
    /// Inline Markdown, one entry per paragraph.
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub stats: Vec<CounterStat>,
}

/// A number that counts up from zero when its section is revealed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterStat {
    /// Zero renders the fixed label `Multiple` and never animates.
    pub target: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceSection {
    pub label: String,
    pub headline: String,
    pub items: Vec<Experience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillsSection {
    pub label: String,
    pub headline: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub label: String,
    pub headline: String,
    pub items: Vec<Tool>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    pub name: String,
    /// Free-form proficiency label ("Expert", "Advanced", ...).
    pub level: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificationsSection {
    pub label: String,
    pub headline: String,
    pub items: Vec<Certification>,
    /// Smaller certifications listed as tags under the carousel.
    #[serde(default)]
    pub additional: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementsSection {
    pub label: String,
    pub headline: String,
    #[serde(default)]
    pub intro: String,
    pub items: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Achievement {
    pub target: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationSection {
    pub label: String,
    pub headline: String,
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationItem {
    pub title: String,
    pub institution: String,
    pub period: String,
    pub location: Option<String>,
    pub gpa: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferencesSection {
    pub label: String,
    pub headline: String,
    pub items: Vec<Reference>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reference {
    pub name: String,
    pub title: String,
    pub company: String,
    pub relationship: String,
    pub period: String,
    pub email: String,
    pub phone: String,
}

impl Reference {
    /// Avatar initials: first letter of the first and last word of the name.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub label: String,
    pub headline: String,
    pub intro: String,
    /// Full postal location shown in the contact card.
    pub location: String,
    #[serde(default)]
    pub target_roles: Vec<String>,
    pub availability_title: String,
    pub availability_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    /// Line under the name; falls back to the profile headline when empty.
    pub tagline: String,
    pub copyright_year: u16,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            tagline: String::new(),
            copyright_year: 2026,
        }
    }
}

/// `tel:` URI for a display-formatted phone number (digits only).
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

impl Portfolio {
    /// Parse a content document and validate it.
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load content from `path`, or the built-in document when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::parse(&fs::read_to_string(path)?),
            None => Self::parse(DEFAULT_CONTENT),
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let p = &self.profile;
        if p.name.trim().is_empty() {
            return Err(ContentError::Validation("profile.name must not be empty".into()));
        }
        if !p.email.contains('@') {
            return Err(ContentError::Validation(format!(
                "profile.email is not an email address: '{}'",
                p.email
            )));
        }
        for (key, path) in [("resume_path", &p.resume_path), ("photo_path", &p.photo_path)] {
            if !path.starts_with('/') {
                return Err(ContentError::Validation(format!(
                    "profile.{key} must be site-absolute (start with '/'): '{path}'"
                )));
            }
        }
        if self.certifications.items.is_empty() {
            return Err(ContentError::Validation(
                "certifications.items needs at least one entry".into(),
            ));
        }
        for category in &self.skills.categories {
            for skill in &category.skills {
                if skill.level > 100 {
                    return Err(ContentError::Validation(format!(
                        "skill '{}' has level {} (max 100)",
                        skill.name, skill.level
                    )));
                }
            }
        }
        if let Some(current) = self
            .experience
            .items
            .iter()
            .filter(|e| e.current)
            .nth(1)
        {
            return Err(ContentError::Validation(format!(
                "only one experience entry may be current (second: {} at {})",
                current.position, current.company
            )));
        }
        for reference in &self.references.items {
            if reference.name.trim().is_empty() {
                return Err(ContentError::Validation(
                    "reference name must not be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Footer tagline, falling back to the profile headline.
    pub fn footer_tagline(&self) -> &str {
        if self.footer.tagline.is_empty() {
            &self.profile.headline
        } else {
            &self.footer.tagline
        }
    }

    /// Asset files the page links to, relative to the assets dir.
    pub fn linked_assets(&self) -> Vec<PathBuf> {
        [&self.profile.resume_path, &self.profile.photo_path]
            .into_iter()
            .map(|p| PathBuf::from(p.trim_start_matches('/')))
            .collect()
    }

    /// Linked assets that do not exist under `assets_dir`.
    pub fn missing_assets(&self, assets_dir: &Path) -> Vec<PathBuf> {
        self.linked_assets()
            .into_iter()
            .filter(|rel| !assets_dir.join(rel).is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn default_portfolio() -> Portfolio {
        Portfolio::load(None).unwrap()
    }

    fn reference(name: &str) -> Reference {
        Reference {
            name: name.to_string(),
            title: String::new(),
            company: String::new(),
            relationship: String::new(),
            period: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }

    #[test]
    fn builtin_content_parses_and_validates() {
        let p = default_portfolio();
        assert_eq!(p.profile.name, "Mausam Patel");
        assert_eq!(p.about.stats.len(), 4);
        assert_eq!(p.experience.items.len(), 5);
        assert_eq!(p.skills.categories.len(), 4);
        assert_eq!(p.tools.items.len(), 5);
        assert_eq!(p.certifications.items.len(), 6);
        assert_eq!(p.achievements.items.len(), 4);
        assert_eq!(p.education.items.len(), 3);
        assert_eq!(p.references.items.len(), 3);
    }

    #[test]
    fn builtin_budget_achievement_has_dollar_prefix() {
        let p = default_portfolio();
        let budget = p
            .achievements
            .items
            .iter()
            .find(|a| a.label == "Budget Oversight")
            .unwrap();
        assert_eq!((budget.prefix.as_str(), budget.target, budget.suffix.as_str()), ("$", 600, "K"));
    }

    #[test]
    fn optional_education_fields() {
        let p = default_portfolio();
        assert_eq!(p.education.items[0].gpa.as_deref(), Some("3.7"));
        assert_eq!(p.education.items[1].location, None);
    }

    #[test]
    fn exactly_one_current_role() {
        let p = default_portfolio();
        let current: Vec<&str> = p
            .experience
            .items
            .iter()
            .filter(|e| e.current)
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(current, vec!["Cows Ice Cream"]);
    }

    #[test]
    fn initials_from_first_and_last_word() {
        assert_eq!(reference("Rav Nagar").initials(), "RN");
        assert_eq!(reference("sejal bharadia").initials(), "SB");
        assert_eq!(reference("Mary Ann Evans").initials(), "ME");
        assert_eq!(reference("Cher").initials(), "C");
        assert_eq!(reference("").initials(), "");
    }

    #[test]
    fn tel_href_keeps_digits_only() {
        assert_eq!(tel_href("(905) 313-1039"), "tel:9053131039");
        assert_eq!(tel_href("+1 514.573.9139"), "tel:15145739139");
    }

    #[test]
    fn mailto() {
        assert_eq!(mailto_href("a@b.c"), "mailto:a@b.c");
    }

    #[test]
    fn footer_tagline_falls_back_to_headline() {
        let mut p = default_portfolio();
        p.footer.tagline.clear();
        assert_eq!(p.footer_tagline(), p.profile.headline);
    }

    #[test]
    fn missing_footer_table_uses_defaults() {
        let source = DEFAULT_CONTENT.replace(
            "[footer]\ntagline = \"Operations & Administrative Specialist\"\ncopyright_year = 2026\n",
            "",
        );
        let p = Portfolio::parse(&source).unwrap();
        assert_eq!(p.footer.copyright_year, 2026);
        assert_eq!(p.footer_tagline(), "Operations & Administrative Specialist");
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let source = DEFAULT_CONTENT.replace("[footer]", "[footer]\ncolour = \"red\"");
        assert!(matches!(Portfolio::parse(&source), Err(ContentError::Toml(_))));
    }

    #[test]
    fn empty_certifications_rejected() {
        let mut p = default_portfolio();
        p.certifications.items.clear();
        assert!(matches!(p.validate(), Err(ContentError::Validation(_))));
    }

    #[test]
    fn skill_level_above_hundred_rejected() {
        let mut p = default_portfolio();
        p.skills.categories[0].skills[0].level = 101;
        let err = p.validate().unwrap_err().to_string();
        assert!(err.contains("Front-Line Service"), "{err}");
    }

    #[test]
    fn two_current_roles_rejected() {
        let mut p = default_portfolio();
        p.experience.items[1].current = true;
        assert!(p.validate().is_err());
    }

    #[test]
    fn relative_asset_path_rejected() {
        let mut p = default_portfolio();
        p.profile.resume_path = "resume.pdf".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn bad_email_rejected() {
        let mut p = default_portfolio();
        p.profile.email = "nobody".into();
        assert!(p.validate().is_err());
    }

    // =========================================================================
    // Loading and assets
    // =========================================================================

    #[test]
    fn load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("portfolio.toml");
        fs::write(&path, DEFAULT_CONTENT.replace("Mausam Patel", "Ada Lovelace")).unwrap();
        let p = Portfolio::load(Some(&path)).unwrap();
        assert_eq!(p.profile.name, "Ada Lovelace");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = Portfolio::load(Some(&tmp.path().join("nope.toml")));
        assert!(matches!(result, Err(ContentError::Io(_))));
    }

    #[test]
    fn missing_assets_reports_absent_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("profile-photo.png"), b"png").unwrap();
        let missing = default_portfolio().missing_assets(tmp.path());
        assert_eq!(missing, vec![PathBuf::from("Mausam_Patel_Resume.pdf")]);
    }
}
