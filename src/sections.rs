//! The section registry: every anchorable region of the page, in order.
//!
//! Section ids double as in-page anchors (`#about`) and as the keys the
//! scroll tracker compares against, so they must match the rendered `id`
//! attributes exactly.

/// An anchorable page region and its navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

pub static SECTIONS: [SectionDescriptor; 10] = [
    SectionDescriptor { id: "hero", label: "Home" },
    SectionDescriptor { id: "about", label: "About" },
    SectionDescriptor { id: "experience", label: "Experience" },
    SectionDescriptor { id: "skills", label: "Skills" },
    SectionDescriptor { id: "tools", label: "Tools" },
    SectionDescriptor { id: "certifications", label: "Certifications" },
    SectionDescriptor { id: "achievements", label: "Achievements" },
    SectionDescriptor { id: "education", label: "Education" },
    SectionDescriptor { id: "references", label: "References" },
    SectionDescriptor { id: "contact", label: "Contact" },
];

/// Sections linked from the navigation bar and footer.
pub const NAV_LINK_IDS: [&str; 5] = ["about", "experience", "skills", "certifications", "contact"];

/// The landing section; it reveals as soon as the page mounts.
pub const HERO_ID: &str = "hero";

/// The footer reveals like a section but is not a navigation target.
pub const FOOTER_ID: &str = "footer";

pub fn find(id: &str) -> Option<&'static SectionDescriptor> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Descriptors for [`NAV_LINK_IDS`], in navigation order.
pub fn nav_links() -> impl Iterator<Item = &'static SectionDescriptor> {
    NAV_LINK_IDS.iter().filter_map(|id| find(id))
}

/// `#id` href for a section.
pub fn anchor(id: &str) -> String {
    format!("#{id}")
}

/// Whether `id` names a registry section or the footer.
pub fn is_region(id: &str) -> bool {
    id == FOOTER_ID || find(id).is_some()
}
