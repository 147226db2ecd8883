//! Print/Export Renderer: lays a `ResumeProfile` out as a fixed-page document
//! description that the PDF engine turns into bytes.
//!
//! Block order: header, summary, Technical Skills, Featured Projects,
//! Experience, Education. Projects listed in `EXPORT_EXCLUDED_PROJECTS` are
//! left out of this view only; the screen view and the data are untouched.

use crate::models::resume::{Experience, Project, ResumeProfile};

/// Project titles kept off the exported résumé. Matched exactly.
pub const EXPORT_EXCLUDED_PROJECTS: &[&str] = &["SweetHearty"];

/// Glyph placed between contact items.
pub const CONTACT_SEPARATOR: &str = "•";

/// Glyph in front of every bullet, in every section.
pub const BULLET_MARKER: &str = "›";

// ────────────────────────────────────────────────────────────────────────────
// Document description
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub title: String,
    pub author: String,
    pub blocks: Vec<PrintBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Link { label: String, href: String },
}

impl Inline {
    pub fn label(&self) -> &str {
        match self {
            Inline::Text(text) => text,
            Inline::Link { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrintBlock {
    Header {
        name: String,
        role: String,
        /// Right-aligned rows, items joined by `CONTACT_SEPARATOR`.
        contact_rows: Vec<Vec<Inline>>,
    },
    Summary(String),
    Section(Section),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

impl Section {
    /// The header text as drawn: uppercase, like every other section header.
    pub fn heading(&self) -> String {
        self.title.to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Skills(Vec<SkillRow>),
    Projects(Vec<ProjectEntry>),
    Experience(Vec<ExperienceEntry>),
    Education(EducationBlock),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletList(pub Vec<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub title: String,
    pub badge: String,
    pub description: String,
    pub bullets: BulletList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub bullets: BulletList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationBlock {
    pub institution: String,
    pub degree: String,
    pub date: String,
    pub gpa_label: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

pub const SKILLS_TITLE: &str = "Technical Skills";
pub const PROJECTS_TITLE: &str = "Featured Projects";
pub const EXPERIENCE_TITLE: &str = "Experience";
pub const EDUCATION_TITLE: &str = "Education";

/// Builds the export document. Pure; a validated profile always renders.
pub fn render(profile: &ResumeProfile) -> PrintDocument {
    let contact = &profile.contact;

    let header = PrintBlock::Header {
        name: profile.name.clone(),
        role: profile.role.clone(),
        contact_rows: vec![
            vec![
                Inline::Link {
                    label: contact.email.clone(),
                    href: contact.mailto(),
                },
                Inline::Text(contact.phone.clone()),
                Inline::Text(contact.location.clone()),
            ],
            vec![
                Inline::Link {
                    label: contact.website.clone(),
                    href: contact.website_url(),
                },
                Inline::Link {
                    label: "GitHub".to_string(),
                    href: contact.github_url(),
                },
                Inline::Link {
                    label: "LinkedIn".to_string(),
                    href: contact.linkedin_url(),
                },
            ],
        ],
    };

    let skills = profile
        .skills
        .iter()
        .map(|s| SkillRow {
            label: s.category.clone(),
            value: s.skills.clone(),
        })
        .collect();

    let projects = exported_projects(&profile.projects)
        .map(project_entry)
        .collect();

    let experience = profile.experience.iter().map(experience_entry).collect();

    let education = EducationBlock {
        institution: profile.education.institution.clone(),
        degree: profile.education.degree.clone(),
        date: profile.education.graduation_date.clone(),
        gpa_label: format!("GPA: {}", profile.education.gpa),
    };

    PrintDocument {
        title: format!("{} - Resume", profile.name),
        author: profile.name.clone(),
        blocks: vec![
            header,
            PrintBlock::Summary(profile.summary.clone()),
            section(SKILLS_TITLE, SectionBody::Skills(skills)),
            section(PROJECTS_TITLE, SectionBody::Projects(projects)),
            section(EXPERIENCE_TITLE, SectionBody::Experience(experience)),
            section(EDUCATION_TITLE, SectionBody::Education(education)),
        ],
    }
}

/// Projects that appear on the export, in their original order.
pub fn exported_projects(projects: &[Project]) -> impl Iterator<Item = &Project> {
    projects
        .iter()
        .filter(|p| !EXPORT_EXCLUDED_PROJECTS.contains(&p.title.as_str()))
}

fn section(title: &'static str, body: SectionBody) -> PrintBlock {
    PrintBlock::Section(Section { title, body })
}

fn project_entry(project: &Project) -> ProjectEntry {
    ProjectEntry {
        title: project.title.clone(),
        badge: project.tech_stack.clone(),
        description: project.description.clone(),
        bullets: BulletList(project.bullets.clone()),
    }
}

fn experience_entry(exp: &Experience) -> ExperienceEntry {
    ExperienceEntry {
        company: exp.company.clone(),
        role: exp.role.clone(),
        period: exp.period.clone(),
        bullets: BulletList(exp.bullets.clone()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
