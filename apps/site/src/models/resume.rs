//! Résumé data model: the one record every renderer reads from.
//!
//! The profile is built once at startup (either the built-in seed or a JSON
//! override), validated, and then shared read-only behind an `Arc`.
//! List order is display order everywhere; nothing here sorts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("{section} entry '{title}' has no bullets")]
    NoBullets { section: &'static str, title: String },

    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Contact block. `website`, `github` and `linkedin` are stored without a
/// scheme (`github.com/...`); renderers add `https://`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn website_url(&self) -> String {
        https(&self.website)
    }

    pub fn github_url(&self) -> String {
        https(&self.github)
    }

    pub fn linkedin_url(&self) -> String {
        https(&self.linkedin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    /// Comma-separated skill list, rendered verbatim.
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech_stack: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub code_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub graduation_date: String,
    /// Fixed-format display string such as `3.8/4.0`. Never parsed.
    pub gpa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub role: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Education,
}

impl ResumeProfile {
    /// Checks the invariants renderers rely on.
    ///
    /// Every project and experience entry must carry at least one bullet, and
    /// the identifying fields must be non-empty. Renderers never see a profile
    /// that fails this check, so they cannot silently emit a blank section.
    pub fn validate(&self) -> Result<(), ProfileError> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("contact.email", &self.contact.email)?;
        require("education.institution", &self.education.institution)?;

        for project in &self.projects {
            require("projects[].title", &project.title)?;
            if project.bullets.is_empty() {
                return Err(ProfileError::NoBullets {
                    section: "project",
                    title: project.title.clone(),
                });
            }
        }

        for exp in &self.experience {
            require("experience[].company", &exp.company)?;
            if exp.bullets.is_empty() {
                return Err(ProfileError::NoBullets {
                    section: "experience",
                    title: exp.company.clone(),
                });
            }
        }

        Ok(())
    }

    /// Loads a profile from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProfileError> {
        let profile: ResumeProfile = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn require(field: &str, value: &str) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        Err(ProfileError::MissingField(field.to_string()))
    } else {
        Ok(())
    }
}

fn https(host_path: &str) -> String {
    format!("https://{host_path}")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::default_profile;

    #[test]
    fn test_seed_profile_is_valid() {
        let profile = default_profile().unwrap();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.projects.len(), 4);
        assert_eq!(profile.experience.len(), 3);
    }

    #[test]
    fn test_project_without_bullets_rejected() {
        let mut profile = default_profile().unwrap();
        profile.projects[1].bullets.clear();
        let err = profile.validate().unwrap_err();
        assert!(
            matches!(err, ProfileError::NoBullets { section: "project", ref title } if title == "Debate Lab"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_experience_without_bullets_rejected() {
        let mut profile = default_profile().unwrap();
        profile.experience[2].bullets.clear();
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::NoBullets {
                section: "experience",
                ..
            })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut profile = default_profile().unwrap();
        profile.name = "   ".to_string();
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::MissingField(ref f)) if f == "name"
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let profile = default_profile().unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let loaded = ResumeProfile::from_json_str(&json).unwrap();
        let titles: Vec<&str> = loaded.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Holiday.EXE", "Debate Lab", "PassFx", "SweetHearty"]
        );
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_json_missing_education_fails() {
        let mut value = serde_json::to_value(default_profile().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("education");
        let result = ResumeProfile::from_json_str(&value.to_string());
        assert!(matches!(result, Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_from_json_file_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        let mut profile = default_profile().unwrap();
        profile.experience[0].bullets.clear();
        std::fs::write(&path, serde_json::to_string(&profile).unwrap()).unwrap();

        assert!(matches!(
            ResumeProfile::from_json_file(&path),
            Err(ProfileError::NoBullets { .. })
        ));
        assert!(matches!(
            ResumeProfile::from_json_file(&dir.path().join("missing.json")),
            Err(ProfileError::Io(_))
        ));
    }

    #[test]
    fn test_contact_urls() {
        let contact = default_profile().unwrap().contact;
        assert_eq!(contact.mailto(), "mailto:hireme@dineshd.dev");
        assert_eq!(contact.github_url(), "https://github.com/dinesh-git17");
        assert_eq!(contact.website_url(), "https://dineshd.dev");
    }
}
