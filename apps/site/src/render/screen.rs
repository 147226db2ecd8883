//! Screen Renderer: the on-screen résumé page.
//!
//! `ScreenRenderer::view` is the pure part: it maps a profile plus the
//! viewer's ambient preferences to a `ScreenDocument`, whose sections are in
//! fixed order (header, summary, skills, projects, experience). `render`
//! feeds that view model through the handlebars template, which escapes
//! every value.
//!
//! Unlike the export, the screen shows every project.

use handlebars::Handlebars;
use serde::Serialize;

use crate::models::resume::{Experience, Project, ResumeProfile, SkillCategory};
use crate::render::RenderError;
use crate::theme::{MotionPreference, Theme};

const TEMPLATE_NAME: &str = "resume";
const TEMPLATE: &str = include_str!("../../templates/resume.hbs");

pub const SKILLS_TITLE: &str = "Technical Skills";
pub const PROJECTS_TITLE: &str = "Featured Engineering Projects";
pub const EXPERIENCE_TITLE: &str = "Professional Experience";
pub const CONTACT_SEPARATOR: &str = "|";

/// Ambient state the page depends on besides the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenContext {
    pub theme: Theme,
    pub motion: MotionPreference,
    /// Print-mode page: opens the print dialog on load.
    pub auto_print: bool,
    pub share_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactItem {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenDocument {
    pub theme: Theme,
    pub toggle_theme: Theme,
    pub reduced_motion: bool,
    pub auto_print: bool,
    pub share_url: String,
    pub separator: &'static str,

    pub name: String,
    pub role: String,
    pub contact_rows: Vec<Vec<ContactItem>>,
    pub summary: String,

    pub skills_title: &'static str,
    pub skills: Vec<SkillCategory>,
    pub projects_title: &'static str,
    pub projects: Vec<Project>,
    pub experience_title: &'static str,
    pub experience: Vec<Experience>,
}

pub struct ScreenRenderer {
    registry: Handlebars<'static>,
}

impl ScreenRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| RenderError::Template(e.to_string()))?;
        Ok(Self { registry })
    }

    pub fn view(&self, profile: &ResumeProfile, ctx: &ScreenContext) -> ScreenDocument {
        let contact = &profile.contact;
        let link = |label: &str, href: String| ContactItem {
            label: label.to_string(),
            href: Some(href),
        };

        ScreenDocument {
            theme: ctx.theme,
            toggle_theme: match ctx.theme {
                Theme::Dark => Theme::Light,
                Theme::Light => Theme::Dark,
            },
            reduced_motion: ctx.motion.is_reduced(),
            auto_print: ctx.auto_print,
            share_url: ctx.share_url.clone(),
            separator: CONTACT_SEPARATOR,

            name: profile.name.clone(),
            role: profile.role.clone(),
            contact_rows: vec![
                vec![
                    link(&contact.email, contact.mailto()),
                    link(&contact.phone, contact.tel()),
                    ContactItem {
                        label: contact.location.clone(),
                        href: None,
                    },
                ],
                vec![
                    link(&contact.website, contact.website_url()),
                    link("GitHub", contact.github_url()),
                    link("LinkedIn", contact.linkedin_url()),
                ],
            ],
            summary: profile.summary.clone(),

            skills_title: SKILLS_TITLE,
            skills: profile.skills.clone(),
            projects_title: PROJECTS_TITLE,
            projects: profile.projects.clone(),
            experience_title: EXPERIENCE_TITLE,
            experience: profile.experience.clone(),
        }
    }

    pub fn render(&self, profile: &ResumeProfile, ctx: &ScreenContext) -> Result<String, RenderError> {
        self.registry
            .render(TEMPLATE_NAME, &self.view(profile, ctx))
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::default_profile;

    fn ctx() -> ScreenContext {
        ScreenContext {
            theme: Theme::Dark,
            motion: MotionPreference::NoPreference,
            auto_print: false,
            share_url: "https://links.dineshd.dev/resume".to_string(),
        }
    }

    fn render_default(ctx: &ScreenContext) -> String {
        ScreenRenderer::new()
            .unwrap()
            .render(&default_profile().unwrap(), ctx)
            .unwrap()
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render_default(&ctx());
        let positions: Vec<usize> = [
            "<h1>Dinesh Dawonauth</h1>",
            "class=\"summary\"",
            SKILLS_TITLE,
            PROJECTS_TITLE,
            EXPERIENCE_TITLE,
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_screen_lists_every_project_including_sweethearty() {
        let profile = default_profile().unwrap();
        let html = render_default(&ctx());
        assert!(html.contains("SweetHearty"));
        assert_eq!(html.matches("View Code</a>").count(), profile.projects.len());
    }

    #[test]
    fn test_no_education_on_screen() {
        let profile = default_profile().unwrap();
        let html = render_default(&ctx());
        assert!(!html.contains(&profile.education.institution));
    }

    #[test]
    fn test_contact_links_and_separator() {
        let html = render_default(&ctx());
        assert!(html.contains("href=\"mailto:hireme@dineshd.dev\""));
        assert!(html.contains("href=\"tel:437-879-2066\""));
        assert!(html.contains("href=\"https://github.com/dinesh-git17\""));
        assert!(html.contains("<span class=\"sep\">|</span>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut profile = default_profile().unwrap();
        profile.name = "<script>alert(1)</script>".to_string();
        let html = ScreenRenderer::new().unwrap().render(&profile, &ctx()).unwrap();
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_theme_and_motion_preferences() {
        let light = ScreenContext {
            theme: Theme::Light,
            motion: MotionPreference::Reduce,
            ..ctx()
        };
        let html = render_default(&light);
        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("<body class=\"reduce-motion\">"));
        assert!(html.contains("/resume?theme=dark"));

        let html = render_default(&ctx());
        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("<body class=\"\">"));
    }

    #[test]
    fn test_print_mode_adds_print_script() {
        assert!(!render_default(&ctx()).contains("window.print()"));
        let print = ScreenContext {
            auto_print: true,
            ..ctx()
        };
        assert!(render_default(&print).contains("window.print()"));
    }

    #[test]
    fn test_view_is_pure() {
        let renderer = ScreenRenderer::new().unwrap();
        let profile = default_profile().unwrap();
        let a = serde_json::to_value(renderer.view(&profile, &ctx())).unwrap();
        let b = serde_json::to_value(renderer.view(&profile, &ctx())).unwrap();
        assert_eq!(a, b);
    }
}
