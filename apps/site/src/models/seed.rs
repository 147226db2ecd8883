//! Built-in résumé profile served when no `RESUME_PATH` override is configured.

use crate::models::resume::{
    ContactInfo, Education, Experience, Project, ProfileError, ResumeProfile, SkillCategory,
};

/// Returns the built-in profile, validated.
pub fn default_profile() -> Result<ResumeProfile, ProfileError> {
    let profile = ResumeProfile {
        name: "Dinesh Dawonauth".to_string(),
        role: "Full-Stack Developer / AI & Data Engineer".to_string(),
        contact: ContactInfo {
            email: "hireme@dineshd.dev".to_string(),
            phone: "437-879-2066".to_string(),
            location: "Toronto, ON".to_string(),
            website: "dineshd.dev".to_string(),
            github: "github.com/dinesh-git17".to_string(),
            linkedin: "linkedin.com/in/dineshsdawonauth".to_string(),
        },
        summary: "Senior Software Engineer and Data Scientist with 5+ years of experience \
                  engineering scalable systems and data-driven applications. Proven expertise \
                  in full-stack development (TypeScript, Python) and AI orchestration. Skilled \
                  in translating complex business needs into high-performance technical \
                  solutions, having reduced manual reporting time by 40% and improved data \
                  processing efficiency by 25% in previous enterprise roles."
            .to_string(),
        skills: vec![
            skill(
                "Languages",
                "Python (Pandas, NumPy), TypeScript, JavaScript, SQL (PostgreSQL, MySQL), R, HTML/CSS",
            ),
            skill(
                "Frontend & UI",
                "React, Next.js, Tailwind CSS, Framer Motion, TUI (Textual), Tableau, PowerBI",
            ),
            skill(
                "Backend & AI",
                "Node.js, REST APIs, Supabase, Redis, LLM Integration (OpenAI, Anthropic), ETL Pipelines",
            ),
            skill("Tools", "Git, Docker, Linux, Excel (Advanced), Agile/Scrum"),
        ],
        projects: vec![
            Project {
                title: "Holiday.EXE".to_string(),
                tech_stack: "TypeScript, Next.js, Capacitor, Framer Motion".to_string(),
                description: "A high-performance, offline-first interactive iOS app combining \
                              terminal simulation, gaming, and cinematic storytelling."
                    .to_string(),
                bullets: lines(&[
                    "Engineered a 60fps mobile-native experience using Capacitor and Next.js, featuring custom delta-time physics and optimized parallax rendering.",
                    "Implemented a complex state machine using Zustand to manage biometric auth simulation, mini-games, and terminal encryption puzzles.",
                    "Designed a polished \"love letter\" software architecture with strict TypeScript safety and zero-latency transition effects.",
                ]),
                code_url: "https://github.com/dinesh-git17/christmas-gift".to_string(),
            },
            Project {
                title: "Debate Lab".to_string(),
                tech_stack: "TypeScript, Next.js, AI SDKs".to_string(),
                description:
                    "An AI orchestration platform for structured debates between Large Language Models."
                        .to_string(),
                bullets: lines(&[
                    "Identified the need for transparent AI model reasoning; built a platform to facilitate unbiased comparisons.",
                    "Orchestrated complex multi-agent flows using real-time streaming to visualize logic paths and debate outcomes.",
                    "Resulted in a reusable benchmarking tool for testing and validating LLM argumentation capabilities.",
                ]),
                code_url: "https://github.com/dinesh-git17/debate-lab".to_string(),
            },
            Project {
                title: "PassFx".to_string(),
                tech_stack: "Python, Cryptography, TUI".to_string(),
                description: "A zero-knowledge, offline-first terminal-based password manager."
                    .to_string(),
                bullets: lines(&[
                    "Built a secure, local-only secret manager using strong cryptographic primitives and Python's Textual framework.",
                    "Designed an intuitive TUI (Text User Interface) to provide a premium developer experience without network dependencies.",
                    "Eliminated external attack vectors by enforcing a strict offline-first architecture for sensitive data storage.",
                ]),
                code_url: "https://github.com/dinesh-git17/passfx".to_string(),
            },
            Project {
                title: "SweetHearty".to_string(),
                tech_stack: "Full Stack Web".to_string(),
                description: "A gamified personal productivity and goal-tracking application."
                    .to_string(),
                bullets: lines(&[
                    "Engineered a progress planner with gamification logic and habit tracking to solve user motivation retention issues.",
                    "Implemented full-stack logic for tracking user streaks and awarding badges, improving user consistency.",
                ]),
                code_url: "https://github.com/dinesh-git17/my-progress-planner".to_string(),
            },
        ],
        experience: vec![
            Experience {
                company: "Meridian Credit Union".to_string(),
                role: "Data Scientist".to_string(),
                period: "Apr 2024 – Present".to_string(),
                bullets: lines(&[
                    "Architected automated data pipelines and dashboards serving 300K+ members, reducing manual reporting time by 40%.",
                    "Collaborated with engineering to translate business requirements into scalable analytical solutions.",
                    "Identified operational bottlenecks through trend analysis, implementing optimizations that improved efficiency by 25%.",
                ]),
            },
            Experience {
                company: "Slice Labs".to_string(),
                role: "Junior Data Scientist".to_string(),
                period: "Apr 2021 – Jan 2023".to_string(),
                bullets: lines(&[
                    "Developed interactive dashboards using Tableau and SQL to drive executive decision-making.",
                    "Implemented robust data validation scripts, improving data accuracy by 35% across the platform.",
                    "Utilized SQL for complex query optimization and ad hoc analysis to support operational teams.",
                ]),
            },
            Experience {
                company: "Carleton University".to_string(),
                role: "Research & Data Assistant".to_string(),
                period: "Sep 2019 – Jul 2023".to_string(),
                bullets: lines(&[
                    "Analyzed large datasets consisting of 30K+ records using SQL and Python to support institutional reporting.",
                ]),
            },
        ],
        education: Education {
            institution: "Carleton University, Ottawa".to_string(),
            degree: "Bachelor of Mathematics, Statistics".to_string(),
            graduation_date: "Jun 2023".to_string(),
            gpa: "3.8/4.0".to_string(),
        },
    };

    profile.validate()?;
    Ok(profile)
}

fn skill(category: &str, skills: &str) -> SkillCategory {
    SkillCategory {
        category: category.to_string(),
        skills: skills.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
