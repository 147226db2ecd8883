//! Ambient viewer preferences for the screen renderer.
//!
//! Theme comes from the `theme` query parameter (which the handler echoes
//! back as a cookie) or the `theme` cookie; dark when neither is set.
//! Reduced motion comes from `motion=reduce` or the
//! `Sec-CH-Prefers-Reduced-Motion` client hint.

use axum::http::{header, HeaderMap};
use serde::Serialize;

pub const THEME_COOKIE: &str = "theme";
pub const REDUCED_MOTION_HINT: &str = "sec-ch-prefers-reduced-motion";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Query parameter wins over the cookie; unknown values are ignored.
    pub fn resolve(query: Option<&str>, headers: &HeaderMap) -> Self {
        query
            .and_then(Theme::parse)
            .or_else(|| cookie_value(headers, THEME_COOKIE).and_then(Theme::parse))
            .unwrap_or_default()
    }

    /// `Set-Cookie` value persisting this theme for a year.
    pub fn cookie(self) -> String {
        format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            self.as_str()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub fn resolve(query: Option<&str>, headers: &HeaderMap) -> Self {
        let hinted = headers
            .get(REDUCED_MOTION_HINT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("reduce"));
        let asked = query.is_some_and(|q| q.eq_ignore_ascii_case("reduce"));
        if asked || hinted {
            MotionPreference::Reduce
        } else {
            MotionPreference::NoPreference
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduce
    }
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}
