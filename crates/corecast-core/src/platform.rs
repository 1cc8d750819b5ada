use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Guideline used when a platform identifier is not in the table.
pub const FALLBACK_GUIDELINE: &str = "General content format";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Twitter,
    Linkedin,
    Instagram,
    Facebook,
    Blog,
    Email,
    Reddit,
    Youtube,
    Tiktok,
    Slack,
}

impl Platform {
    /// Selection order. Numeric selections are 1-based indices into this list.
    pub const ALL: &[Platform] = &[
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Blog,
        Platform::Email,
        Platform::Reddit,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Slack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Blog => "blog",
            Platform::Email => "email",
            Platform::Reddit => "reddit",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Slack => "slack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "Linkedin",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Blog => "Blog",
            Platform::Email => "Email",
            Platform::Reddit => "Reddit",
            Platform::Youtube => "Youtube",
            Platform::Tiktok => "Tiktok",
            Platform::Slack => "Slack",
        }
    }

    /// Case-insensitive lookup by identifier.
    pub fn parse_str(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        Platform::ALL.iter().copied().find(|p| p.as_str() == s)
    }

    /// Lookup by 1-based position in [`Platform::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Platform::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-platform style guidelines. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct StyleGuide {
    guidelines: HashMap<Platform, &'static str>,
}

impl StyleGuide {
    pub fn standard() -> Self {
        let guidelines = HashMap::from([
            (
                Platform::Twitter,
                "280 character limit, casual and engaging, use hashtags sparingly",
            ),
            (
                Platform::Linkedin,
                "Professional tone, 1-3 paragraphs, focus on business value and insights",
            ),
            (
                Platform::Instagram,
                "Visual-focused caption, 2-3 paragraphs with emojis, include relevant hashtags",
            ),
            (
                Platform::Facebook,
                "Conversational and friendly, 2-4 paragraphs, encourage engagement",
            ),
            (
                Platform::Blog,
                "Long-form article (300-500 words), structured with intro/body/conclusion, informative",
            ),
            (
                Platform::Email,
                "Subject line + body, professional format, clear call-to-action",
            ),
            (
                Platform::Reddit,
                "Community-focused, authentic tone, detailed explanation with context",
            ),
            (
                Platform::Youtube,
                "Video description format, include timestamps placeholder, SEO-friendly",
            ),
            (
                Platform::Tiktok,
                "Short, punchy, trend-aware, include popular hashtags",
            ),
            (
                Platform::Slack,
                "Internal communication style, brief and to-the-point, professional but casual",
            ),
        ]);
        Self { guidelines }
    }

    pub fn guideline_for(&self, platform: Platform) -> &str {
        self.guidelines
            .get(&platform)
            .copied()
            .unwrap_or(FALLBACK_GUIDELINE)
    }

    /// Guideline for a raw identifier, falling back to [`FALLBACK_GUIDELINE`].
    pub fn guideline(&self, identifier: &str) -> &str {
        match Platform::parse_str(identifier) {
            Some(platform) => self.guideline_for(platform),
            None => FALLBACK_GUIDELINE,
        }
    }
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_has_a_guideline() {
        let guide = StyleGuide::standard();
        for &p in Platform::ALL {
            let g = guide.guideline_for(p);
            assert!(!g.is_empty(), "{p} has an empty guideline");
            assert_ne!(g, FALLBACK_GUIDELINE, "{p} fell through to the fallback");
        }
    }

    #[test]
    fn unknown_identifier_gets_fallback() {
        let guide = StyleGuide::standard();
        assert_eq!(guide.guideline("myspace"), FALLBACK_GUIDELINE);
        assert_eq!(guide.guideline(""), FALLBACK_GUIDELINE);
    }

    #[test]
    fn guideline_lookup_ignores_case() {
        let guide = StyleGuide::standard();
        assert_eq!(guide.guideline("TikTok"), guide.guideline_for(Platform::Tiktok));
    }

    #[test]
    fn parse_str_round_trip() {
        for &p in Platform::ALL {
            assert_eq!(Platform::parse_str(p.as_str()), Some(p));
            assert_eq!(Platform::parse_str(&p.as_str().to_uppercase()), Some(p));
        }
        assert_eq!(Platform::parse_str("threads"), None);
    }

    #[test]
    fn from_index_is_one_based() {
        assert_eq!(Platform::from_index(1), Some(Platform::Twitter));
        assert_eq!(Platform::from_index(10), Some(Platform::Slack));
        assert_eq!(Platform::from_index(0), None);
        assert_eq!(Platform::from_index(11), None);
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }
}
