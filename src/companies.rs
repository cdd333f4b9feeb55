//! Company names derived from episode titles
//!
//! The filter aggregator only needs a pure mapping from an episode title to
//! zero or more company names. [`CompanyExtractor`] is that seam; any
//! `Fn(&str) -> Vec<String>` satisfies it. [`TitleCompanyExtractor`] is the
//! default heuristic for titles shaped like
//! `"Guest Name | Episode topic (Role at Company, ex-Other)"`.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Pure mapping from an episode title to the companies it mentions
pub trait CompanyExtractor: Send + Sync {
    fn companies(&self, episode_title: &str) -> Vec<String>;
}

impl<F> CompanyExtractor for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn companies(&self, episode_title: &str) -> Vec<String> {
        self(episode_title)
    }
}

/// Extractor that never finds a company
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompanies;

impl CompanyExtractor for NoCompanies {
    fn companies(&self, _episode_title: &str) -> Vec<String> {
        Vec::new()
    }
}

static PIPE_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*[^(]+\(([^)]+)\)?").expect("valid regex"));
static TRAILING_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)\s*$").expect("valid regex"));
static LIST_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").expect("valid regex"));
static ROLE_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:at|of)\s+").expect("valid regex"));
static ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:cpo|ceo|cto|coo|cfo|cmo|cro)$|^(?:vp|svp|evp|head of|director|co-?founder|founder|author|professor|coach|advisor|partner|investor|executive|former|consultant)\b|^ex-",
    )
    .expect("valid regex")
});
static QUOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[\"'\u{2018}\u{2019}\u{201C}\u{201D}]+|[\"'\u{2018}\u{2019}\u{201C}\u{201D}]+$")
        .expect("valid regex")
});
static EX_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^ex-").expect("valid regex"));
static LEGAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\b(?:Inc|LLC|Ltd|Co|Corp)\.?$").expect("valid regex"));

/// Title patterns naming a company, with words the capture must not be
static TITLE_PATTERNS: LazyLock<Vec<(Regex, &'static [&'static str])>> = LazyLock::new(|| {
    const NONE: &[&str] = &[];
    const HOW_STOPWORDS: &[&str] = &["to", "i", "we", "you", "they"];
    const SCALING_STOPWORDS: &[&str] = &["your", "the", "a"];
    vec![
        (
            Regex::new(r"(?i)Behind the (?:product|scenes)[:\s]+([A-Z][A-Za-z0-9]+)").expect("valid regex"),
            NONE,
        ),
        (
            Regex::new(
                r"(?i)How\s+([A-Z][A-Za-z0-9]+)\s+(?:built|builds|created|scaled|grew|rose|transformed|became|is|does)",
            )
            .expect("valid regex"),
            HOW_STOPWORDS,
        ),
        (
            Regex::new(r"(?i)Inside\s+([A-Z][A-Za-z0-9]+)[:\s]").expect("valid regex"),
            NONE,
        ),
        (
            Regex::new(r"(?i)([A-Z][A-Za-z0-9]+)'s\s+(?:rapid|growth|unique|journey|story|culture|approach)")
                .expect("valid regex"),
            NONE,
        ),
        (
            Regex::new(r"(?i)(?:scaling|Lessons from)\s+([A-Z][A-Za-z0-9]+)").expect("valid regex"),
            SCALING_STOPWORDS,
        ),
    ]
});

const ALIASES: &[(&str, &str)] = &[
    ("fb", "Facebook"),
    ("ig", "Instagram"),
    ("yt", "YouTube"),
    ("nyt", "New York Times"),
    ("the new york times", "New York Times"),
    ("a16z", "Andreessen Horowitz"),
    ("yc", "Y Combinator"),
];

const EXCLUDED: &[&str] = &[
    "product management", "growth", "product", "growth marketing", "marketing",
    "silicon valley product group", "executive coach", "author", "speaker",
    "ceo and co-founder", "ceo and founder", "silicon valley", "companies",
    "writer", "designer", "scaling", "working", "business", "strategy",
    "business strategy", "design", "experience design", "enterprise",
    "core product", "marketplaces", "principal strategist", "serial entrepreneur",
    "group pm", "retention team", "exec coach", "product lead", "analytics",
    "the", "one", "more", "three", "two", "both", "look", "evidence", "core",
    "the framework", "thinking", "saas", "ceos", "podcast product", "new product",
    "working backwards", "thinking in bets", "obviously awesome", "play bigger",
    "make time", "shape up", "radical focus", "hacking growth", "7 powers",
    "the manager's path", "forget the funnel",
];

/// Heuristic company extraction from episode titles
#[derive(Debug, Clone)]
pub struct TitleCompanyExtractor {
    aliases: HashMap<String, String>,
    excluded: HashSet<String>,
}

impl Default for TitleCompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleCompanyExtractor {
    pub fn new() -> Self {
        Self {
            aliases: ALIASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            excluded: EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add or override an alias (matched case-insensitively)
    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.aliases.insert(alias.to_lowercase(), canonical.to_string());
        self
    }

    /// Exclude a string from ever being reported as a company
    pub fn with_exclusion(mut self, text: &str) -> Self {
        self.excluded.insert(text.to_lowercase());
        self
    }

    /// Canonical form: quotes, `ex-` and legal suffixes stripped, aliases applied
    pub fn normalize(&self, name: &str) -> String {
        let name = QUOTES.replace_all(name.trim(), "");
        let name = EX_PREFIX.replace(&name, "");
        let name = LEGAL_SUFFIX.replace(&name, "");
        let name = name.trim();
        match self.aliases.get(&name.to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => name.to_string(),
        }
    }

    fn is_excluded(&self, name: &str) -> bool {
        let lower = name.trim().to_lowercase();
        lower.chars().count() <= 2 || self.excluded.contains(&lower)
    }

    fn is_role(text: &str) -> bool {
        ROLE.is_match(&text.trim().to_lowercase())
    }

    fn from_parentheses(&self, title: &str) -> Vec<String> {
        let content = PIPE_PARENS
            .captures(title)
            .or_else(|| TRAILING_PARENS.captures(title))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        let Some(content) = content else {
            return Vec::new();
        };

        let mut found = Vec::new();
        for part in LIST_SEPARATOR.split(content) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            // "Role at Company" / "Head of X at Company": the last segment names the company
            let segments: Vec<&str> = ROLE_AT.split(part).collect();
            if segments.len() > 1 {
                if let Some(company) = segments.last() {
                    found.push(self.normalize(company));
                }
                continue;
            }
            if part.to_lowercase().starts_with("ex-") {
                found.push(self.normalize(&part[3..]));
                continue;
            }
            if Self::is_role(part) {
                continue;
            }
            found.push(self.normalize(part));
        }
        found
    }

    fn from_title_patterns(&self, title: &str) -> Vec<String> {
        TITLE_PATTERNS
            .iter()
            .filter_map(|(pattern, stopwords)| {
                let name = pattern.captures(title)?.get(1)?.as_str();
                if stopwords.contains(&name.to_lowercase().as_str()) {
                    None
                } else {
                    Some(self.normalize(name))
                }
            })
            .collect()
    }
}

impl CompanyExtractor for TitleCompanyExtractor {
    fn companies(&self, episode_title: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut companies = Vec::new();

        let candidates = self
            .from_parentheses(episode_title)
            .into_iter()
            .chain(self.from_title_patterns(episode_title));

        for name in candidates {
            if name.is_empty() || self.is_excluded(&name) || Self::is_role(&name) {
                continue;
            }
            if seen.insert(name.to_lowercase()) {
                companies.push(name);
            }
        }
        companies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(title: &str) -> Vec<String> {
        TitleCompanyExtractor::new().companies(title)
    }

    #[test]
    fn test_parenthesised_roles() {
        assert_eq!(
            extract("Jane Doe | Growth loops (Head of Growth at Airbnb, ex-Uber)"),
            vec!["Airbnb", "Uber"]
        );
    }

    #[test]
    fn test_trailing_parentheses_without_pipe() {
        assert_eq!(extract("Pricing your product (CEO of Stripe Inc.)"), vec!["Stripe"]);
    }

    #[test]
    fn test_roles_and_noise_are_skipped() {
        assert!(extract("John Smith | Leadership (CEO, Author)").is_empty());
        assert!(extract("John Smith | Leadership (Product)").is_empty());
    }

    #[test]
    fn test_aliases_and_dedup() {
        assert_eq!(
            extract("Partner | Investing (Partner at a16z, Andreessen Horowitz)"),
            vec!["Andreessen Horowitz"]
        );
    }

    #[test]
    fn test_title_patterns() {
        assert_eq!(extract("How Figma built a design community"), vec!["Figma"]);
        assert_eq!(extract("Inside Notion: the story"), vec!["Notion"]);
        assert_eq!(extract("Duolingo's growth playbook"), vec!["Duolingo"]);
        assert!(extract("How to build a roadmap").is_empty());
        assert!(extract("Lessons from scaling your team").is_empty());
    }

    #[test]
    fn test_no_companies() {
        assert!(extract("Episode with nobody in particular").is_empty());
        assert!(NoCompanies.companies("How Figma built it").is_empty());
    }

    #[test]
    fn test_closure_extractor() {
        let extractor = |title: &str| vec![title.to_uppercase()];
        assert_eq!(extractor.companies("acme"), vec!["ACME"]);
    }
}
