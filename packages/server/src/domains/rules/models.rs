use regex::Regex;
use tracing::debug;

use crate::common::patterns::first_match;
use crate::config::StudentProfile;
use crate::domains::identity::PersonalInfo;

/// Question text as submitted, plus its lower-cased form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    raw: String,
    lower: String,
}

impl Question {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lower = raw.to_lowercase();
        Self { raw, lower }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Case-insensitive substring test. `needle` must already be lower case.
    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|needle| self.lower.contains(needle))
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.lower.contains(needle))
    }

    /// Whole-question comparison against a lower-case phrase.
    pub fn is_exactly(&self, phrase: &str) -> bool {
        self.lower == phrase
    }
}

/// Everything a rule may look at while deciding and answering.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub question: &'a Question,
    pub personal: &'a PersonalInfo,
    pub profile: &'a StudentProfile,
    pub has_file: bool,
}

impl RuleContext<'_> {
    /// URL found in the question by `regex`, else `default`.
    pub fn url_or(&self, regex: &Regex, default: &str) -> String {
        first_match(regex, self.question.lower()).unwrap_or_else(|| default.to_string())
    }
}

/// Outcome of asking one family about one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(String),
    NoMatch,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn into_answer(self) -> Option<String> {
        match self {
            Resolution::Matched(answer) => Some(answer),
            Resolution::NoMatch => None,
        }
    }
}

/// A predicate over the question and the answer it produces when it holds.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    matches: fn(&RuleContext<'_>) -> bool,
    answer: fn(&RuleContext<'_>) -> String,
}

impl Rule {
    pub fn new(
        name: &'static str,
        matches: fn(&RuleContext<'_>) -> bool,
        answer: fn(&RuleContext<'_>) -> String,
    ) -> Self {
        Self {
            name,
            matches,
            answer,
        }
    }

    pub fn matches(&self, ctx: &RuleContext<'_>) -> bool {
        (self.matches)(ctx)
    }

    pub fn answer(&self, ctx: &RuleContext<'_>) -> String {
        (self.answer)(ctx)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Ordered rules for one question category. The first matching rule answers.
#[derive(Debug, Clone)]
pub struct Family {
    name: &'static str,
    rules: Vec<Rule>,
}

impl Family {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn resolve(&self, ctx: &RuleContext<'_>) -> Resolution {
        match self.rules.iter().find(|rule| rule.matches(ctx)) {
            Some(rule) => {
                debug!(family = self.name, rule = rule.name, "Rule matched");
                Resolution::Matched(rule.answer(ctx))
            }
            None => Resolution::NoMatch,
        }
    }
}
