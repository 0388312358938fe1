// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Classification Rule Set

//! The canonical behavior → question → matcher table.
//!
//! Matching is a case-sensitive literal substring test over a small set of
//! alternatives. Rules are total: an absent or empty answer never matches.

use crate::types::{Behavior, QuestionId};

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// True when the text contains at least one of the fragments.
    AnyOf(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self {
            Self::AnyOf(fragments) => fragments.iter().any(|f| !f.is_empty() && text.contains(f)),
        }
    }

    pub fn fragments(&self) -> &'static [&'static str] {
        match self {
            Self::AnyOf(fragments) => *fragments,
        }
    }
}

// ---------------------------------------------------------------------------
// ClassificationRule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub behavior: Behavior,
    pub question: QuestionId,
    pub matcher: Matcher,
}

impl ClassificationRule {
    pub const fn new(
        behavior: Behavior,
        question: QuestionId,
        fragments: &'static [&'static str],
    ) -> Self {
        Self { behavior, question, matcher: Matcher::AnyOf(fragments) }
    }
}

// ---------------------------------------------------------------------------
// Canonical table
// ---------------------------------------------------------------------------

const CANONICAL_RULES: [ClassificationRule; Behavior::COUNT] = [
    ClassificationRule::new(Behavior::LeavePlastic, QuestionId::Q1, &["طار", "خليتو"]),
    ClassificationRule::new(Behavior::AccuseState, QuestionId::Q2, &["الدولة"]),
    ClassificationRule::new(Behavior::Fatalisme, QuestionId::Q3, &["نعم"]),
    ClassificationRule::new(Behavior::Emotional, QuestionId::Q5, &["نعم"]),
    ClassificationRule::new(Behavior::NoRecycle, QuestionId::Q6, &["عمري", "قليل"]),
    ClassificationRule::new(Behavior::PlasticBags, QuestionId::Q7, &["8", "10", "أكثر"]),
    ClassificationRule::new(Behavior::MedsTrash, QuestionId::Q9, &["زبلة"]),
    ClassificationRule::new(Behavior::SmallExcuses, QuestionId::Q10, &["مرّة", "برشا"]),
    ClassificationRule::new(Behavior::CareAction, QuestionId::Q11, &["ترميهم"]),
    ClassificationRule::new(Behavior::GlobalAwareness, QuestionId::Q8, &["صدمة", "ذنب"]),
];

/// Ordered set of rules, one per behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl RuleSet {
    pub fn canonical() -> Self {
        Self { rules: CANONICAL_RULES.to_vec() }
    }

    /// Build a custom rule set. A later rule for the same behavior replaces
    /// the earlier one, keeping the first one's position.
    pub fn from_rules(rules: impl IntoIterator<Item = ClassificationRule>) -> Self {
        let mut set = Self { rules: Vec::new() };
        for rule in rules {
            match set.rules.iter_mut().find(|r| r.behavior == rule.behavior) {
                Some(existing) => *existing = rule,
                None => set.rules.push(rule),
            }
        }
        set
    }

    pub fn rule(&self, behavior: Behavior) -> Option<&ClassificationRule> {
        self.rules.iter().find(|r| r.behavior == behavior)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassificationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
