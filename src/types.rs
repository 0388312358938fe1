// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Type Definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ─── Question Id ────────────────────────────────────────────────────────────

/// Logical identifier of one of the eleven survey questions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Q10,
    Q11,
}

impl QuestionId {
    pub const ALL: [QuestionId; 11] = [
        Self::Q1,
        Self::Q2,
        Self::Q3,
        Self::Q4,
        Self::Q5,
        Self::Q6,
        Self::Q7,
        Self::Q8,
        Self::Q9,
        Self::Q10,
        Self::Q11,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::Q5 => "Q5",
            Self::Q6 => "Q6",
            Self::Q7 => "Q7",
            Self::Q8 => "Q8",
            Self::Q9 => "Q9",
            Self::Q10 => "Q10",
            Self::Q11 => "Q11",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── SurveyResponse ─────────────────────────────────────────────────────────

/// One respondent's free-text answers keyed by question.
///
/// Absent fields read back as the empty string. Unknown keys in the incoming
/// JSON object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyResponse {
    answers: BTreeMap<QuestionId, String>,
}

impl SurveyResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for fixtures.
    pub fn with(mut self, question: QuestionId, answer: impl Into<String>) -> Self {
        self.answers.insert(question, answer.into());
        self
    }

    pub fn set(&mut self, question: QuestionId, answer: impl Into<String>) {
        self.answers.insert(question, answer.into());
    }

    /// Answer text for `question`, or `""` when the respondent left it out.
    pub fn answer(&self, question: QuestionId) -> &str {
        self.answers.get(&question).map(String::as_str).unwrap_or("")
    }
}

impl FromIterator<(QuestionId, String)> for SurveyResponse {
    fn from_iter<I: IntoIterator<Item = (QuestionId, String)>>(iter: I) -> Self {
        Self { answers: iter.into_iter().collect() }
    }
}

impl Serialize for SurveyResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.answers.serialize(serializer)
    }
}

/// Accepts any object, keeping only `"Q1"`..`"Q11"` keys with string values.
/// Nulls and non-string values are dropped rather than rejected.
impl<'de> Deserialize<'de> for SurveyResponse {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| {
                let question = QuestionId::ALL.into_iter().find(|q| q.as_str() == key)?;
                match value {
                    serde_json::Value::String(s) => Some((question, s)),
                    _ => None,
                }
            })
            .collect())
    }
}

// ─── Behavior ───────────────────────────────────────────────────────────────

/// A named trait a respondent either exhibits or not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Behavior {
    LeavePlastic,
    AccuseState,
    Fatalisme,
    Emotional,
    NoRecycle,
    PlasticBags,
    MedsTrash,
    SmallExcuses,
    CareAction,
    GlobalAwareness,
}

impl Behavior {
    pub const COUNT: usize = 10;

    pub const ALL: [Behavior; Self::COUNT] = [
        Self::LeavePlastic,
        Self::AccuseState,
        Self::Fatalisme,
        Self::Emotional,
        Self::NoRecycle,
        Self::PlasticBags,
        Self::MedsTrash,
        Self::SmallExcuses,
        Self::CareAction,
        Self::GlobalAwareness,
    ];

    /// Position in [`Behavior::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stable camelCase key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Self::LeavePlastic => "leavePlastic",
            Self::AccuseState => "accuseState",
            Self::Fatalisme => "fatalisme",
            Self::Emotional => "emotional",
            Self::NoRecycle => "noRecycle",
            Self::PlasticBags => "plasticBags",
            Self::MedsTrash => "medsTrash",
            Self::SmallExcuses => "smallExcuses",
            Self::CareAction => "careAction",
            Self::GlobalAwareness => "globalAwareness",
        }
    }

    /// Card title shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LeavePlastic => "ترك البلاستيك يطير",
            Self::AccuseState => "لوم الدولة",
            Self::Fatalisme => "الانهزامية",
            Self::Emotional => "التأثر العاطفي",
            Self::NoRecycle => "عدم الفرز",
            Self::PlasticBags => "استعمال الشكاير",
            Self::MedsTrash => "رمي الأدوية",
            Self::SmallExcuses => "تبرير الأخطاء",
            Self::CareAction => "التصرف الصحيح",
            Self::GlobalAwareness => "الوعي البيئي",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── Classification ─────────────────────────────────────────────────────────

/// Per-row outcome of the rule set: one flag per behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    flags: [bool; Behavior::COUNT],
}

impl Classification {
    pub fn get(&self, behavior: Behavior) -> bool {
        self.flags[behavior.index()]
    }

    pub fn set(&mut self, behavior: Behavior, value: bool) {
        self.flags[behavior.index()] = value;
    }

    pub fn matched(&self) -> impl Iterator<Item = Behavior> + '_ {
        Behavior::ALL.into_iter().filter(move |b| self.get(*b))
    }
}

// ─── BehaviorPercentages ────────────────────────────────────────────────────

/// Integer percentage in `[0, 100]` for every tracked behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorPercentages(BTreeMap<Behavior, u32>);

impl BehaviorPercentages {
    /// Every behavior present at zero.
    pub fn zeroed() -> Self {
        Self(Behavior::ALL.iter().map(|b| (*b, 0)).collect())
    }

    pub fn get(&self, behavior: Behavior) -> u32 {
        self.0.get(&behavior).copied().unwrap_or(0)
    }

    pub fn set(&mut self, behavior: Behavior, pct: u32) {
        self.0.insert(behavior, pct.min(100));
    }

    pub fn iter(&self) -> impl Iterator<Item = (Behavior, u32)> + '_ {
        self.0.iter().map(|(b, p)| (*b, *p))
    }
}

impl Default for BehaviorPercentages {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FromIterator<(Behavior, u32)> for BehaviorPercentages {
    fn from_iter<I: IntoIterator<Item = (Behavior, u32)>>(iter: I) -> Self {
        let mut pcts = Self::zeroed();
        for (behavior, pct) in iter {
            pcts.set(behavior, pct);
        }
        pcts
    }
}

// ─── CompositeMetrics ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeMetrics {
    pub eco_score: u32,
    pub action_gap: u32,
    pub negativity_index: u32,
    /// Unrounded mean of the positive-set percentages.
    #[serde(with = "rust_decimal::serde::float")]
    pub positivity_score: Decimal,
    /// Unrounded mean of the negative-set percentages.
    #[serde(with = "rust_decimal::serde::float")]
    pub negativity_score: Decimal,
}

// ─── ShockMetrics ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockMetrics {
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_bags_per_week: Decimal,
    pub yearly_units: u64,
    pub lifetime_units: u64,
    pub decomposition_years: u64,
}

impl ShockMetrics {
    /// Decomposition load in thousands of years, to one decimal ("12.3k").
    pub fn decomposition_thousands(&self) -> Decimal {
        (Decimal::from(self.decomposition_years) / Decimal::ONE_THOUSAND)
            .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }
}

// ─── CriticalFact ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalFact {
    pub behavior: Behavior,
    pub subject: String,
    pub text: String,
    pub percentage: u32,
}

// ─── MetricsResult ──────────────────────────────────────────────────────────

/// Everything the dashboard renders, produced once per `compute` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub respondents: usize,
    pub percentages: BehaviorPercentages,
    pub composite: CompositeMetrics,
    pub shock: ShockMetrics,
    pub critical_fact: CriticalFact,
}
