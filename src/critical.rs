// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Critical Fact Selector

use crate::types::{Behavior, BehaviorPercentages, CriticalFact};

/// Placeholder replaced by the winning percentage.
pub const PCT_PLACEHOLDER: &str = "{pct}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactCandidate {
    pub behavior: Behavior,
    pub subject: &'static str,
    pub template: &'static str,
}

impl FactCandidate {
    pub fn render(&self, pct: u32) -> String {
        self.template.replace(PCT_PLACEHOLDER, &pct.to_string())
    }
}

/// Negative behaviors eligible for the headline, in tie-break order.
pub const CANDIDATES: [FactCandidate; 5] = [
    FactCandidate {
        behavior: Behavior::LeavePlastic,
        subject: "ترك البلاستيك",
        template: "⚠️ {pct}% منكم اعترفوا بترك البلاستيك يطير في الطبيعة ولم يهتموا بمصيره!",
    },
    FactCandidate {
        behavior: Behavior::MedsTrash,
        subject: "رمي الأدوية",
        template: "💊 {pct}% من المشاركين يرمون الأدوية والسموم في القمامة العادية، مسببة تلوث المياه.",
    },
    FactCandidate {
        behavior: Behavior::PlasticBags,
        subject: "إدمان الأكياس",
        template: "🛍️ {pct}% من الإجابات تظهر استخداماً مفرطاً وخطيراً للأكياس البلاستيكية أسبوعياً.",
    },
    FactCandidate {
        behavior: Behavior::NoRecycle,
        subject: "غياب الفرز",
        template: "🗑️ {pct}% منكم لا يقومون بفرز القمامة في منازلهم نهائياً. كل هذا يذهب للمصبات!",
    },
    FactCandidate {
        behavior: Behavior::AccuseState,
        subject: "اللوم السلبي",
        template: "🗣️ {pct}% يكتفون بلوم الدولة والمجتمع بينما لا يغيرون عاداتهم الشخصية.",
    },
];

/// Highest-percentage candidate. Only a strictly greater value displaces the
/// current pick, so ties go to the earlier candidate.
pub fn select_critical_fact(pcts: &BehaviorPercentages) -> CriticalFact {
    let mut best = &CANDIDATES[0];
    let mut best_pct = pcts.get(best.behavior);
    for candidate in &CANDIDATES[1..] {
        let pct = pcts.get(candidate.behavior);
        if pct > best_pct {
            best = candidate;
            best_pct = pct;
        }
    }

    CriticalFact {
        behavior: best.behavior,
        subject: best.subject.to_string(),
        text: best.render(best_pct),
        percentage: best_pct,
    }
}
