// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Response Classifier

use crate::rules::RuleSet;
use crate::types::{Classification, SurveyResponse};

/// Apply every rule to one row. Behaviors without a rule stay `false`.
pub fn classify(row: &SurveyResponse, rules: &RuleSet) -> Classification {
    let mut out = Classification::default();
    for rule in rules.iter() {
        out.set(rule.behavior, rule.matcher.matches(row.answer(rule.question)));
    }
    out
}

/// Classify every row in input order.
pub fn classify_all(rows: &[SurveyResponse], rules: &RuleSet) -> Vec<Classification> {
    rows.iter().map(|row| classify(row, rules)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ClassificationRule;
    use crate::types::{Behavior, QuestionId};

    #[test]
    fn test_empty_row_matches_nothing() {
        let c = classify(&SurveyResponse::new(), &RuleSet::canonical());
        assert_eq!(c.matched().count(), 0);
    }

    #[test]
    fn test_one_row_counts_toward_several_behaviors() {
        let row = SurveyResponse::new()
            .with(QuestionId::Q1, "خليتو يطير")
            .with(QuestionId::Q6, "عمري")
            .with(QuestionId::Q7, "أكثر من 10")
            .with(QuestionId::Q11, "ترميهم في الزبلة");
        let c = classify(&row, &RuleSet::canonical());
        let matched: Vec<Behavior> = c.matched().collect();
        assert_eq!(
            matched,
            vec![
                Behavior::LeavePlastic,
                Behavior::NoRecycle,
                Behavior::PlasticBags,
                Behavior::CareAction,
            ]
        );
    }

    #[test]
    fn test_rule_reads_only_its_own_question() {
        // "نعم" under Q3 is fatalisme, not emotional (Q5).
        let row = SurveyResponse::new().with(QuestionId::Q3, "نعم");
        let c = classify(&row, &RuleSet::canonical());
        assert!(c.get(Behavior::Fatalisme));
        assert!(!c.get(Behavior::Emotional));
    }

    #[test]
    fn test_garbled_text_is_non_match() {
        let row = SurveyResponse::new()
            .with(QuestionId::Q2, "???")
            .with(QuestionId::Q9, "\u{0}\u{fffd}");
        let c = classify(&row, &RuleSet::canonical());
        assert!(!c.get(Behavior::AccuseState));
        assert!(!c.get(Behavior::MedsTrash));
    }

    #[test]
    fn test_missing_rule_leaves_behavior_false() {
        let rules = RuleSet::from_rules([ClassificationRule::new(
            Behavior::Fatalisme,
            QuestionId::Q3,
            &["نعم"],
        )]);
        let row = SurveyResponse::new()
            .with(QuestionId::Q3, "نعم")
            .with(QuestionId::Q1, "طار");
        let c = classify(&row, &rules);
        assert!(c.get(Behavior::Fatalisme));
        assert!(!c.get(Behavior::LeavePlastic));
    }
}
