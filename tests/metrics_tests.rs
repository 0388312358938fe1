#![cfg(not(target_arch = "wasm32"))]

#[cfg(test)]
mod tests {
    use eco_shock_engine::*;
    use std::collections::HashMap;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Answer pool per question: matching and non-matching phrasings.
    fn answer_pool(q: QuestionId) -> &'static [&'static str] {
        match q {
            QuestionId::Q1 => &["خليتو يطير", "طار وما رجعتلوش", "جريت وراه وشديتو", ""],
            QuestionId::Q2 => &["على الدولة", "على الشعب", "الزوز"],
            QuestionId::Q3 => &["نعم", "لا", "مرات"],
            QuestionId::Q5 => &["نعم", "لا", "يمكن"],
            QuestionId::Q6 => &["نعم", "عمري", "قليل وقتاش", "لا"],
            QuestionId::Q7 => &["1-3", "4-7", "8-10", "أكثر من 10", "ما نستعملش", ""],
            QuestionId::Q8 => &["صدمة", "نحس بالذنب", "عادي"],
            QuestionId::Q9 => &["نرميهم في الزبلة", "نرجعهم للصيدلية", ""],
            QuestionId::Q10 => &["مرّة برك", "برشا", "عمري"],
            QuestionId::Q11 => &["ترميهم في بلاصتهم", "نخليهم", ""],
            _ => &["", "حاجة"],
        }
    }

    fn synthetic_rows(rng: &mut ChaCha8Rng, n: usize) -> Vec<SurveyResponse> {
        (0..n)
            .map(|_| {
                let mut row = SurveyResponse::new();
                for q in QuestionId::ALL {
                    // ~10% of fields missing entirely
                    if rng.gen_bool(0.1) {
                        continue;
                    }
                    let pool = answer_pool(q);
                    row.set(q, pool[rng.gen_range(0..pool.len())]);
                }
                row
            })
            .collect()
    }

    fn usage_row(answer: &str) -> SurveyResponse {
        SurveyResponse::new().with(QuestionId::Q7, answer)
    }

    // ========== Properties over synthetic datasets ==========

    #[test]
    fn test_percentages_always_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in [0usize, 1, 2, 3, 7, 50, 333] {
            let rows = synthetic_rows(&mut rng, n);
            let result = compute(&rows);
            assert_eq!(result.percentages.iter().count(), Behavior::COUNT);
            for (b, pct) in result.percentages.iter() {
                assert!(pct <= 100, "{} = {} for N={}", b, pct, n);
            }
            assert!(result.composite.eco_score <= 100);
            assert!(result.composite.negativity_index <= 100);
            assert!(result.composite.action_gap <= 100);
        }
    }

    #[test]
    fn test_action_gap_matches_clamped_difference() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in 0..40 {
            let rows = synthetic_rows(&mut rng, n);
            let result = compute(&rows);
            let aware = result.percentages.get(Behavior::GlobalAwareness) as i64;
            let action = result.percentages.get(Behavior::CareAction) as i64;
            assert_eq!(result.composite.action_gap as i64, (aware - action).max(0));
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let rows = synthetic_rows(&mut rng, 120);
        let first = compute(&rows);
        let second = compute(&rows);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    // ========== Concrete scenarios ==========

    #[test]
    fn test_empty_dataset_uses_fallbacks() {
        let result = compute(&[]);
        assert!(result.percentages.iter().all(|(_, p)| p == 0));
        assert_eq!(result.shock.yearly_units, 3 * 52);
        assert_eq!(result.shock.lifetime_units, 3 * 52 * 60);
        assert_eq!(result.shock.decomposition_years, 3 * 52 * 60 * 450);
    }

    #[test]
    fn test_ten_heavy_users() {
        let rows: Vec<SurveyResponse> = (0..10).map(|_| usage_row("أكثر من 10")).collect();
        let result = compute(&rows);
        let yearly = 15 * 52;
        assert_eq!(result.shock.yearly_units, yearly);
        assert_eq!(result.shock.lifetime_units, yearly * 60);
        assert_eq!(result.shock.decomposition_years, yearly * 60 * 450);
        assert_eq!(result.percentages.get(Behavior::PlasticBags), 100);
    }

    #[test]
    fn test_one_match_in_four_is_25_percent() {
        let rows = vec![
            SurveyResponse::new().with(QuestionId::Q9, "نرميهم في الزبلة"),
            SurveyResponse::new().with(QuestionId::Q9, "نرجعهم للصيدلية"),
            SurveyResponse::new(),
            SurveyResponse::new().with(QuestionId::Q9, ""),
        ];
        let result = compute(&rows);
        assert_eq!(result.percentages.get(Behavior::MedsTrash), 25);
        assert_eq!(result.critical_fact.behavior, Behavior::MedsTrash);
        assert_eq!(result.critical_fact.percentage, 25);
    }

    #[test]
    fn test_eco_score_within_one_of_formula() {
        // care 50, aware 100, emotional 50 -> pos 66.67
        // leave 50, noRecycle 100, bags 0, meds 50 -> neg 50
        let rows = vec![
            SurveyResponse::new()
                .with(QuestionId::Q11, "ترميهم")
                .with(QuestionId::Q8, "صدمة")
                .with(QuestionId::Q5, "نعم")
                .with(QuestionId::Q1, "طار")
                .with(QuestionId::Q6, "عمري")
                .with(QuestionId::Q9, "زبلة")
                .with(QuestionId::Q7, "1-3"),
            SurveyResponse::new()
                .with(QuestionId::Q8, "ذنب")
                .with(QuestionId::Q6, "قليل")
                .with(QuestionId::Q7, "1-3"),
        ];
        let result = compute(&rows);
        let p = &result.percentages;
        fn mean(p: &BehaviorPercentages, set: &[Behavior]) -> f64 {
            set.iter().map(|b| p.get(*b)).sum::<u32>() as f64 / set.len() as f64
        }
        let pos = mean(p, &[Behavior::CareAction, Behavior::GlobalAwareness, Behavior::Emotional]);
        let neg = mean(
            p,
            &[
                Behavior::LeavePlastic,
                Behavior::NoRecycle,
                Behavior::PlasticBags,
                Behavior::MedsTrash,
            ],
        );
        let expected = 0.7 * (100.0 - neg) + 0.3 * pos;
        assert!((result.composite.eco_score as f64 - expected).abs() <= 1.0);
        // 35 + 20 = 55
        assert_eq!(result.composite.eco_score, 55);
        assert_eq!(result.composite.action_gap, 50);
    }

    #[test]
    fn test_critical_fact_tie_prefers_earlier_candidate() {
        // leavePlastic and noRecycle both at 50%; leavePlastic is listed first.
        let rows = vec![
            SurveyResponse::new().with(QuestionId::Q1, "خليتو").with(QuestionId::Q6, "عمري"),
            SurveyResponse::new(),
        ];
        let result = compute(&rows);
        assert_eq!(result.percentages.get(Behavior::LeavePlastic), 50);
        assert_eq!(result.percentages.get(Behavior::NoRecycle), 50);
        assert_eq!(result.critical_fact.behavior, Behavior::LeavePlastic);
        assert_eq!(result.critical_fact.subject, "ترك البلاستيك");
        assert!(result.critical_fact.text.contains("50%"));
    }

    #[test]
    fn test_result_serializes_with_dashboard_keys() {
        let rows = vec![usage_row("8-10")];
        let json = serde_json::to_value(compute(&rows)).unwrap();
        assert_eq!(json["respondents"], 1);
        assert_eq!(json["percentages"]["plasticBags"], 100);
        assert_eq!(json["composite"]["ecoScore"], 53);
        assert_eq!(json["shock"]["yearlyUnits"], 9 * 52);
        assert_eq!(json["criticalFact"]["behavior"], "plasticBags");
        assert!(json["shock"]["avgBagsPerWeek"].is_number());
    }

    #[test]
    fn test_rows_from_json_objects() {
        let json = r#"[{"Q1":"طار","Q7":"أكثر من 10"},{"Q2":"على الدولة","Extra":"x"}]"#;
        let rows: Vec<SurveyResponse> = serde_json::from_str(json).unwrap();
        let result = compute(&rows);
        assert_eq!(result.percentages.get(Behavior::LeavePlastic), 50);
        assert_eq!(result.percentages.get(Behavior::AccuseState), 50);
        // (15 + 3) / 2 * 52 = 468
        assert_eq!(result.shock.yearly_units, 468);
    }

    #[test]
    fn test_header_keyed_records_with_ragged_rows() {
        let q6 = headers::COLUMN_HEADERS[5].0;
        let q7 = headers::COLUMN_HEADERS[6].0;
        let json = serde_json::json!([
            { q6: "عمري", q7: "8-10", "Timestamp": "2025/03/01 10:12" },
            { q6: "نعم", "__parsed_extra": ["", "شكرا"] },
        ]);
        let records: Vec<HashMap<String, serde_json::Value>> =
            serde_json::from_value(json).unwrap();
        let rows: Vec<SurveyResponse> = records.iter().map(SurveyResponse::from_record).collect();
        let result = compute(&rows);
        assert_eq!(result.respondents, 2);
        assert_eq!(result.percentages.get(Behavior::NoRecycle), 50);
        assert_eq!(result.percentages.get(Behavior::PlasticBags), 50);
        // (9 + 3) / 2 * 52 = 312
        assert_eq!(result.shock.yearly_units, 312);
    }

    #[test]
    fn test_config_override_changes_shock_only() {
        let rows: Vec<SurveyResponse> = (0..4).map(|_| usage_row("أكثر من 10")).collect();
        let mut config = MetricsConfig::default();
        config.shock.more_than_ten = 20;
        let custom = compute_with(&rows, &config).unwrap();
        let default = compute(&rows);
        assert_eq!(custom.shock.yearly_units, 20 * 52);
        assert_eq!(custom.percentages, default.percentages);
        assert_eq!(custom.composite, default.composite);
    }
}
