// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Survey Export Column Mapping

//! Literal column headers of the published survey sheet and their question ids.

use std::collections::HashMap;

use serde_json::Value;

use crate::types::{QuestionId, SurveyResponse};

pub const COLUMN_HEADERS: [(&str, QuestionId); 11] = [
    ("آخر مرّة كيّس بلاستيك طار من يدك أو من سيارتك… شنوّة عملت؟", QuestionId::Q1),
    ("كي تمشي للبحر وتلقى البلاستيك في الماء، تتغشّ على الدولة ولا على الشعب؟", QuestionId::Q2),
    ("هل عمرك قلت “موش أنا إلي باش نصلّح الدنيا”؟", QuestionId::Q3),
    ("وقت تشري حاجة بلاستيك في عوض حاجة قابلة لإعادة الاستعمال، علاش؟", QuestionId::Q4),
    ("كي تشوف فيديو سلحفاة تختنق بسبب البلاستيك… هل تغيّر عاداتك؟", QuestionId::Q5),
    ("هل تفرّز الزبلة في دارك؟", QuestionId::Q6),
    ("قدّاش تستعمل من شكارة بلاستيك في الأسبوع؟", QuestionId::Q7),
    ("لو نقولّك إنك تخلّف أكثر من 20,000 قطعة بلاستيك طول حياتك… كيفاش تحسّ؟", QuestionId::Q8),
    ("شنوّة تعمل بالأدوية القديمة أو منتهية الصلوحية؟", QuestionId::Q9),
    ("قدّاش من مرّة قلت: \"ما يهمّش، حاجة صغيرة\"؟", QuestionId::Q10),
    ("\" كي يبدا عند دبابس ولا بلاستيك \"", QuestionId::Q11),
];

/// Question id for a column header. Surrounding whitespace is ignored.
pub fn question_for_header(header: &str) -> Option<QuestionId> {
    let header = header.trim();
    COLUMN_HEADERS
        .iter()
        .find(|(h, _)| h.trim() == header)
        .map(|(_, q)| *q)
}

/// String cell for `header`. An exact key wins; otherwise the smallest key
/// that trims to the same header. Non-string cells count as absent.
fn cell<'a>(record: &'a HashMap<String, Value>, header: &str) -> Option<&'a str> {
    record.get(header).and_then(Value::as_str).or_else(|| {
        let header = header.trim();
        record
            .iter()
            .filter(|(key, _)| key.trim() == header)
            .filter_map(|(key, value)| value.as_str().map(|s| (key, s)))
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, s)| s)
    })
}

impl SurveyResponse {
    /// Build a response from a header-keyed row of the survey export.
    /// Columns that are not survey questions (timestamps, `__parsed_extra`
    /// etc.) are skipped.
    pub fn from_record(record: &HashMap<String, Value>) -> Self {
        COLUMN_HEADERS
            .iter()
            .filter_map(|(header, q)| cell(record, header).map(|a| (*q, a.to_string())))
            .collect()
    }
}
