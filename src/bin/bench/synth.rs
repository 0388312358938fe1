// Synthetic Survey Generator — seedable answer sampling per question
// Each field is drawn from a "flagging" or "neutral" phrasing pool with a bias

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use eco_shock_engine::{QuestionId, SurveyResponse};

/// Phrasings that trip the question's rule (or a heavy usage bucket for Q7).
fn flagging(q: QuestionId) -> &'static [&'static str] {
    match q {
        QuestionId::Q1 => &["خليتو يطير", "طار وخليتو"],
        QuestionId::Q2 => &["على الدولة"],
        QuestionId::Q3 => &["نعم"],
        QuestionId::Q5 => &["نعم"],
        QuestionId::Q6 => &["عمري", "قليل"],
        QuestionId::Q7 => &["8-10", "أكثر من 10"],
        QuestionId::Q8 => &["صدمة", "نحس بالذنب"],
        QuestionId::Q9 => &["نرميهم في الزبلة"],
        QuestionId::Q10 => &["مرّة", "برشا"],
        QuestionId::Q11 => &["ترميهم"],
        QuestionId::Q4 => &["أرخص"],
    }
}

/// Phrasings that match nothing, plus light usage buckets for Q7.
fn neutral(q: QuestionId) -> &'static [&'static str] {
    match q {
        QuestionId::Q7 => &["1-3", "4-7", "ما نعرفش"],
        QuestionId::Q2 => &["على الشعب"],
        QuestionId::Q6 => &["ديما نفرز"],
        _ => &["لا", "ما نعرفش"],
    }
}

pub struct SurveyGenerator {
    rng: ChaCha8Rng,
    /// Probability a field is drawn from the flagging pool.
    bias: f64,
    /// Probability a field is left out entirely.
    blank_rate: f64,
}

impl SurveyGenerator {
    pub fn new(rng: ChaCha8Rng, bias: f64, blank_rate: f64) -> Self {
        Self {
            rng,
            bias: bias.clamp(0.0, 1.0),
            blank_rate: blank_rate.clamp(0.0, 1.0),
        }
    }

    pub fn respondent(&mut self) -> SurveyResponse {
        let mut row = SurveyResponse::new();
        for q in QuestionId::ALL {
            if self.rng.gen_bool(self.blank_rate) {
                continue;
            }
            let pool = if self.rng.gen_bool(self.bias) { flagging(q) } else { neutral(q) };
            row.set(q, pool[self.rng.gen_range(0..pool.len())]);
        }
        row
    }

    pub fn dataset(&mut self, n: usize) -> Vec<SurveyResponse> {
        (0..n).map(|_| self.respondent()).collect()
    }
}
