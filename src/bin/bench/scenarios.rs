// Scenario Definitions — dataset shapes exercised by the bench runner

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub respondents: usize,
    /// Probability each answer is drawn from the flagging pool.
    pub bias: f64,
    /// Probability each answer is missing.
    pub blank_rate: f64,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario { name: "EMPTY", label: "Empty dataset (N=0)", respondents: 0, bias: 0.5, blank_rate: 0.0 },
        Scenario { name: "SINGLE", label: "Single respondent", respondents: 1, bias: 0.5, blank_rate: 0.0 },
        Scenario { name: "CLASSROOM", label: "Classroom (N=30)", respondents: 30, bias: 0.5, blank_rate: 0.05 },
        Scenario { name: "SPARSE", label: "Mostly blank answers", respondents: 100, bias: 0.5, blank_rate: 0.8 },
        Scenario { name: "ALL_NEGATIVE", label: "Every answer flags", respondents: 200, bias: 1.0, blank_rate: 0.0 },
        Scenario { name: "ALL_NEUTRAL", label: "No answer flags", respondents: 200, bias: 0.0, blank_rate: 0.0 },
        Scenario { name: "CAMPUS", label: "Campus survey (N=5000)", respondents: 5_000, bias: 0.35, blank_rate: 0.1 },
        Scenario { name: "NATIONAL", label: "National panel (N=100k)", respondents: 100_000, bias: 0.35, blank_rate: 0.1 },
    ]
}
