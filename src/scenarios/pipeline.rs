use super::{Scenario, ScenarioContext, ScenarioFailure};
use tracing::Instrument;

/// A declared sequence of scenarios. They run in the order they were added.
#[derive(Default)]
pub struct Pipeline {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, scenario: impl Scenario + 'static) -> Self {
        self.scenarios.push(Box::new(scenario));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    /// Run every scenario once, in order. A failing scenario is recorded and
    /// the run moves on to the next one.
    pub async fn run(&self, ctx: &mut ScenarioContext<'_>) -> SuiteReport {
        let mut report = SuiteReport::default();
        for scenario in &self.scenarios {
            let name = scenario.name();
            let span = tracing::info_span!("Running scenario", scenario = name);
            let result = scenario.run(ctx).instrument(span).await;
            match &result {
                Ok(()) => tracing::info!(scenario = name, "Scenario passed"),
                Err(e) => tracing::error!(
                    scenario = name,
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Scenario failed"
                ),
            }
            report.outcomes.push(ScenarioOutcome { name, result });
        }
        report
    }
}

#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub result: Result<(), ScenarioFailure>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "{} ... ok", outcome.name)?,
                Err(e) => writeln!(f, "{} ... FAILED: {}", outcome.name, e)?,
            }
        }
        write!(
            f,
            "\nresult: {}. {} passed; {} failed",
            if self.is_success() { "ok" } else { "FAILED" },
            self.passed(),
            self.failed()
        )
    }
}
