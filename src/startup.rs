use crate::authentication::BootstrapError;
use crate::configuration::Settings;
use crate::scenarios::{Pipeline, ScenarioContext, SuiteReport, story_spoiler_pipeline};
use crate::session::Session;

/// A bootstrapped session paired with the pipeline it will drive.
pub struct Suite {
    session: Session,
    pipeline: Pipeline,
}

impl Suite {
    /// Fails before any scenario runs if no credential can be obtained.
    pub async fn build(configuration: &Settings) -> Result<Self, BootstrapError> {
        let session = Session::bootstrap(configuration).await?;
        let pipeline = story_spoiler_pipeline(&configuration.suite);
        Ok(Self { session, pipeline })
    }

    pub fn with_pipeline(session: Session, pipeline: Pipeline) -> Self {
        Self { session, pipeline }
    }

    /// Run the pipeline to the end, then tear the session down.
    #[tracing::instrument(name = "Running story spoiler suite", skip(self))]
    pub async fn run_until_finished(self) -> SuiteReport {
        let report = {
            let mut ctx = ScenarioContext::new(&self.session);
            self.pipeline.run(&mut ctx).await
        };
        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            "Suite finished"
        );
        self.session.close();
        report
    }
}
