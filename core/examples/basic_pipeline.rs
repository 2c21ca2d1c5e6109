// seriate/examples/basic_pipeline.rs

use seriate::{Failure, Pipeline, RunOutput};
use tracing::info;

// 1. Define an Error type for the steps
#[derive(Debug, thiserror::Error)]
enum BasicError {
  #[error("counter overflowed at step '{0}'")]
  Overflow(&'static str),
}

#[tokio::main]
async fn main() -> Result<(), Failure<BasicError>> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipeline Example ---");

  // 2. Build the pipeline: each step receives the previous step's result.
  let pipeline = Pipeline::<i32, BasicError>::empty()
    .step("step_alpha", |counter: i32| async move {
      let next = counter.checked_add(1).ok_or(BasicError::Overflow("step_alpha"))?;
      info!("Alpha executed: counter = {}", next);
      Ok::<_, Failure<BasicError>>(next)
    })
    .step("step_beta", |counter: i32| async move {
      let next = counter.checked_mul(2).ok_or(BasicError::Overflow("step_beta"))?;
      info!("Beta executed: counter = {}", next);
      Ok::<_, Failure<BasicError>>(next)
    })
    .step("step_gamma", |counter: i32| async move {
      info!("Gamma executed: counter = {}", counter - 1);
      Ok(counter - 1)
    });

  // 3. Run it, starting the counter at 5
  info!("Starting pipeline execution...");
  let output = pipeline.run(5).await?; // Propagate the step failure if any

  // 4. Inspect the results: three steps, so three results
  match &output {
    RunOutput::Many(values) => info!("Pipeline completed with results {:?}", values),
    other => info!("Pipeline completed with {:?}", other),
  }

  // Expected: (5+1)*2 - 1 = 11
  assert_eq!(output.into_vec(), vec![6, 12, 11]);

  // A one-step pipeline hands back its single result directly.
  let single = Pipeline::<i32, BasicError>::empty()
    .step("only", |x: i32| async move { Ok(x * 10) })
    .run(4)
    .await?;
  assert_eq!(single, RunOutput::Single(40));

  Ok(())
}
