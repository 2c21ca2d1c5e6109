// seriate/examples/hooks.rs

use seriate::{Failure, Pipeline, RunOptions};
use tracing::info;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct HookError(String);

#[tokio::main]
async fn main() -> Result<(), Failure<HookError>> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Hooks Example ---");

  let pipeline = Pipeline::<f64, HookError>::empty()
    .step("fetch_price", |_: f64| async move { Ok(19.99) })
    .step("apply_tax", |price: f64| async move { Ok(price * 1.2) })
    .step("apply_discount", |price: f64| async move { Ok(price - 5.0) });

  // Round every recorded result to cents, tagging it in the log with the step it came from.
  let options = RunOptions::<f64, HookError>::fail_fast().transform_result(|value, step| {
    let rounded = (value * 100.0).round() / 100.0;
    info!(step = step.name(), index = step.index(), "{} -> {}", value, rounded);
    rounded
  });
  let prices = pipeline.run_with(0.0, options).await?.into_vec();
  info!("Prices after each step: {:?}", prices);
  assert_eq!(prices, vec![19.99, 23.99, 18.99]);

  // Keep a running total instead of handing each result forward.
  let totals = Pipeline::<f64, HookError>::empty()
    .step("a", |_: f64| async move { Ok(1.0) })
    .step("b", |_: f64| async move { Ok(2.0) })
    .step("c", |total: f64| async move { Ok(total) });
  let options = RunOptions::<f64, HookError>::fail_fast().derive_next_input(|carry, observed| {
    carry + observed.map(|v| *v).unwrap_or(0.0)
  });
  let results = totals.run_with(0.0, options).await?.into_vec();
  info!("Results with running total: {:?}", results);
  assert_eq!(results, vec![1.0, 2.0, 3.0]);

  Ok(())
}
