// seriate/examples/error_handling.rs

use seriate::{Failure, Pipeline, RunOutput};
use tracing::{error, info};

// 1. Define a custom application error type
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("A custom application error occurred: {0}")]
  CustomError(String),

  #[error("Validation failed for field '{0}'")]
  Validation(&'static str),
}

#[derive(Clone, Debug, Default)]
struct SignupForm {
  email: String,
  password: String,
}

fn build_pipeline() -> Pipeline<SignupForm, ExampleAppError> {
  Pipeline::<SignupForm, ExampleAppError>::empty()
    .step("check_email", |form: SignupForm| async move {
      info!("Executing check_email");
      if !form.email.contains('@') {
        return Err(Failure::Single(ExampleAppError::Validation("email")));
      }
      Ok(form)
    })
    .step("check_password", |form: SignupForm| async move {
      info!("Executing check_password");
      let mut problems = Vec::new();
      if form.password.len() < 8 {
        problems.push(ExampleAppError::Validation("password.length"));
      }
      if !form.password.chars().any(|c| c.is_ascii_digit()) {
        problems.push(ExampleAppError::Validation("password.digit"));
      }
      if problems.is_empty() {
        Ok(form)
      } else {
        // Several problems from one step
        Err(Failure::Many(problems))
      }
    })
    .step("reserve_account", |form: SignupForm| async move {
      info!("Executing reserve_account");
      if form.email.ends_with("@taken.example") {
        return Err(Failure::Single(ExampleAppError::CustomError(format!(
          "{} is already registered",
          form.email
        ))));
      }
      Ok(form)
    })
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  let pipeline = build_pipeline();
  let bad_form = SignupForm {
    email: "someone@taken.example".to_string(),
    password: "short".to_string(),
  };

  // Scenario 1: fail-fast stops at check_password and reports its failure as returned.
  info!("\nScenario 1: fail-fast");
  match pipeline.run(bad_form.clone()).await {
    Ok(output) => error!("Pipeline unexpectedly succeeded: {:?}", output),
    Err(failure) => {
      info!("Pipeline failed as expected: {}", failure);
      assert_eq!(failure.len(), 2);
    }
  }

  // Scenario 2: settle-all runs every step and aggregates every failure in order.
  info!("\nScenario 2: settle-all");
  match pipeline.run_settled(bad_form).await {
    Ok(output) => error!("Pipeline unexpectedly succeeded: {:?}", output),
    Err(Failure::Many(errors)) => {
      for (i, err) in errors.iter().enumerate() {
        info!("  failure #{}: {}", i + 1, err);
      }
      assert_eq!(errors.len(), 3);
      assert!(matches!(errors[2], ExampleAppError::CustomError(_)));
    }
    Err(Failure::Single(err)) => error!("Expected several failures, got one: {}", err),
  }

  // Scenario 3: a valid form passes through all three steps.
  info!("\nScenario 3: success");
  let good_form = SignupForm {
    email: "new@user.example".to_string(),
    password: "hunter22hunter".to_string(),
  };
  match pipeline.run(good_form).await {
    Ok(RunOutput::Many(forms)) => info!("Pipeline succeeded with {} results", forms.len()),
    other => error!("Unexpected outcome: {:?}", other),
  }
}
