use super::*;
use approx::assert_relative_eq;

/// Returns a single derivative for two inputs.
#[derive(Debug)]
struct WrongArity;

impl ScalarFunction for WrongArity {
    fn name(&self) -> &'static str {
        "wrong_arity"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        inputs.iter().sum()
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        Ok(vec![d_output])
    }
}

/// Records whether its context had gradient tracking enabled.
#[derive(Debug)]
struct SaveInput;

impl ScalarFunction for SaveInput {
    fn name(&self) -> &'static str {
        "save_input"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        ctx.save_for_backward(inputs.iter().copied());
        inputs[0]
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        saved_values(ctx, self.name(), 1)?;
        Ok(vec![d_output])
    }
}

#[test]
fn test_apply_records_history_in_input_order() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(2.0);
    let z = apply(SaveInput, &[&b, &a]);
    let history = z.history().expect("output of an op on leaves has a history");
    let ids: Vec<_> = history.inputs().iter().map(|s| s.unique_id()).collect();
    assert_eq!(ids, vec![b.unique_id(), a.unique_id()]);
    assert_eq!(history.function_name(), Some("save_input"));
    assert!(!history.context().no_grad());
    assert_eq!(history.context().saved_tensors(), &[2.0, 1.0]);
}

#[test]
fn test_apply_on_constants_yields_constant() {
    let z = apply(SaveInput, &[&Scalar::constant(4.0)]);
    assert!(z.is_constant());
    assert_relative_eq!(z.value(), 4.0);
}

#[test]
fn test_apply_mixed_constant_and_leaf_tracks_gradient() {
    let x = Scalar::new(1.0);
    let z = apply(SaveInput, &[&x, &Scalar::constant(3.0)]);
    assert!(!z.is_constant());
    assert!(!z.is_leaf());
    assert_eq!(z.parents().len(), 2);
}

#[test]
fn test_arity_mismatch_is_reported_by_chain_rule() {
    let z = apply(WrongArity, &[&Scalar::new(1.0), &Scalar::new(2.0)]);
    let err = z.backward().unwrap_err();
    assert_eq!(
        err,
        RevgradError::GradientArityMismatch {
            operation: "wrong_arity".to_string(),
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn test_saved_values_reports_shortfall() {
    let mut ctx = Context::new(false);
    ctx.save_for_backward([1.0]);
    assert_eq!(saved_values(&ctx, "op", 1).map(|s| s.to_vec()), Ok(vec![1.0]));
    assert_eq!(
        saved_values(&ctx, "op", 2),
        Err(RevgradError::MissingSavedValues {
            operation: "op".to_string(),
            expected: 2,
            actual: 1,
        })
    );
}
