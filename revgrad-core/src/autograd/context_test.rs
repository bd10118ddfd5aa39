use super::Context;

#[test]
fn test_save_and_read_back() {
    let mut ctx = Context::new(false);
    ctx.save_for_backward([2.0, 3.0]);
    assert!(!ctx.no_grad());
    assert_eq!(ctx.saved_tensors(), &[2.0, 3.0]);
}

#[test]
fn test_nothing_saved_is_empty() {
    let ctx: Context<f64> = Context::default();
    assert!(ctx.saved_tensors().is_empty());
}

#[test]
fn test_no_grad_suppresses_saving() {
    let mut ctx = Context::new(true);
    ctx.save_for_backward(vec![1.0, 2.0, 3.0]);
    assert!(ctx.no_grad());
    assert!(ctx.saved_tensors().is_empty(), "no_grad context must not retain values");
}

#[test]
fn test_last_write_wins() {
    let mut ctx = Context::new(false);
    ctx.save_for_backward([1.0, 2.0]);
    ctx.save_for_backward([5.0]);
    assert_eq!(ctx.saved_tensors(), &[5.0]);
}

#[test]
fn test_empty_save_clears_previous_snapshot() {
    let mut ctx: Context<f64> = Context::new(false);
    ctx.save_for_backward([4.0]);
    ctx.save_for_backward(std::iter::empty());
    assert!(ctx.saved_tensors().is_empty());
}
