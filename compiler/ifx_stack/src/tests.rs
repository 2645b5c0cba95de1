use super::*;

#[test]
fn passes_through_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 7), 7);
    let ok: Result<u8, &str> = ensure_sufficient_stack(|| Ok(1));
    assert_eq!(ok, Ok(1));
}

#[test]
fn nested_dispatch_chain_does_not_overflow() {
    // Mimics a register that dispatches to the next register, 200k deep.
    fn dispatch(remaining: u32, trail: &mut Vec<u32>) -> u32 {
        ensure_sufficient_stack(|| {
            if remaining == 0 {
                return 0;
            }
            if remaining % 50_000 == 0 {
                trail.push(remaining);
            }
            dispatch(remaining - 1, trail) + 1
        })
    }

    let mut trail = Vec::new();
    assert_eq!(dispatch(200_000, &mut trail), 200_000);
    assert_eq!(trail, vec![200_000, 150_000, 100_000, 50_000]);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn remaining_stack_is_reported_on_native() {
    let before = remaining_stack();
    assert!(before.is_some_and(|bytes| bytes > 0));
}
