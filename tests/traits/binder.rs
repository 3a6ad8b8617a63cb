use std::cell::Cell;
use std::num::ParseIntError;

use rail_binding::{binding, Binder, Bound};

#[derive(Debug, PartialEq)]
enum AppError {
    Parse(String),
    Missing(&'static str),
    Rejected(&'static str),
}

impl From<ParseIntError> for AppError {
    fn from(err: ParseIntError) -> Self {
        AppError::Parse(err.to_string())
    }
}

fn quantity(scope: &impl Binder<AppError>, raw: Option<&str>) -> Bound<u32> {
    let raw = scope.bind_some(raw, || AppError::Missing("quantity"))?;
    let n = scope.bind_from(raw.parse::<u32>())?;
    scope.ensure(n <= 100, || AppError::Rejected("quantity above 100"))?;
    Ok(n)
}

#[test]
fn bind_from_converts_error() {
    let result = binding(|scope| quantity(scope, Some("abc")));
    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[test]
fn bind_some_unwraps_or_records_error() {
    assert_eq!(binding(|scope| quantity(scope, Some("3"))), Ok(3));
    assert_eq!(binding(|scope| quantity(scope, None)), Err(AppError::Missing("quantity")));
}

#[test]
fn ensure_short_circuits_when_condition_fails() {
    assert_eq!(
        binding(|scope| quantity(scope, Some("101"))),
        Err(AppError::Rejected("quantity above 100"))
    );
}

#[test]
fn error_closures_are_lazy() {
    let calls = Cell::new(0);

    let result: Result<u8, &str> = binding(|scope| {
        let v = scope.bind_some(Some(1u8), || {
            calls.set(calls.get() + 1);
            "missing"
        })?;
        scope.ensure(v == 1, || {
            calls.set(calls.get() + 1);
            "mismatch"
        })?;
        Ok(v)
    });

    assert_eq!(result, Ok(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn ensure_on_spent_scope_short_circuits() {
    let result: Result<(), &str> = binding(|scope| {
        let _ = scope.bind::<()>(Err("first"));
        assert!(scope.ensure(true, || "unused").is_err());
        Ok(())
    });

    assert_eq!(result, Err("first"));
}
