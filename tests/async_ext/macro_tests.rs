//! Tests for the `binding_async!` shorthand.

use std::time::Duration;

use rail_binding::prelude_async::*;

async fn provide(n: i32) -> Result<i32, &'static str> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if n >= 0 {
        Ok(n)
    } else {
        Err("negative")
    }
}

#[tokio::test]
async fn binding_async_macro_wraps_final_value() {
    let result = binding_async!(|scope| {
        let x = scope.bind(provide(1).await)?;
        let y = scope.bind(provide(2).await)?;
        x + y
    })
    .await;

    assert_eq!(result, Ok(3));
}

#[tokio::test]
async fn binding_async_macro_short_circuits() {
    let result = binding_async!(|scope| {
        let x = scope.bind(provide(1).await)?;
        let y = scope.bind(provide(-1).await)?;
        let z = scope.bind(provide(3).await)?;
        x + y + z
    })
    .await;

    assert_eq!(result, Err("negative"));
}

#[tokio::test]
async fn binding_async_function_and_macro_agree() {
    let from_fn = binding_async(|scope| async move { scope.bind(provide(4).await) }).await;
    let from_macro = binding_async!(|scope| scope.bind(provide(4).await)?).await;

    assert_eq!(from_fn, from_macro);
}
