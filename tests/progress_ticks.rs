use stock_dashboard_wasm::domain::progress::{
    LoadingProgress, OVERLAY_SAFETY_MS, PROGRESS_TICK_MS,
};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn percentage_after_n_ticks() {
    for n in 0..=10u32 {
        let mut progress = LoadingProgress::new();
        for _ in 0..n {
            progress.tick();
        }
        assert_eq!(u32::from(progress.percent()), (n * 10).min(100));
        assert_eq!(progress.label(), format!("{}%", (n * 10).min(100)));
    }
}

#[wasm_bindgen_test]
fn completes_once_at_hundred_and_stays() {
    let mut progress = LoadingProgress::new();
    let completed_at = (1..=12)
        .find(|_| {
            progress.tick();
            progress.is_complete()
        })
        .unwrap();
    assert_eq!(completed_at, 10);
    progress.tick();
    assert_eq!(progress.percent(), 100);
}

#[wasm_bindgen_test]
fn safety_timeout_outlasts_full_progress() {
    // The bar needs 10 ticks of 500 ms; the overlay safety net must fire
    // no earlier than that
    assert!(OVERLAY_SAFETY_MS >= 10 * PROGRESS_TICK_MS);
    assert_eq!(OVERLAY_SAFETY_MS, 15_000);
}
