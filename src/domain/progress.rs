/// Pure model behind the cosmetic startup progress bar.
///
/// The bar is purely time-driven: every tick adds 10 percent, capped at 100.
/// It is never coupled to actual network readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u8,
}

pub const PROGRESS_TICK_MS: u32 = 500;
pub const OVERLAY_SAFETY_MS: u32 = 15_000;
const PERCENT_PER_TICK: u8 = 10;

impl LoadingProgress {
    pub fn new() -> Self {
        Self { percent: 0 }
    }

    /// Advance one timer tick. Returns the new percentage.
    pub fn tick(&mut self) -> u8 {
        self.percent = (self.percent + PERCENT_PER_TICK).min(100);
        self.percent
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Once complete the interval is cancelled and the overlay hidden.
    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// Label written as both width style and inner text of the bar.
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn ticks_advance_by_ten() {
        let mut progress = LoadingProgress::new();
        assert_eq!(progress.percent(), 0);
        assert_eq!(progress.tick(), 10);
        assert_eq!(progress.tick(), 20);
        assert_eq!(progress.label(), "20%");
        assert!(!progress.is_complete());
    }

    #[test]
    fn completes_exactly_at_hundred() {
        let mut progress = LoadingProgress::new();
        for _ in 0..9 {
            progress.tick();
        }
        assert!(!progress.is_complete());
        assert_eq!(progress.tick(), 100);
        assert!(progress.is_complete());
        // Further ticks stay capped
        assert_eq!(progress.tick(), 100);
    }

    #[quickcheck]
    fn percent_after_n_ticks_is_min_hundred(n: u8) -> bool {
        let n = n % 32;
        let mut progress = LoadingProgress::new();
        for _ in 0..n {
            progress.tick();
        }
        u32::from(progress.percent()) == (u32::from(n) * 10).min(100)
    }
}
