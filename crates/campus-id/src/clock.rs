//! Current-year reference for the admission window

use chrono::Datelike;

/// Supplies the calendar year the admission window is anchored on.
///
/// Validation shifts every January, so anything that depends on the year
/// takes one of these instead of reading the wall clock directly.
pub trait YearSource {
    fn current_year(&self) -> i32;
}

/// Local wall-clock year
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl YearSource for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A pinned year, for tests and the `--year` override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<T: YearSource + ?Sized> YearSource for &T {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_year() {
        assert_eq!(FixedYear(2024).current_year(), 2024);
    }

    #[test]
    fn test_system_clock_is_plausible() {
        let year = SystemClock.current_year();
        assert!(year >= 2024);
    }
}
