//! plural.rs
//!
//! Russian number agreement for "years" and "days".
//!
//! The noun after a number takes one of three forms:
//!   • one  – 1, 21, 101 ...        (год, день)
//!   • few  – 2-4, 22-24 ...        (года, дня)
//!   • many – 0, 5-20, 25-30 ...    (лет, дней)
//!
//! 11 through 14 always take the "many" form even though they end in 1-4.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Years,
    Days,
}

impl Unit {
    /// Word forms in (one, few, many) order.
    fn forms(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Unit::Years => ("год", "года", "лет"),
            Unit::Days => ("день", "дня", "дней"),
        }
    }
}

/// Returns the noun form agreeing with `n`.
pub fn suffix(n: u64, unit: Unit) -> &'static str {
    let (one, few, many) = unit.forms();
    let last_digit = n % 10;
    let last_two_digits = n % 100;

    if (11..=14).contains(&last_two_digits) {
        return many;
    }

    match last_digit {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

/// `"<n> <noun>"`, e.g. `count(22, Unit::Days)` -> `"22 дня"`.
pub fn count(n: u64, unit: Unit) -> String {
    format!("{n} {}", suffix(n, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_one_few_many() {
        assert_eq!(suffix(1, Unit::Years), "год");
        assert_eq!(suffix(2, Unit::Years), "года");
        assert_eq!(suffix(3, Unit::Years), "года");
        assert_eq!(suffix(4, Unit::Years), "года");
        assert_eq!(suffix(5, Unit::Years), "лет");
        assert_eq!(suffix(0, Unit::Years), "лет");
        assert_eq!(suffix(21, Unit::Years), "год");
        assert_eq!(suffix(25, Unit::Years), "лет");
    }

    #[test]
    fn test_teens_always_many() {
        for n in [11, 12, 13, 14, 111, 112, 213, 1014] {
            assert_eq!(suffix(n, Unit::Years), "лет", "n = {n}");
            assert_eq!(suffix(n, Unit::Days), "дней", "n = {n}");
        }
    }

    #[test]
    fn test_days_forms() {
        assert_eq!(suffix(1, Unit::Days), "день");
        assert_eq!(suffix(22, Unit::Days), "дня");
        assert_eq!(suffix(100, Unit::Days), "дней");
        assert_eq!(suffix(101, Unit::Days), "день");
        assert_eq!(suffix(365, Unit::Days), "дней");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(22, Unit::Days), "22 дня");
        assert_eq!(count(18, Unit::Years), "18 лет");
    }
}
