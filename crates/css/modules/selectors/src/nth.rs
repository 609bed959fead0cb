//! `an+b` arguments of the `:nth-*` pseudo-classes.

/// The formula `a*n + b` for some non-negative integer `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nth {
    /// The step `a`.
    pub step: i32,
    /// The offset `b`.
    pub offset: i32,
}

impl Nth {
    #[inline]
    pub const fn new(step: i32, offset: i32) -> Self {
        Self { step, offset }
    }

    /// `odd` is `2n+1`.
    #[inline]
    pub const fn odd() -> Self {
        Self::new(2, 1)
    }

    /// `even` is `2n`.
    #[inline]
    pub const fn even() -> Self {
        Self::new(2, 0)
    }

    /// Test a 1-based position among siblings.
    pub fn matches(self, index: usize) -> bool {
        let Ok(index) = i64::try_from(index) else {
            return false;
        };
        let step = i64::from(self.step);
        let offset = i64::from(self.offset);
        if step == 0 {
            return index == offset;
        }
        let diff = index - offset;
        // n = diff / step must be a non-negative integer.
        diff % step == 0 && diff / step >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::Nth;

    #[test]
    fn odd_and_even() {
        assert!(Nth::odd().matches(1));
        assert!(!Nth::odd().matches(2));
        assert!(Nth::odd().matches(3));
        assert!(Nth::even().matches(2));
        assert!(!Nth::even().matches(1));
    }

    #[test]
    fn negative_step_selects_first_few() {
        // -n+3 picks positions 1, 2 and 3.
        let first_three = Nth::new(-1, 3);
        assert!(first_three.matches(1));
        assert!(first_three.matches(3));
        assert!(!first_three.matches(4));
    }

    #[test]
    fn constant_only() {
        assert!(Nth::new(0, 4).matches(4));
        assert!(!Nth::new(0, 4).matches(8));
    }
}
