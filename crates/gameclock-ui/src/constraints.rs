use gameclock_engine::coords::Vec2;

/// Size bounds passed from parent to child during measure.
///
/// A child may return any size in `[min, max]`; `u16::MAX` on an axis means
/// that axis is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::new(u16::MAX, u16::MAX))
    }

    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        size.max(self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_both_ways() {
        let c = Constraints { min: Vec2::new(4, 2), max: Vec2::new(20, 5) };
        assert_eq!(c.constrain(Vec2::new(1, 1)), Vec2::new(4, 2));
        assert_eq!(c.constrain(Vec2::new(40, 9)), Vec2::new(20, 5));
        assert_eq!(c.constrain(Vec2::new(10, 3)), Vec2::new(10, 3));
    }

    #[test]
    fn loose_has_zero_min() {
        let c = Constraints::loose(Vec2::new(7, 2));
        assert_eq!(c.constrain(Vec2::zero()), Vec2::zero());
        assert_eq!(c.constrain(Vec2::new(9, 9)), Vec2::new(7, 2));
    }
}
