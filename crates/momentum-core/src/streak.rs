/// Display-only streak counter. No in-dashboard action updates it; an
/// update rule would need day-boundary tracking that is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub days: u32,
}

impl Default for Streak {
    fn default() -> Self {
        Self { days: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_streak() {
        assert_eq!(Streak::default().days, 3);
    }
}
