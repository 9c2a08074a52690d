/// Seconds each breathing phase lasts.
pub const PHASE_SECS: u64 = 4;

/// Position in the four-phase box-breathing cycle. Advanced only by the
/// timing process, never by user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreathPhase(u8);

impl BreathPhase {
    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % 4;
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Breathe In",
            2 => "Breathe Out",
            _ => "Hold",
        }
    }

    /// Visual scale of the breathing circle: expanded after the inhale,
    /// contracted after the exhale, neutral while holding.
    pub fn scale(&self) -> f32 {
        match self.0 {
            0 => 1.2,
            2 => 0.8,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_sequence() {
        let mut phase = BreathPhase::default();
        assert_eq!(phase.index(), 0);
        let mut seen = Vec::new();
        for _ in 0..6 {
            phase.advance();
            seen.push(phase.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn test_labels() {
        let mut phase = BreathPhase::default();
        assert_eq!(phase.label(), "Breathe In");
        phase.advance();
        assert_eq!(phase.label(), "Hold");
        phase.advance();
        assert_eq!(phase.label(), "Breathe Out");
        phase.advance();
        assert_eq!(phase.label(), "Hold");
    }

    #[test]
    fn test_scale_is_pure_function_of_phase() {
        let mut phase = BreathPhase::default();
        assert_eq!(phase.scale(), 1.2);
        phase.advance();
        assert_eq!(phase.scale(), 1.0);
        phase.advance();
        assert_eq!(phase.scale(), 0.8);
        phase.advance();
        assert_eq!(phase.scale(), 1.0);
    }
}
