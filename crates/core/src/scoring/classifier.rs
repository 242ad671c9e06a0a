use super::DEFAULT_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterClassifier {
    threshold: f64,
}

impl HunterClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Strictly above the threshold; a score equal to it is not a hunter.
    pub fn is_discount_hunter(&self, score: f64) -> bool {
        score > self.threshold
    }
}

impl Default for HunterClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::HunterClassifier;

    #[test]
    fn threshold_is_strict() {
        let classifier = HunterClassifier::default();

        assert!(!classifier.is_discount_hunter(0.7));
        assert!(classifier.is_discount_hunter(0.700_000_1));
        assert!(!classifier.is_discount_hunter(0.25));
    }

    #[test]
    fn alternate_threshold_is_honoured() {
        let classifier = HunterClassifier::new(0.2);

        assert!(classifier.is_discount_hunter(0.25));
        assert!(!classifier.is_discount_hunter(0.2));
        assert_eq!(classifier.threshold(), 0.2);
    }

    #[test]
    fn negative_scores_never_classify() {
        assert!(!HunterClassifier::default().is_discount_hunter(-0.45));
    }
}
