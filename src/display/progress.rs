/// ASCII bar made of lettered segments, e.g. `|FFFFRRRO      |`
pub struct ProgressBar {
    width: usize,
}

impl ProgressBar {
    /// `width` includes the two border characters
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(2),
        }
    }

    fn inner_width(&self) -> usize {
        self.width - 2
    }

    /// Horizontal rule matching the bar width: `+-----+`
    pub fn rule(&self) -> String {
        format!("+{}+", "-".repeat(self.inner_width()))
    }

    /// Render segments given as (fill character, fraction of the whole bar).
    /// Each segment is truncated to whole ticks; the total never exceeds the bar.
    pub fn render(&self, segments: &[(char, f64)]) -> String {
        let inner = self.inner_width();
        let mut filled = String::with_capacity(inner);
        let mut used = 0usize;

        for &(fill, fraction) in segments {
            if !fraction.is_finite() || fraction <= 0.0 {
                continue;
            }
            let ticks = ((fraction * inner as f64) as usize).min(inner - used);
            filled.extend(std::iter::repeat_n(fill, ticks));
            used += ticks;
        }

        format!("|{}{}|", filled, " ".repeat(inner - used))
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_segments() {
        let pb = ProgressBar::new(12);
        assert_eq!(pb.render(&[('F', 0.5), ('R', 0.2), ('O', 0.1)]), "|FFFFFRRO  |");
        assert_eq!(pb.rule(), "+----------+");
    }

    #[test]
    fn test_bar_full() {
        let pb = ProgressBar::new(12);
        assert_eq!(pb.render(&[('F', 1.0)]), "|FFFFFFFFFF|");
    }

    #[test]
    fn test_bar_empty() {
        let pb = ProgressBar::new(12);
        assert_eq!(pb.render(&[]), "|          |");
        assert_eq!(pb.render(&[('F', 0.0), ('R', -0.3), ('O', f64::NAN)]), "|          |");
    }

    #[test]
    fn test_bar_never_overflows() {
        let pb = ProgressBar::new(12);
        assert_eq!(pb.render(&[('F', 0.8), ('R', 0.8)]), "|FFFFFFFFRR|");
    }
}
