use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::parallax::Easing;

pub const DEFAULT_DURATION_SECS: f64 = 2.0;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("static pattern compiles"));

/// A stat like `"<50ms"` or `"99.7%"` that counts up from zero once it
/// scrolls into view. Text without a positive number is shown as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    text: String,
    number: Option<(Range<usize>, f64, usize)>,
    duration_secs: f64,
}

impl CountUp {
    pub fn parse(text: &str) -> Self {
        let number = NUMBER.find(text).and_then(|found| {
            let value = found.as_str().parse::<f64>().ok()?;
            let decimals = found
                .as_str()
                .split_once('.')
                .map_or(0, |(_, fraction)| fraction.len());
            (value > 0.0).then_some((found.range(), value, decimals))
        });

        Self {
            text: text.to_string(),
            number,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.number.is_some()
    }

    pub fn is_finished(&self, elapsed_secs: f64) -> bool {
        self.number.is_none() || elapsed_secs >= self.duration_secs
    }

    pub fn final_text(&self) -> &str {
        &self.text
    }

    /// Text with the number replaced by its ease-out count at `elapsed_secs`.
    pub fn display_at(&self, elapsed_secs: f64) -> String {
        let Some((range, target, decimals)) = self.number.clone() else {
            return self.text.clone();
        };
        if self.is_finished(elapsed_secs) {
            return self.text.clone();
        }

        let progress = if self.duration_secs > 0.0 {
            (elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let factor = 10f64.powi(decimals as i32);
        let current = (Easing::EaseOut.apply(progress) * target * factor).floor() / factor;

        format!(
            "{}{:.*}{}",
            &self.text[..range.start],
            decimals,
            current.min(target),
            &self.text[range.end..]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_and_lands_on_the_original_text() {
        let stat = CountUp::parse("<50ms");
        assert!(stat.is_numeric());
        assert_eq!(stat.display_at(0.0), "<0ms");
        assert_eq!(stat.display_at(2.0), "<50ms");
        assert_eq!(stat.display_at(10.0), "<50ms");
    }

    #[test]
    fn keeps_decimal_places_and_never_overshoots() {
        let stat = CountUp::parse("99.7%");
        let mut previous = -1.0;
        for step in 0..=40 {
            let shown = stat.display_at(f64::from(step) * 0.05);
            let value: f64 = shown.trim_end_matches('%').parse().expect("numeric prefix");
            assert!(value <= 99.7);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(stat.display_at(0.0), "0.0%");
    }

    #[test]
    fn non_numeric_values_render_unchanged() {
        let stat = CountUp::parse("Operational");
        assert!(!stat.is_numeric());
        assert!(stat.is_finished(0.0));
        assert_eq!(stat.display_at(0.3), "Operational");
        assert_eq!(CountUp::parse("0 incidents").display_at(0.1), "0 incidents");
    }

    #[test]
    fn year_counts_up_in_whole_numbers() {
        let stat = CountUp::parse("2024").with_duration(1.0);
        let halfway = stat.display_at(0.5);
        assert!(!halfway.contains('.'));
        assert!(halfway.parse::<u32>().expect("integer") < 2024);
    }
}
