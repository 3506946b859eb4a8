use std::str::FromStr;

use super::MotionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Which edge of the tracked region lines up with which edge of the viewport.
/// `"start end"` reads as "region top meets viewport bottom".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOffset {
    pub region: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const fn new(region: Edge, viewport: Edge) -> Self {
        Self { region, viewport }
    }

    fn aligned_top(self, geometry: &RegionGeometry) -> f64 {
        self.viewport.fraction() * geometry.viewport_height
            - self.region.fraction() * geometry.height
    }
}

impl FromStr for ScrollOffset {
    type Err = MotionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split_whitespace();
        let region = parts.next().and_then(Edge::parse);
        let viewport = parts.next().and_then(Edge::parse);

        match (region, viewport, parts.next()) {
            (Some(region), Some(viewport), None) => Ok(Self { region, viewport }),
            _ => Err(MotionError::UnknownOffset(value.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollWindow {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollWindow {
    pub const THROUGH: Self = Self {
        start: ScrollOffset::new(Edge::Start, Edge::End),
        end: ScrollOffset::new(Edge::End, Edge::Start),
    };

    pub const EXIT: Self = Self {
        start: ScrollOffset::new(Edge::Start, Edge::Start),
        end: ScrollOffset::new(Edge::End, Edge::Start),
    };

    pub fn parse(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    pub fn progress(&self, geometry: &RegionGeometry) -> f64 {
        let raw = self.raw_progress(geometry);
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    /// Unclamped progress. A window whose start and end coincide (or run
    /// backwards) degrades to a step at the start alignment.
    fn raw_progress(&self, geometry: &RegionGeometry) -> f64 {
        let start_top = self.start.aligned_top(geometry);
        let end_top = self.end.aligned_top(geometry);
        let span = start_top - end_top;

        if span <= f64::EPSILON {
            return if geometry.top <= start_top { 1.0 } else { 0.0 };
        }

        (start_top - geometry.top) / span
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionGeometry {
    /// Region top relative to the viewport top (`getBoundingClientRect().top`).
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    window: ScrollWindow,
    progress: f64,
}

impl ScrollTracker {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            progress: 0.0,
        }
    }

    pub fn measure(&mut self, geometry: RegionGeometry) -> bool {
        let next = self.window.progress(&geometry);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(top: f64, height: f64) -> RegionGeometry {
        RegionGeometry {
            top,
            height,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn offsets_parse_from_their_textual_form() {
        let window = ScrollWindow::parse("start end", "end start").expect("valid offsets");
        assert_eq!(window, ScrollWindow::THROUGH);
        assert!(ScrollWindow::parse("top bottom", "end start").is_err());
        assert!("start end start".parse::<ScrollOffset>().is_err());
    }

    #[test]
    fn progress_is_zero_before_start_and_one_after_end() {
        let window = ScrollWindow::THROUGH;

        for top in [800.0, 900.0, 5_000.0] {
            assert_eq!(window.progress(&geometry(top, 400.0)), 0.0);
        }
        for top in [-400.0, -401.0, -9_000.0] {
            assert_eq!(window.progress(&geometry(top, 400.0)), 1.0);
        }
    }

    #[test]
    fn region_taller_than_viewport_hits_both_ends_exactly() {
        let window = ScrollWindow::THROUGH;
        let height = 2_400.0;

        assert_eq!(window.progress(&geometry(800.0, height)), 0.0);
        assert_eq!(window.progress(&geometry(-height, height)), 1.0);

        let exit = ScrollWindow::EXIT;
        assert_eq!(exit.progress(&geometry(0.0, height)), 0.0);
        assert_eq!(exit.progress(&geometry(-height, height)), 1.0);
    }

    #[test]
    fn progress_is_monotonic_while_scrolling_forward() {
        let window = ScrollWindow::THROUGH;
        let mut previous = 0.0;

        for scrolled in 0..3_000 {
            let current = window.progress(&geometry(1_000.0 - f64::from(scrolled), 1_200.0));
            assert!(current >= previous, "progress went backwards at {scrolled}");
            previous = current;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn degenerate_window_steps_at_the_alignment() {
        let window = ScrollWindow::parse("start start", "start start").expect("valid offsets");

        assert_eq!(window.progress(&geometry(10.0, 300.0)), 0.0);
        assert_eq!(window.progress(&geometry(0.0, 300.0)), 1.0);
    }

    #[test]
    fn tracker_reports_zero_until_measured() {
        let mut tracker = ScrollTracker::new(ScrollWindow::THROUGH);
        assert_eq!(tracker.progress(), 0.0);

        assert!(tracker.measure(geometry(200.0, 400.0)));
        assert_eq!(tracker.progress(), 0.5);
        assert!(!tracker.measure(geometry(200.0, 400.0)));
    }
}
