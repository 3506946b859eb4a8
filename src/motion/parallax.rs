use std::f64::consts::TAU;

use super::{lerp, MotionError, MotionPreference};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub const STANDARD: Self = Self::CubicBezier(0.25, 0.46, 0.45, 0.94);

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => {
                let s = solve_bezier_x(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }

    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Self::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
        }
    }
}

fn bezier_component(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..8 {
        let error = bezier_component(s, x1, x2) - x;
        if error.abs() < 1e-7 {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    let (mut low, mut high) = (0.0, 1.0);
    s = x;
    for _ in 0..40 {
        let value = bezier_component(s, x1, x2);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    s
}

/// Piecewise mapping from input stops to output stops, clamped at the ends.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeMap {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
    easing: Easing,
}

impl RangeMap {
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::StopCountMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(MotionError::TooFewStops(inputs.len()));
        }
        if inputs.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(MotionError::InputsNotIncreasing);
        }

        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
            easing: Easing::Linear,
        })
    }

    pub fn span(from: f64, to: f64) -> Self {
        Self {
            inputs: vec![0.0, 1.0],
            outputs: vec![from, to],
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn map(&self, value: f64) -> f64 {
        let last = self.inputs.len() - 1;
        if value <= self.inputs[0] {
            return self.outputs[0];
        }
        if value >= self.inputs[last] {
            return self.outputs[last];
        }

        let segment = self
            .inputs
            .windows(2)
            .position(|pair| value < pair[1])
            .unwrap_or(last - 1);
        let (in_low, in_high) = (self.inputs[segment], self.inputs[segment + 1]);
        let local = (value - in_low) / (in_high - in_low);

        lerp(
            self.outputs[segment],
            self.outputs[segment + 1],
            self.easing.apply(local),
        )
    }

    pub fn resolve(&self, value: f64, motion: MotionPreference, rest: f64) -> f64 {
        if motion.reduced() {
            rest
        } else {
            self.map(value)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualProps {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualProps {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn offset(self, x: f64, y: f64) -> Self {
        Self {
            x: self.x + x,
            y: self.y + y,
            ..self
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.3})",
            self.x, self.y, self.rotate, self.scale
        )
    }

    pub fn to_style(&self) -> String {
        format!("transform: {}; opacity: {:.3};", self.transform(), self.opacity)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallaxSpec {
    x: Option<RangeMap>,
    y: Option<RangeMap>,
    rotate: Option<RangeMap>,
    opacity: Option<RangeMap>,
    scale: Option<RangeMap>,
}

impl ParallaxSpec {
    pub fn float(speed: f64) -> Self {
        Self::default().y(RangeMap::span(100.0 * speed, -100.0 * speed))
    }

    pub fn x(mut self, track: RangeMap) -> Self {
        self.x = Some(track);
        self
    }

    pub fn y(mut self, track: RangeMap) -> Self {
        self.y = Some(track);
        self
    }

    pub fn rotate(mut self, track: RangeMap) -> Self {
        self.rotate = Some(track);
        self
    }

    pub fn opacity(mut self, track: RangeMap) -> Self {
        self.opacity = Some(track);
        self
    }

    pub fn scale(mut self, track: RangeMap) -> Self {
        self.scale = Some(track);
        self
    }

    /// Props for `progress`, or the untransformed rest state when motion is
    /// reduced.
    pub fn resolve(&self, progress: f64, motion: MotionPreference) -> VisualProps {
        if motion.reduced() {
            return VisualProps::IDENTITY;
        }
        self.apply(progress)
    }

    pub fn apply(&self, progress: f64) -> VisualProps {
        let sample = |track: &Option<RangeMap>, fallback: f64| {
            track.as_ref().map_or(fallback, |track| track.map(progress))
        };
        let base = VisualProps::IDENTITY;

        VisualProps {
            x: sample(&self.x, base.x),
            y: sample(&self.y, base.y),
            rotate: sample(&self.rotate, base.rotate),
            opacity: sample(&self.opacity, base.opacity),
            scale: sample(&self.scale, base.scale),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPhase {
    pub period_secs: f64,
    pub amplitude: f64,
}

impl FloatPhase {
    pub const GENTLE: Self = Self {
        period_secs: 6.0,
        amplitude: 5.0,
    };

    pub fn offset(&self, elapsed_secs: f64) -> f64 {
        if self.period_secs <= 0.0 {
            return 0.0;
        }
        -self.amplitude * (TAU * elapsed_secs / self.period_secs).cos()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    FadeUp,
    FadeIn,
    ScaleIn,
    SlideLeft,
    SlideRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStates {
    pub initial: VisualProps,
    pub animate: VisualProps,
    pub duration_secs: f64,
    pub easing: Easing,
}

const HIDDEN: VisualProps = VisualProps {
    opacity: 0.0,
    ..VisualProps::IDENTITY
};

impl Variant {
    pub fn states(self) -> VariantStates {
        let (initial, duration_secs, easing) = match self {
            Self::FadeUp => (VisualProps { y: 30.0, ..HIDDEN }, 0.6, Easing::STANDARD),
            Self::FadeIn => (HIDDEN, 0.5, Easing::EaseOut),
            Self::ScaleIn => (VisualProps { scale: 0.9, ..HIDDEN }, 0.5, Easing::EaseOut),
            Self::SlideLeft => (VisualProps { x: -50.0, ..HIDDEN }, 0.6, Easing::STANDARD),
            Self::SlideRight => (VisualProps { x: 50.0, ..HIDDEN }, 0.6, Easing::STANDARD),
        };

        VariantStates {
            initial,
            animate: VisualProps::IDENTITY,
            duration_secs,
            easing,
        }
    }

    /// Inline style for the target state. With motion allowed the browser
    /// transitions between states; otherwise the entered state is shown as-is.
    pub fn style(self, entered: bool, delay_secs: f64, motion_allowed: bool) -> String {
        let states = self.states();
        if !motion_allowed {
            return states.animate.to_style();
        }

        let target = if entered { states.animate } else { states.initial };
        let easing = states.easing.css();
        format!(
            "{} transition: transform {d}s {easing} {delay_secs}s, opacity {d}s {easing} {delay_secs}s;",
            target.to_style(),
            d = states.duration_secs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn range_map_rejects_malformed_stops() {
        assert_eq!(RangeMap::new(&[0.0], &[1.0]), Err(MotionError::TooFewStops(1)));
        assert_eq!(
            RangeMap::new(&[0.0, 1.0], &[1.0]),
            Err(MotionError::StopCountMismatch { inputs: 2, outputs: 1 })
        );
        assert_eq!(
            RangeMap::new(&[0.0, 0.5, 0.5], &[0.0, 1.0, 2.0]),
            Err(MotionError::InputsNotIncreasing)
        );
    }

    #[test]
    fn range_map_clamps_and_interpolates_per_segment() {
        let map = RangeMap::new(&[0.0, 0.5, 1.0], &[0.0, 100.0, 50.0]).expect("valid stops");

        assert_eq!(map.map(-1.0), 0.0);
        assert_eq!(map.map(2.0), 50.0);
        assert!(close(map.map(0.25), 50.0));
        assert!(close(map.map(0.75), 75.0));
    }

    #[test]
    fn hero_fades_while_shrinking_on_independent_tracks() {
        let opacity = RangeMap::new(&[0.0, 0.5], &[1.0, 0.0]).expect("valid stops");
        let scale = RangeMap::new(&[0.0, 0.5], &[1.0, 0.95]).expect("valid stops");
        let spec = ParallaxSpec::default().opacity(opacity).scale(scale);

        let halfway = spec.apply(0.25);
        assert!(close(halfway.opacity, 0.5));
        assert!(close(halfway.scale, 0.975));
        assert_eq!(halfway.y, 0.0);

        let gone = spec.apply(0.8);
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.scale, 0.95);
    }

    #[test]
    fn float_spec_moves_from_below_to_above() {
        let spec = ParallaxSpec::float(0.2);
        assert!(close(spec.apply(0.0).y, 20.0));
        assert!(close(spec.apply(0.5).y, 0.0));
        assert!(close(spec.apply(1.0).y, -20.0));
    }

    #[test]
    fn reduced_motion_resolves_to_the_rest_state() {
        let reduced = MotionPreference::new(true);
        let float = ParallaxSpec::float(0.2);
        assert_eq!(float.resolve(0.0, reduced), VisualProps::IDENTITY);
        assert!(close(float.resolve(0.0, MotionPreference::new(false)).y, 20.0));

        let exit = ParallaxSpec::default()
            .opacity(RangeMap::span(1.0, 0.0))
            .scale(RangeMap::span(1.0, 0.92));
        assert_eq!(exit.resolve(0.7, reduced), VisualProps::IDENTITY);

        let rotate = RangeMap::span(-15.0, 15.0);
        assert_eq!(rotate.resolve(0.0, reduced, 0.0), 0.0);
        assert_eq!(rotate.resolve(0.0, MotionPreference::new(false), 0.0), -15.0);
    }

    #[test]
    fn easing_curves_pin_their_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::STANDARD,
        ] {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(close(Easing::EaseInOut.apply(0.5), 0.5));
    }

    #[test]
    fn standard_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::STANDARD.apply(f64::from(step) / 100.0);
            assert!(value >= previous - 1e-9);
            previous = value;
        }
    }

    #[test]
    fn breathing_float_swings_between_amplitudes() {
        let phase = FloatPhase::GENTLE;
        assert!(close(phase.offset(0.0), -5.0));
        assert!(close(phase.offset(3.0), 5.0));
        assert!(close(phase.offset(6.0), -5.0));
    }

    #[test]
    fn variants_enter_from_their_initial_state() {
        let start = Variant::FadeUp.states().initial;
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.y, 30.0);
        assert_eq!(Variant::SlideLeft.states().animate, VisualProps::IDENTITY);
    }

    #[test]
    fn reduced_motion_style_is_the_entered_state_without_transition() {
        let style = Variant::ScaleIn.style(false, 0.2, false);
        assert!(!style.contains("transition"));
        assert!(style.contains("opacity: 1.000"));

        let animated = Variant::ScaleIn.style(false, 0.2, true);
        assert!(animated.contains("opacity: 0.000"));
        assert!(animated.contains("transition"));
    }
}
