use super::lerp;

const SNAP_DISTANCE: f64 = 0.5;
const TOUCH_BREAKPOINT: f64 = 768.0;
const MOBILE_AGENTS: [&str; 4] = ["iPhone", "iPad", "iPod", "Android"];
pub const LINE_HEIGHT_PX: f64 = 16.0;

/// Unit of a wheel event's delta, as reported by `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelUnit {
    Pixel,
    Line,
    Page,
}

impl WheelUnit {
    pub fn from_delta_mode(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }

    pub fn to_pixels(self, delta: f64, page_height: f64) -> f64 {
        match self {
            Self::Pixel => delta,
            Self::Line => delta * LINE_HEIGHT_PX,
            Self::Page => delta * page_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Pointer,
    Touch,
}

impl DeviceClass {
    pub fn detect(user_agent: &str, viewport_width: f64) -> Self {
        let mobile_agent = MOBILE_AGENTS.iter().any(|agent| user_agent.contains(agent));
        if mobile_agent || viewport_width < TOUCH_BREAKPOINT {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTuning {
    pub lerp: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl ScrollTuning {
    pub fn for_device(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Pointer => Self {
                lerp: 0.1,
                wheel_multiplier: 0.8,
                touch_multiplier: 1.5,
            },
            DeviceClass::Touch => Self {
                lerp: 0.15,
                wheel_multiplier: 0.8,
                touch_multiplier: 1.8,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroller {
    tuning: ScrollTuning,
    current: f64,
    target: f64,
    limit: f64,
}

impl SmoothScroller {
    pub fn new(tuning: ScrollTuning, position: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let position = position.clamp(0.0, limit);
        Self {
            tuning,
            current: position,
            target: position,
            limit,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Scroll happened outside the emulator (anchor jump, keyboard); adopt it.
    pub fn sync_to(&mut self, position: f64) {
        let position = position.clamp(0.0, self.limit);
        self.current = position;
        self.target = position;
    }

    pub fn on_wheel(&mut self, delta: f64) {
        self.push(delta * self.tuning.wheel_multiplier);
    }

    /// `delta` is finger travel in pixels, positive when dragging upward.
    pub fn on_touch(&mut self, delta: f64) {
        self.push(delta * self.tuning.touch_multiplier);
    }

    fn push(&mut self, delta: f64) {
        if delta.is_finite() {
            self.target = (self.target + delta).clamp(0.0, self.limit);
        }
    }

    pub fn frame(&mut self) -> Option<f64> {
        if self.is_settled() {
            return None;
        }

        let next = lerp(self.current, self.target, self.tuning.lerp);
        self.current = if (self.target - next).abs() < SNAP_DISTANCE {
            self.target
        } else {
            next
        };
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SmoothScroller {
        SmoothScroller::new(ScrollTuning::for_device(DeviceClass::Pointer), 0.0, 2_000.0)
    }

    #[test]
    fn device_class_follows_agent_or_width() {
        assert_eq!(DeviceClass::detect("Mozilla/5.0 (iPhone)", 1_200.0), DeviceClass::Touch);
        assert_eq!(DeviceClass::detect("Mozilla/5.0 (X11)", 600.0), DeviceClass::Touch);
        assert_eq!(DeviceClass::detect("Mozilla/5.0 (X11)", 1_440.0), DeviceClass::Pointer);
    }

    #[test]
    fn wheel_input_eases_toward_the_target_and_settles() {
        let mut scroller = scroller();
        scroller.on_wheel(500.0);
        assert_eq!(scroller.target(), 400.0);

        let first = scroller.frame().expect("moving");
        assert!((first - 40.0).abs() < 1e-9);

        let mut frames = 1;
        while scroller.frame().is_some() {
            frames += 1;
            assert!(frames < 500, "never settled");
        }
        assert_eq!(scroller.current(), 400.0);
        assert!(scroller.is_settled());
    }

    #[test]
    fn line_based_wheel_deltas_scroll_by_lines() {
        let unit = WheelUnit::from_delta_mode(1);
        assert_eq!(unit, WheelUnit::Line);

        let mut scroller = scroller();
        scroller.on_wheel(unit.to_pixels(3.0, 900.0));
        assert_eq!(scroller.target(), 3.0 * LINE_HEIGHT_PX * 0.8);

        assert_eq!(WheelUnit::from_delta_mode(0).to_pixels(120.0, 900.0), 120.0);
        assert_eq!(WheelUnit::from_delta_mode(2).to_pixels(1.0, 900.0), 900.0);
    }

    #[test]
    fn target_never_leaves_the_document() {
        let mut scroller = scroller();
        scroller.on_wheel(-300.0);
        assert_eq!(scroller.target(), 0.0);
        scroller.on_touch(10_000.0);
        assert_eq!(scroller.target(), 2_000.0);

        scroller.set_limit(1_000.0);
        assert_eq!(scroller.target(), 1_000.0);
        scroller.on_wheel(f64::NAN);
        assert_eq!(scroller.target(), 1_000.0);
    }

    #[test]
    fn external_scroll_is_adopted_without_animation() {
        let mut scroller = scroller();
        scroller.on_wheel(800.0);
        scroller.sync_to(1_500.0);
        assert!(scroller.is_settled());
        assert_eq!(scroller.frame(), None);
        assert_eq!(scroller.current(), 1_500.0);
    }
}
