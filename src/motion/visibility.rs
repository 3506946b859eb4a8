#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Latch on the first crossing; entrance animations never replay.
    Once,
    Always,
}

/// Root margin in CSS pixels. Negative values shrink the observed root so the
/// gate opens later; positive values open it early.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin(pub f64);

impl RootMargin {
    pub const NONE: Self = Self(0.0);

    pub fn css(self) -> String {
        format!("{}px", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateConfig {
    pub mode: VisibilityMode,
    /// Fraction of the element that has to be visible, in `[0, 1]`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl GateConfig {
    pub const ONCE: Self = Self {
        mode: VisibilityMode::Once,
        threshold: 0.1,
        root_margin: RootMargin(-50.0),
    };

    pub const ALWAYS: Self = Self {
        mode: VisibilityMode::Always,
        threshold: 0.1,
        root_margin: RootMargin(-100.0),
    };

    pub fn threshold(self, threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn root_margin(self, root_margin: RootMargin) -> Self {
        Self {
            root_margin,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityGate {
    config: GateConfig,
    visible: bool,
}

impl VisibilityGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            visible: false,
        }
    }

    pub fn opened(config: GateConfig) -> Self {
        Self {
            config,
            visible: true,
        }
    }

    pub fn config(&self) -> GateConfig {
        self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_latched(&self) -> bool {
        self.config.mode == VisibilityMode::Once && self.visible
    }

    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.is_latched() {
            return false;
        }

        let crossed = is_intersecting && ratio >= self.config.threshold;
        let next = match self.config.mode {
            VisibilityMode::Once => self.visible || crossed,
            VisibilityMode::Always => crossed,
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_gate_latches_after_the_first_crossing() {
        let mut gate = VisibilityGate::new(GateConfig::ONCE);
        assert!(!gate.observe(true, 0.05));
        assert!(gate.observe(true, 0.1));
        assert!(gate.is_latched());

        assert!(!gate.observe(false, 0.0));
        assert!(gate.is_visible());
    }

    #[test]
    fn always_gate_toggles_with_every_crossing() {
        let mut gate = VisibilityGate::new(GateConfig::ALWAYS.threshold(0.5));
        assert!(gate.observe(true, 0.6));
        assert!(gate.observe(true, 0.4));
        assert!(!gate.is_visible());
        assert!(gate.observe(true, 0.9));
        assert!(gate.observe(false, 0.0));
        assert!(!gate.is_latched());
    }

    #[test]
    fn threshold_is_clamped_and_margin_renders_as_css() {
        let config = GateConfig::ONCE.threshold(3.0).root_margin(RootMargin(-100.0));
        assert_eq!(config.threshold, 1.0);
        assert_eq!(config.root_margin.css(), "-100px");
        assert_eq!(RootMargin::NONE.css(), "0px");
    }
}
