use super::Vec2;

const MAX_FRAME_SECS: f64 = 0.05;
const SUBSTEP_SECS: f64 = 1.0 / 240.0;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProximityMode {
    Attract,
    Repel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityField {
    pub radius: f64,
    pub strength: f64,
    pub mode: ProximityMode,
}

impl ProximityField {
    pub fn attract(radius: f64, strength: f64) -> Self {
        Self {
            radius,
            strength,
            mode: ProximityMode::Attract,
        }
    }

    pub fn repel(radius: f64, strength: f64) -> Self {
        Self {
            radius,
            strength,
            mode: ProximityMode::Repel,
        }
    }

    /// Offset for an element centred at `center` with the pointer at
    /// `pointer`. Zero at or beyond the radius, linear falloff inside it.
    pub fn force(&self, pointer: Vec2, center: Vec2) -> Vec2 {
        let delta = pointer - center;
        let distance = delta.length();
        // A pointer dead on the centre has no direction.
        if self.radius <= 0.0 || distance >= self.radius || distance <= f64::EPSILON {
            return Vec2::ZERO;
        }

        let direction = delta * (1.0 / distance);
        let magnitude = self.strength * (1.0 - distance / self.radius);

        match self.mode {
            ProximityMode::Attract => direction * magnitude,
            ProximityMode::Repel => direction * -magnitude,
        }
    }
}

/// What the root pointer listener saw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Moved(Vec2),
    /// `pointerout`; `left_document` is set when there is no related target.
    Out { left_document: bool },
    Blur,
}

impl PointerSignal {
    pub fn apply(self, current: Option<Vec2>) -> Option<Vec2> {
        match self {
            Self::Moved(position) => Some(position),
            Self::Out {
                left_document: false,
            } => current,
            Self::Out {
                left_document: true,
            }
            | Self::Blur => None,
        }
    }
}

/// Critically damped spring on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    position: f64,
    velocity: f64,
}

impl Spring {
    pub fn critical(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
            position: 0.0,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn step(&mut self, target: f64, dt_secs: f64) -> f64 {
        let mut remaining = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let dt = remaining.min(SUBSTEP_SECS);
            let acceleration =
                self.stiffness * (target - self.position) - self.damping * self.velocity;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }

        if (target - self.position).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_at_rest(&self, target: f64) -> bool {
        self.position == target && self.velocity == 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityFollower {
    x: Spring,
    y: Spring,
    target: Vec2,
}

impl ProximityFollower {
    pub fn new(stiffness: f64) -> Self {
        Self {
            x: Spring::critical(stiffness),
            y: Spring::critical(stiffness),
            target: Vec2::ZERO,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Places both springs at `position` at rest, with no transition.
    pub fn snap(&mut self, position: Vec2) {
        self.target = position;
        self.x.position = position.x;
        self.x.velocity = 0.0;
        self.y.position = position.y;
        self.y.velocity = 0.0;
    }

    pub fn step(&mut self, dt_secs: f64) -> Vec2 {
        Vec2::new(
            self.x.step(self.target.x, dt_secs),
            self.y.step(self.target.y, dt_secs),
        )
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_at_rest(self.target.x) && self.y.is_at_rest(self.target.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_force_at_or_beyond_the_radius() {
        let field = ProximityField::repel(200.0, 12.0);
        let center = Vec2::new(500.0, 500.0);

        for distance in [200.0, 200.5, 1_000.0] {
            assert_eq!(field.force(Vec2::new(500.0 + distance, 500.0), center), Vec2::ZERO);
        }
    }

    #[test]
    fn pointer_on_the_centre_exerts_no_force() {
        let center = Vec2::new(100.0, 100.0);

        assert_eq!(ProximityField::repel(200.0, 12.0).force(center, center), Vec2::ZERO);
        assert_eq!(ProximityField::attract(200.0, 12.0).force(center, center), Vec2::ZERO);
    }

    #[test]
    fn force_magnitude_never_grows_with_distance() {
        let field = ProximityField::attract(200.0, 9.0);
        let center = Vec2::new(0.0, 0.0);
        let mut previous = f64::INFINITY;

        for step in 0..200 {
            let d = f64::from(step);
            let magnitude = field.force(Vec2::new(d * 0.6, d * 0.8), center).length();
            assert!(magnitude <= previous + 1e-12, "grew at d={d}");
            previous = magnitude;
        }
    }

    #[test]
    fn attraction_and_repulsion_share_falloff_but_flip_sign() {
        let center = Vec2::new(100.0, 100.0);
        let pointer = Vec2::new(150.0, 100.0);
        let pull = ProximityField::attract(100.0, 10.0).force(pointer, center);
        let push = ProximityField::repel(100.0, 10.0).force(pointer, center);

        assert!((pull.x - 5.0).abs() < 1e-9);
        assert_eq!(pull.y, 0.0);
        assert_eq!(push, pull * -1.0);
    }

    #[test]
    fn follower_never_jumps_straight_to_the_raw_target() {
        let mut follower = ProximityFollower::new(150.0);
        follower.set_target(Vec2::new(10.0, 0.0));

        let first = follower.step(1.0 / 60.0);
        assert!(first.x > 0.0 && first.x < 10.0);

        for _ in 0..600 {
            follower.step(1.0 / 60.0);
        }
        assert!(follower.is_settled());
        assert_eq!(follower.offset(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn release_decays_back_to_rest_without_snapping() {
        let mut follower = ProximityFollower::new(150.0);
        follower.set_target(Vec2::new(0.0, -8.0));
        for _ in 0..600 {
            follower.step(1.0 / 60.0);
        }

        follower.release();
        let after_one_frame = follower.step(1.0 / 60.0);
        assert!(after_one_frame.y < 0.0, "offset snapped to zero");
        assert!(!follower.is_settled());

        for _ in 0..600 {
            follower.step(1.0 / 60.0);
        }
        assert!(follower.is_settled());
        assert_eq!(follower.offset(), Vec2::ZERO);
    }

    #[test]
    fn leaving_the_document_clears_the_pointer() {
        let inside = Some(Vec2::new(40.0, 60.0));

        assert_eq!(PointerSignal::Out { left_document: false }.apply(inside), inside);
        assert_eq!(PointerSignal::Out { left_document: true }.apply(inside), None);
        assert_eq!(PointerSignal::Blur.apply(inside), None);
        assert_eq!(
            PointerSignal::Moved(Vec2::new(1.0, 2.0)).apply(None),
            Some(Vec2::new(1.0, 2.0))
        );
    }

    #[test]
    fn cleared_pointer_lets_a_displaced_follower_settle_at_rest() {
        let field = ProximityField::repel(200.0, 12.0);
        let center = Vec2::new(100.0, 100.0);
        let mut follower = ProximityFollower::new(150.0);

        let pointer = PointerSignal::Moved(Vec2::new(150.0, 100.0)).apply(None);
        follower.set_target(pointer.map_or(Vec2::ZERO, |p| field.force(p, center)));
        for _ in 0..120 {
            follower.step(1.0 / 60.0);
        }
        assert!(follower.offset().x < 0.0);

        let pointer = PointerSignal::Out { left_document: true }.apply(pointer);
        assert_eq!(pointer, None);
        follower.release();
        for _ in 0..600 {
            follower.step(1.0 / 60.0);
        }
        assert!(follower.is_settled());
        assert_eq!(follower.offset(), Vec2::ZERO);
    }

    #[test]
    fn snap_places_the_follower_at_rest() {
        let mut follower = ProximityFollower::new(150.0);
        follower.snap(Vec2::new(320.0, 240.0));

        assert!(follower.is_settled());
        assert_eq!(follower.offset(), Vec2::new(320.0, 240.0));
        assert_eq!(follower.step(1.0 / 60.0), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut spring = Spring::critical(150.0);
        let position = spring.step(100.0, 5.0);
        assert!(position < 100.0);
    }
}
