use std::f64::consts::TAU;
use std::time::Duration;

use super::MotionError;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);

const ORBIT_TILT: f64 = 0.28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Paused,
    Focused(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    PointerEnter,
    PointerLeave,
    FocusEnter,
    FocusLeave,
    /// Click on an item: feature it, or un-feature it if it already is.
    Select(usize),
    Close,
    GoTo(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Featured,
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    item_count: usize,
    active_index: usize,
    pointer_inside: bool,
    focus_inside: bool,
    focused: Option<usize>,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Result<Self, MotionError> {
        if item_count == 0 {
            return Err(MotionError::EmptyCarousel);
        }

        Ok(Self {
            item_count,
            active_index: 0,
            pointer_inside: false,
            focus_inside: false,
            focused: None,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_paused(&self) -> bool {
        !matches!(self.phase(), CarouselPhase::Idle)
    }

    pub fn phase(&self) -> CarouselPhase {
        match self.focused {
            Some(index) => CarouselPhase::Focused(index),
            None if self.pointer_inside || self.focus_inside => CarouselPhase::Paused,
            None => CarouselPhase::Idle,
        }
    }

    pub fn emphasis(&self, index: usize) -> Emphasis {
        match self.focused {
            Some(focused) if focused == index => Emphasis::Featured,
            Some(_) => Emphasis::Dimmed,
            None => Emphasis::Normal,
        }
    }

    /// Applies one action; returns whether anything observable changed.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        let before = self.clone();

        match action {
            CarouselAction::Tick => {
                if self.phase() == CarouselPhase::Idle {
                    self.active_index = (self.active_index + 1) % self.item_count;
                }
            }
            CarouselAction::PointerEnter => self.pointer_inside = true,
            CarouselAction::PointerLeave => self.pointer_inside = false,
            CarouselAction::FocusEnter => self.focus_inside = true,
            CarouselAction::FocusLeave => self.focus_inside = false,
            CarouselAction::Select(index) if index < self.item_count => {
                if self.focused == Some(index) {
                    self.focused = None;
                } else {
                    self.focused = Some(index);
                    self.active_index = index;
                }
            }
            CarouselAction::Select(_) => {}
            CarouselAction::Close => self.focused = None,
            CarouselAction::GoTo(index) if index < self.item_count => {
                self.active_index = index;
            }
            CarouselAction::GoTo(_) => {}
        }

        *self != before
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselClock {
    interval: Duration,
    elapsed: Duration,
}

impl CarouselClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut ticks = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            ticks += 1;
        }
        ticks
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSlot {
    pub x: f64,
    pub y: f64,
    /// 1.0 at the front of the ring, 0.0 at the back.
    pub depth: f64,
}

impl OrbitSlot {
    pub fn scale(&self) -> f64 {
        0.7 + 0.3 * self.depth
    }

    pub fn z_index(&self) -> i32 {
        (self.depth * 100.0).round() as i32
    }
}

/// Ring slot for `index` with `active` rotated to the front.
pub fn orbit_slot(index: usize, count: usize, active: usize, radius: f64) -> OrbitSlot {
    if count == 0 {
        return OrbitSlot {
            x: 0.0,
            y: 0.0,
            depth: 1.0,
        };
    }

    let offset = (index + count - active % count) % count;
    let angle = TAU * offset as f64 / count as f64;
    OrbitSlot {
        x: radius * angle.sin(),
        y: radius * ORBIT_TILT * angle.cos(),
        depth: (angle.cos() + 1.0) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(CarouselState::new(0), Err(MotionError::EmptyCarousel));
    }

    #[test]
    fn three_items_cycle_fully_in_eighteen_seconds() {
        let mut state = CarouselState::new(3).expect("non-empty");
        let mut clock = CarouselClock::new(DEFAULT_INTERVAL);
        let start = state.active_index();
        let mut advances = 0;

        for _ in 0..18 {
            for _ in 0..clock.advance(Duration::from_secs(1)) {
                if state.apply(CarouselAction::Tick) {
                    advances += 1;
                }
            }
        }

        assert_eq!(advances, 3);
        assert_eq!(state.active_index(), start);
    }

    #[test]
    fn active_index_stays_in_bounds_across_wraparound() {
        for count in 1..=7 {
            let mut state = CarouselState::new(count).expect("non-empty");
            for _ in 0..(count * 3 + 1) {
                state.apply(CarouselAction::Tick);
                assert!(state.active_index() < count);
            }
        }
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut state = CarouselState::new(4).expect("non-empty");
        state.apply(CarouselAction::PointerEnter);
        assert_eq!(state.phase(), CarouselPhase::Paused);
        assert!(!state.apply(CarouselAction::Tick));

        state.apply(CarouselAction::PointerLeave);
        assert_eq!(state.phase(), CarouselPhase::Idle);
        assert!(state.apply(CarouselAction::Tick));
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn leaving_while_focused_stays_focused() {
        let mut state = CarouselState::new(4).expect("non-empty");
        state.apply(CarouselAction::PointerEnter);
        state.apply(CarouselAction::Select(2));
        state.apply(CarouselAction::PointerLeave);

        assert_eq!(state.phase(), CarouselPhase::Focused(2));
        assert!(!state.apply(CarouselAction::Tick));
    }

    #[test]
    fn selecting_another_item_switches_focus_atomically() {
        let mut state = CarouselState::new(5).expect("non-empty");
        state.apply(CarouselAction::Select(1));
        state.apply(CarouselAction::Select(3));

        assert_eq!(state.focused(), Some(3));
        let featured = (0..5)
            .filter(|&index| state.emphasis(index) == Emphasis::Featured)
            .count();
        assert_eq!(featured, 1);
        assert_eq!(state.emphasis(1), Emphasis::Dimmed);
    }

    #[test]
    fn same_item_click_or_close_returns_to_idle() {
        let mut state = CarouselState::new(3).expect("non-empty");
        state.apply(CarouselAction::Select(1));
        state.apply(CarouselAction::Select(1));
        assert_eq!(state.phase(), CarouselPhase::Idle);

        state.apply(CarouselAction::Select(2));
        state.apply(CarouselAction::Close);
        assert_eq!(state.phase(), CarouselPhase::Idle);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn out_of_range_actions_are_ignored() {
        let mut state = CarouselState::new(2).expect("non-empty");
        assert!(!state.apply(CarouselAction::Select(2)));
        assert!(!state.apply(CarouselAction::GoTo(9)));
        assert!(state.apply(CarouselAction::GoTo(1)));
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn keyboard_focus_pauses_like_hover() {
        let mut state = CarouselState::new(3).expect("non-empty");
        state.apply(CarouselAction::FocusEnter);
        state.apply(CarouselAction::PointerEnter);
        state.apply(CarouselAction::PointerLeave);
        assert_eq!(state.phase(), CarouselPhase::Paused);
    }

    #[test]
    fn active_item_sits_at_the_front_of_the_ring() {
        let front = orbit_slot(2, 6, 2, 300.0);
        assert!(front.x.abs() < 1e-9);
        assert_eq!(front.depth, 1.0);
        assert_eq!(front.z_index(), 100);

        let back = orbit_slot(5, 6, 2, 300.0);
        assert!(back.depth < 1e-9);
        assert!(back.scale() < front.scale());
    }
}
