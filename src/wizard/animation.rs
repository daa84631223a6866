//! Animation timers and the state they drive.
//!
//! Two timers keep the wizard moving:
//!
//! - the reveal timer ([`REVEAL_INTERVAL`]) advances the title frame, which
//!   uncovers the art and moves the border spark;
//! - the physics timer ([`PHYSICS_INTERVAL`]) steps the entrance and
//!   transition springs.
//!
//! Timers are plain messages in a [`Scheduler`] queue. A handler that wants
//! another tick schedules one; stopping a timer means not scheduling it
//! again. Nothing runs on a background thread.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use super::spring::{fps, AnimatedValue, Spring, FPS};
use super::stage::Direction;
use super::title::reveal_total_ticks;

pub const REVEAL_INTERVAL: Duration = Duration::from_millis(150);
pub const PHYSICS_INTERVAL: Duration = Duration::from_millis(16);

const ENTRANCE_FREQUENCY: f64 = 5.0;
const ENTRANCE_DAMPING: f64 = 0.7;
const ENTRANCE_EPSILON: f64 = 0.001;

const TRANSITION_FREQUENCY: f64 = 8.0;
const TRANSITION_DAMPING: f64 = 0.85;
const TRANSITION_EPSILON: f64 = 0.5;

/// A timer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tick {
    Reveal,
    Physics,
}

impl Tick {
    pub fn interval(&self) -> Duration {
        match self {
            Tick::Reveal => REVEAL_INTERVAL,
            Tick::Physics => PHYSICS_INTERVAL,
        }
    }
}

/// Pending timer messages ordered by deadline.
///
/// Entries with the same deadline come out in the order they were
/// scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<(Instant, u64, Tick)>>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `tick` once `after` has elapsed from `now`.
    pub fn schedule(&mut self, now: Instant, after: Duration, tick: Tick) {
        self.seq += 1;
        self.queue.push(Reverse((now + after, self.seq, tick)));
    }

    /// Pop the earliest message whose deadline has passed.
    pub fn pop_due(&mut self, now: Instant) -> Option<Tick> {
        match self.queue.peek() {
            Some(Reverse((deadline, _, _))) if *deadline <= now => {
                self.queue.pop().map(|Reverse((_, _, tick))| tick)
            }
            _ => None,
        }
    }

    /// Every message due at `now`, in deadline order.
    pub fn due(&mut self, now: Instant) -> Vec<Tick> {
        let mut out = Vec::new();
        while let Some(tick) = self.pop_due(now) {
            out.push(tick);
        }
        out
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.peek().map(|Reverse((deadline, _, _))| *deadline)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending message.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Ticks the reveal timer runs for a content area `content_width` wide:
/// the reveal itself plus two full spark laps.
pub fn reveal_budget(content_width: u16) -> u32 {
    reveal_total_ticks() + 2 * (u32::from(content_width) + 2)
}

/// Everything the timers mutate.
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Reveal ticks seen so far.
    pub title_frame: u32,
    /// Panel scale, 0 to 1 once.
    pub entrance: AnimatedValue,
    /// Horizontal offset of the stage content in columns.
    pub transition: AnimatedValue,
    panel_ready: bool,
    reveal_done: bool,
    physics_armed: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// A fresh run: entrance about to start, nothing revealed.
    pub fn new() -> Self {
        let dt = fps(FPS);
        let mut entrance = AnimatedValue::at_rest(
            Spring::new(dt, ENTRANCE_FREQUENCY, ENTRANCE_DAMPING),
            ENTRANCE_EPSILON,
            0.0,
        );
        entrance.trigger(0.0, 1.0);
        let transition = AnimatedValue::at_rest(
            Spring::new(dt, TRANSITION_FREQUENCY, TRANSITION_DAMPING),
            TRANSITION_EPSILON,
            0.0,
        );

        Self {
            title_frame: 0,
            entrance,
            transition,
            panel_ready: false,
            reveal_done: false,
            physics_armed: false,
        }
    }

    /// Whether the panel has reached full size. Never goes back to false.
    pub fn panel_ready(&self) -> bool {
        self.panel_ready
    }

    pub fn reveal_done(&self) -> bool {
        self.reveal_done
    }

    /// Whether a physics tick is already queued.
    pub fn physics_armed(&self) -> bool {
        self.physics_armed
    }

    /// Mark the first physics tick as queued. Returns false if one already
    /// was, in which case the caller must not queue another.
    pub fn arm_physics(&mut self) -> bool {
        if self.physics_armed {
            return false;
        }
        self.physics_armed = true;
        true
    }

    /// Handle a reveal tick. Returns whether to schedule the next one.
    pub fn on_reveal_tick(&mut self, content_width: u16) -> bool {
        self.title_frame = self.title_frame.saturating_add(1);
        if self.reveal_done {
            return false;
        }
        if self.title_frame >= reveal_budget(content_width) {
            tracing::debug!("Title animation finished after {} ticks", self.title_frame);
            self.reveal_done = true;
            return false;
        }
        true
    }

    /// Handle a physics tick. Returns whether to schedule the next one.
    pub fn on_physics_tick(&mut self) -> bool {
        let mut more = false;
        if !self.panel_ready {
            if self.entrance.step() {
                more = true;
            } else {
                self.panel_ready = true;
            }
        }
        if self.transition.step() {
            more = true;
        }
        self.physics_armed = more;
        more
    }

    /// Start a slide for a stage change. Forward content enters from the
    /// right, backward from the left. Any slide in flight is replaced.
    ///
    /// Returns whether the caller must schedule a physics tick.
    pub fn trigger_transition(&mut self, direction: Direction, content_width: u16) -> bool {
        let from = f64::from(content_width);
        let from = match direction {
            Direction::Forward => from,
            Direction::Backward => -from,
        };
        self.transition.trigger(from, 0.0);
        self.arm_physics()
    }

    /// Current slide offset in whole columns; zero once settled.
    pub fn transition_offset(&self) -> i32 {
        if self.transition.is_settled() {
            0
        } else {
            self.transition.position.round() as i32
        }
    }

    /// Scale applied to the panel; exactly 1 once ready.
    pub fn entrance_scale(&self) -> f64 {
        if self.panel_ready {
            1.0
        } else {
            self.entrance.position
        }
    }
}
