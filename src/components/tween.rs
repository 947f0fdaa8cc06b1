//! Tween components for animated interpolation.
//!
//! This module provides components for smoothly animating text properties
//! over time:
//! - [`TweenOffset`] – animate the vertical offset of a [`StuckTo`](super::stuckto::StuckTo)
//! - [`TweenOpacity`] – animate [`FloatingText::opacity`](super::floatingtext::FloatingText)
//!
//! Every tween owns a [`TweenClock`]: the scene time it started at and its
//! duration. Progress is `clamp((now - start) / duration, 0, 1)` sampled once
//! per frame, so a tween always ends exactly on its deadline no matter how
//! frames were spaced.
//!
//! A tween also remembers the generation of the text it animates. When the
//! text is superseded (its generation bumped), the tween stops on its next
//! sample instead of fighting with the newer animation.
//!
//! See [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;

/// Duration of every tween in the scene, in seconds.
pub const TWEEN_SECONDS: f32 = 1.0;

/// Start time and duration of a tween.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenClock {
    /// Scene time (seconds) at which the tween started.
    pub start: f32,
    /// Duration in seconds.
    pub duration: f32,
}

impl TweenClock {
    pub fn starting_at(start: f32, duration: f32) -> Self {
        Self { start, duration }
    }

    /// Linear progress in [0, 1] at scene time `now`. Samplers ease it with
    /// [`ease`](crate::systems::tween::ease).
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }
}

/// What happens when a tween reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TweenFinish {
    #[default]
    Nothing,
    /// Despawn the animated text.
    Despawn,
    /// The result glyph landed; the running operation is over.
    EndOperation(i64),
}

/// Animates the vertical offset of a text attached to a box.
#[derive(Component, Clone, Debug)]
pub struct TweenOffset {
    pub from: f32,
    pub to: f32,
    pub clock: TweenClock,
    /// Generation of the text when the tween was created.
    pub generation: u32,
    pub on_finish: TweenFinish,
}

impl TweenOffset {
    pub fn new(from: f32, to: f32, clock: TweenClock) -> Self {
        TweenOffset {
            from,
            to,
            clock,
            generation: 0,
            on_finish: TweenFinish::Nothing,
        }
    }
    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }
    pub fn with_finish(mut self, on_finish: TweenFinish) -> Self {
        self.on_finish = on_finish;
        self
    }
}

/// Animates the opacity of a text. Fades never end anything on their own;
/// the offset tween running alongside carries the finish action.
#[derive(Component, Clone, Debug)]
pub struct TweenOpacity {
    pub from: f32,
    pub to: f32,
    pub clock: TweenClock,
    pub generation: u32,
}

impl TweenOpacity {
    pub fn new(from: f32, to: f32, clock: TweenClock) -> Self {
        TweenOpacity {
            from,
            to,
            clock,
            generation: 0,
        }
    }
    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn clock_progress_is_clamped() {
        let c = TweenClock::starting_at(2.0, 1.0);
        assert!(approx_eq(c.progress(1.0), 0.0));
        assert!(approx_eq(c.progress(2.0), 0.0));
        assert!(approx_eq(c.progress(2.25), 0.25));
        assert!(approx_eq(c.progress(3.0), 1.0));
        assert!(approx_eq(c.progress(10.0), 1.0));
        assert!(!c.is_done(2.999));
        assert!(c.is_done(3.0));
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let c = TweenClock::starting_at(0.0, 0.0);
        assert!(c.is_done(0.0));
        assert!(approx_eq(c.progress(0.0), 1.0));
    }

    #[test]
    fn tween_offset_builder_chaining() {
        let tw = TweenOffset::new(1.5, 0.3, TweenClock::starting_at(0.0, 1.0))
            .with_generation(3)
            .with_finish(TweenFinish::Despawn);
        assert!(approx_eq(tw.from, 1.5));
        assert!(approx_eq(tw.to, 0.3));
        assert_eq!(tw.generation, 3);
        assert_eq!(tw.on_finish, TweenFinish::Despawn);
    }

    #[test]
    fn tween_opacity_defaults() {
        let tw = TweenOpacity::new(1.0, 0.0, TweenClock::starting_at(0.0, 1.0));
        assert_eq!(tw.generation, 0);
        assert_eq!(tw.with_generation(2).generation, 2);
    }
}
