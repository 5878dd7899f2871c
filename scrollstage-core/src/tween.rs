//! Minimal property tweening with last-write-wins overwrite.
//!
//! A [`Tweens`] book holds the current value of every `(target, property)`
//! pair it has seen and at most one running tween per pair. Starting a new
//! tween on a pair replaces whatever was in flight, starting from the value
//! reached so far, so a stream of updates never queues.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    InOutSine,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Animatable style properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    Scale,
    /// Horizontal translation in percent of the element's width.
    XPercent,
    /// Vertical translation in percent of the element's height.
    YPercent,
    /// Vertical translation in pixels.
    Y,
}

impl Prop {
    /// Value assumed for a property that has never been written.
    pub fn initial(self) -> f64 {
        match self {
            Prop::Opacity | Prop::Scale => 1.0,
            Prop::XPercent | Prop::YPercent | Prop::Y => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenConfig {
    /// Seconds; zero or less writes the end value immediately.
    pub duration: f64,
    pub ease: Ease,
}

impl TweenConfig {
    pub fn new(duration: f64) -> Self {
        Self { duration, ease: Ease::OutQuad }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// The animation seam: drive `props` of `target` toward new values.
pub trait Animate<K> {
    fn animate(&mut self, target: K, props: &[(Prop, f64)], config: TweenConfig);
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

#[derive(Debug)]
pub struct Tweens<K> {
    values: HashMap<(K, Prop), f64>,
    running: HashMap<(K, Prop), Tween>,
    dirty: HashSet<K>,
}

impl<K> Default for Tweens<K> {
    fn default() -> Self {
        Self { values: HashMap::new(), running: HashMap::new(), dirty: HashSet::new() }
    }
}

impl<K: Copy + Eq + Hash> Tweens<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, or the property's initial value if never written.
    pub fn value(&self, target: K, prop: Prop) -> f64 {
        self.values.get(&(target, prop)).copied().unwrap_or(prop.initial())
    }

    /// Whether `prop` of `target` has ever been written.
    pub fn has(&self, target: K, prop: Prop) -> bool {
        self.values.contains_key(&(target, prop))
    }

    pub fn is_running(&self, target: K, prop: Prop) -> bool {
        self.running.contains_key(&(target, prop))
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Jump straight to `value`, cancelling any tween on that property.
    pub fn set(&mut self, target: K, prop: Prop, value: f64) {
        self.running.remove(&(target, prop));
        self.values.insert((target, prop), value);
        self.dirty.insert(target);
    }

    /// Start from `from` regardless of the current value.
    pub fn from_to(&mut self, target: K, prop: Prop, from: f64, to: f64, config: TweenConfig) {
        self.set(target, prop, from);
        self.animate(target, &[(prop, to)], config);
    }

    /// Advance every running tween by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let mut finished = Vec::new();
        for (&key, tween) in self.running.iter_mut() {
            tween.elapsed += dt.max(0.0);
            let t = (tween.elapsed / tween.duration).min(1.0);
            let value = tween.from + (tween.to - tween.from) * tween.ease.apply(t);
            self.values.insert(key, value);
            self.dirty.insert(key.0);
            if t >= 1.0 {
                finished.push(key);
            }
        }
        for key in finished {
            self.running.remove(&key);
        }
    }

    /// Targets whose values changed since the last call.
    pub fn take_dirty(&mut self) -> Vec<K> {
        self.dirty.drain().collect()
    }
}

impl<K: Copy + Eq + Hash> Animate<K> for Tweens<K> {
    fn animate(&mut self, target: K, props: &[(Prop, f64)], config: TweenConfig) {
        for &(prop, to) in props {
            if config.duration <= 0.0 {
                self.set(target, prop, to);
                continue;
            }
            let from = self.value(target, prop);
            self.running.insert(
                (target, prop),
                Tween { from, to, elapsed: 0.0, duration: config.duration, ease: config.ease },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum T {
        A,
        B,
    }

    #[test]
    fn ease_endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::OutQuad, Ease::InOutSine] {
            assert!(ease.apply(0.0).abs() < 1e-12);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
            assert!(ease.apply(0.25) < ease.apply(0.75));
        }
    }

    #[test]
    fn linear_tween_reaches_target() {
        let mut tweens = Tweens::new();
        tweens.animate(T::A, &[(Prop::Opacity, 0.0)], TweenConfig::new(1.0).ease(Ease::Linear));
        assert!(tweens.is_running(T::A, Prop::Opacity));
        tweens.tick(0.25);
        assert!((tweens.value(T::A, Prop::Opacity) - 0.75).abs() < 1e-12);
        tweens.tick(1.0);
        assert_eq!(tweens.value(T::A, Prop::Opacity), 0.0);
        assert!(tweens.is_idle());
    }

    #[test]
    fn later_write_overrides_in_flight_tween() {
        let mut tweens = Tweens::new();
        let cfg = TweenConfig::new(1.0).ease(Ease::Linear);
        tweens.set(T::A, Prop::Scale, 1.0);
        tweens.animate(T::A, &[(Prop::Scale, 2.0)], cfg);
        tweens.tick(0.5);
        assert!((tweens.value(T::A, Prop::Scale) - 1.5).abs() < 1e-12);

        // New target supersedes the old one, continuing from 1.5.
        tweens.animate(T::A, &[(Prop::Scale, 1.0)], cfg);
        tweens.tick(0.5);
        assert!((tweens.value(T::A, Prop::Scale) - 1.25).abs() < 1e-12);
        tweens.tick(0.5);
        assert_eq!(tweens.value(T::A, Prop::Scale), 1.0);
    }

    #[test]
    fn overwrite_is_per_property_and_target() {
        let mut tweens = Tweens::new();
        let cfg = TweenConfig::new(1.0).ease(Ease::Linear);
        tweens.animate(T::A, &[(Prop::Opacity, 0.0)], cfg);
        tweens.animate(T::A, &[(Prop::Scale, 2.0)], cfg);
        tweens.animate(T::B, &[(Prop::Opacity, 0.0)], cfg);
        assert!(tweens.is_running(T::A, Prop::Opacity));
        assert!(tweens.is_running(T::A, Prop::Scale));
        assert!(tweens.is_running(T::B, Prop::Opacity));
    }

    #[test]
    fn zero_duration_writes_immediately() {
        let mut tweens = Tweens::new();
        tweens.animate(T::A, &[(Prop::XPercent, -300.0)], TweenConfig::new(0.0));
        assert_eq!(tweens.value(T::A, Prop::XPercent), -300.0);
        assert!(tweens.is_idle());
        assert_eq!(tweens.take_dirty(), vec![T::A]);
        assert!(tweens.take_dirty().is_empty());
    }

    #[test]
    fn from_to_starts_at_given_value() {
        let mut tweens = Tweens::new();
        let cfg = TweenConfig::new(0.4).ease(Ease::Linear);
        tweens.from_to(T::B, Prop::Y, 10.0, 0.0, cfg);
        assert_eq!(tweens.value(T::B, Prop::Y), 10.0);
        tweens.tick(0.2);
        assert!((tweens.value(T::B, Prop::Y) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn unwritten_props_report_initial_values() {
        let tweens: Tweens<T> = Tweens::new();
        assert_eq!(tweens.value(T::A, Prop::Opacity), 1.0);
        assert_eq!(tweens.value(T::A, Prop::Scale), 1.0);
        assert_eq!(tweens.value(T::A, Prop::Y), 0.0);
        assert!(!tweens.has(T::A, Prop::Y));
    }
}
