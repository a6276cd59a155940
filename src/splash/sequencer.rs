//! Splash animation sequencer
//!
//! Drives the scripted pokeball choreography: idle spin, a timed eruption
//! where the halves fly apart while the ball shrinks, and a one-shot white
//! flash. The sequencer owns every timer it uses, so dropping it cancels
//! whatever is still pending.

use std::time::Duration;

use bevy::time::{Timer, TimerMode};
use serde::Serialize;

use crate::config::splash::*;

/// Forward-only phases of the splash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplashPhase {
    #[default]
    Idle,
    Rotating,
    Erupting,
    Flashing,
    Complete,
}

/// Timing and motion parameters of the sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequencerConfig {
    pub eruption_delay: Duration,
    pub flash_delay: Duration,
    pub flash_duration: Duration,
    /// Fraction of the flash spent ramping up to full opacity
    pub flash_peak: f32,
    pub spin_y_rate: f32,
    pub spin_z_rate: f32,
    pub separation_speed: f32,
    pub counter_rotation_speed: f32,
    pub shrink_per_tick: f32,
    pub displacement_threshold: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            eruption_delay: Duration::from_millis(ERUPTION_DELAY_MS),
            flash_delay: Duration::from_millis(FLASH_DELAY_MS),
            flash_duration: Duration::from_millis(FLASH_DURATION_MS),
            flash_peak: FLASH_PEAK,
            spin_y_rate: SPIN_Y_RATE,
            spin_z_rate: SPIN_Z_RATE,
            separation_speed: SEPARATION_SPEED,
            counter_rotation_speed: COUNTER_ROTATION_SPEED,
            shrink_per_tick: SHRINK_PER_TICK,
            displacement_threshold: DISPLACEMENT_THRESHOLD,
        }
    }
}

/// Transform state of the pokeball owned by the sequencer
///
/// The top half sits at `+displacement` tilted by `-tilt` around X, the
/// bottom half mirrors it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PokeballPose {
    pub spin_y: f32,
    pub spin_z: f32,
    pub scale: f32,
    pub displacement: f32,
    pub tilt: f32,
}

impl Default for PokeballPose {
    fn default() -> Self {
        Self {
            spin_y: 0.0,
            spin_z: 0.0,
            scale: 1.0,
            displacement: 0.0,
            tilt: 0.0,
        }
    }
}

/// Lifecycle of the full-screen flash overlay
#[derive(Debug, Clone, Default)]
pub enum FlashState {
    #[default]
    Unarmed,
    /// Waiting for the delay after eruption start
    Pending(Timer),
    /// Visible and fading
    Active(Timer),
    Spent,
}

impl FlashState {
    fn is_armed(&self) -> bool {
        matches!(self, FlashState::Pending(_) | FlashState::Active(_))
    }

    /// Advance the flash timers, returning `true` on the tick the flash fires
    fn advance(&mut self, delta: Duration, duration: Duration) -> bool {
        match self {
            FlashState::Pending(timer) => {
                let remaining = timer.remaining();
                if !timer.tick(delta).just_finished() {
                    return false;
                }
                // Time past the delay already counts toward the fade
                let mut fade = Timer::new(duration, TimerMode::Once);
                fade.tick(delta.saturating_sub(remaining));
                *self = if fade.just_finished() {
                    FlashState::Spent
                } else {
                    FlashState::Active(fade)
                };
                true
            }
            FlashState::Active(timer) => {
                if timer.tick(delta).just_finished() {
                    *self = FlashState::Spent;
                }
                false
            }
            FlashState::Unarmed | FlashState::Spent => false,
        }
    }

    /// Overlay opacity: ramps 0 -> 1 over the first `peak` of the fade, then back to 0
    pub fn opacity(&self, peak: f32) -> f32 {
        let FlashState::Active(timer) = self else {
            return 0.0;
        };
        let progress = timer.fraction();
        if progress < peak {
            progress / peak
        } else {
            ((1.0 - progress) / (1.0 - peak)).clamp(0.0, 1.0)
        }
    }
}

/// What changed during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub eruption_started: bool,
    pub flash_started: bool,
    /// Set on exactly one tick per activation
    pub completed: bool,
}

/// Serializable view of the sequencer for the frontend overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplashSnapshot {
    pub phase: SplashPhase,
    pub elapsed_ms: u64,
    pub displacement: f32,
    pub scale: f32,
    pub flash_opacity: f32,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    config: SequencerConfig,
    phase: SplashPhase,
    eruption: Timer,
    flash: FlashState,
    pose: PokeballPose,
    elapsed: Duration,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

impl Sequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            eruption: Timer::new(config.eruption_delay, TimerMode::Once),
            config,
            phase: SplashPhase::Idle,
            flash: FlashState::Unarmed,
            pose: PokeballPose::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// Start the sequence. Only the first call has an effect.
    pub fn activate(&mut self) {
        if self.phase == SplashPhase::Idle {
            self.phase = SplashPhase::Rotating;
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn pose(&self) -> &PokeballPose {
        &self.pose
    }

    pub fn flash(&self) -> &FlashState {
        &self.flash
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SplashPhase::Complete
    }

    /// Time since activation
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.phase == SplashPhase::Idle {
            return outcome;
        }
        self.elapsed += delta;

        if self.flash.is_armed() && self.flash.advance(delta, self.config.flash_duration) {
            outcome.flash_started = true;
            if self.phase == SplashPhase::Erupting {
                self.phase = SplashPhase::Flashing;
            }
        }

        let dt = delta.as_secs_f32();
        match self.phase {
            SplashPhase::Rotating => {
                if self.eruption.tick(delta).just_finished() {
                    self.phase = SplashPhase::Erupting;
                    self.flash =
                        FlashState::Pending(Timer::new(self.config.flash_delay, TimerMode::Once));
                    outcome.eruption_started = true;
                } else {
                    self.pose.spin_y += dt * self.config.spin_y_rate;
                    self.pose.spin_z += dt * self.config.spin_z_rate;
                }
            }
            SplashPhase::Erupting | SplashPhase::Flashing => {
                let threshold = self.config.displacement_threshold;
                if self.pose.displacement < threshold {
                    self.pose.displacement += dt * self.config.separation_speed;
                    self.pose.tilt += dt * self.config.counter_rotation_speed;
                    self.pose.scale *= self.config.shrink_per_tick;
                }
                if self.pose.displacement >= threshold {
                    self.phase = SplashPhase::Complete;
                    outcome.completed = true;
                }
            }
            SplashPhase::Idle | SplashPhase::Complete => {}
        }

        outcome
    }

    pub fn snapshot(&self) -> SplashSnapshot {
        SplashSnapshot {
            phase: self.phase,
            elapsed_ms: self.elapsed.as_millis() as u64,
            displacement: self.pose.displacement,
            scale: self.pose.scale,
            flash_opacity: self.flash.opacity(self.config.flash_peak),
            finished: self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(10);

    fn active() -> Sequencer {
        let mut seq = Sequencer::default();
        seq.activate();
        seq
    }

    /// Tick until `pred` holds, returning the number of ticks taken
    fn run_until(seq: &mut Sequencer, limit: usize, pred: impl Fn(&TickOutcome) -> bool) -> usize {
        for n in 1..=limit {
            if pred(&seq.tick(FRAME)) {
                return n;
            }
        }
        panic!("condition not reached in {limit} ticks");
    }

    #[test]
    fn test_idle_ignores_ticks() {
        let mut seq = Sequencer::default();
        let outcome = seq.tick(Duration::from_secs(10));
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(seq.phase(), SplashPhase::Idle);
        assert_eq!(*seq.pose(), PokeballPose::default());
        assert_eq!(seq.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut seq = active();
        seq.tick(Duration::from_millis(500));
        seq.activate();
        assert_eq!(seq.phase(), SplashPhase::Rotating);
        assert_eq!(seq.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn test_rotation_before_eruption() {
        let mut seq = active();
        seq.tick(Duration::from_secs(1));
        assert_eq!(seq.phase(), SplashPhase::Rotating);
        assert!((seq.pose().spin_y - 0.5).abs() < 1e-5);
        assert!((seq.pose().spin_z - 0.2).abs() < 1e-5);
        assert_eq!(seq.pose().displacement, 0.0);
        assert_eq!(seq.pose().scale, 1.0);
    }

    #[test]
    fn test_eruption_starts_at_delay() {
        let mut seq = active();
        seq.tick(Duration::from_millis(1990));
        assert_eq!(seq.phase(), SplashPhase::Rotating);
        let outcome = seq.tick(FRAME);
        assert!(outcome.eruption_started);
        assert_eq!(seq.phase(), SplashPhase::Erupting);
        assert_eq!(seq.elapsed(), Duration::from_millis(2000));
    }

    #[test]
    fn test_flash_follows_eruption() {
        let mut seq = active();
        seq.tick(Duration::from_millis(2000));
        assert_eq!(seq.phase(), SplashPhase::Erupting);

        let ticks = run_until(&mut seq, 100, |o| o.flash_started);
        assert_eq!(ticks, 10);
        assert_eq!(seq.phase(), SplashPhase::Flashing);
        assert_eq!(seq.elapsed(), Duration::from_millis(2100));
    }

    #[test]
    fn test_flash_fades_within_duration() {
        let mut seq = active();
        seq.tick(Duration::from_millis(2000));
        seq.tick(Duration::from_millis(100));
        assert!(matches!(seq.flash(), FlashState::Active(_)));

        seq.tick(Duration::from_millis(100));
        let peak = seq.snapshot().flash_opacity;
        assert!((peak - 1.0).abs() < 1e-4, "opacity at 10% was {peak}");

        seq.tick(Duration::from_millis(450));
        let mid = seq.snapshot().flash_opacity;
        assert!(mid > 0.0 && mid < 1.0);

        seq.tick(Duration::from_millis(450));
        assert!(matches!(seq.flash(), FlashState::Spent));
        assert_eq!(seq.snapshot().flash_opacity, 0.0);
    }

    #[test]
    fn test_eruption_shrinks_per_tick() {
        let mut seq = active();
        seq.tick(Duration::from_millis(2000));
        seq.tick(FRAME);
        seq.tick(FRAME);
        let pose = seq.pose();
        assert!((pose.scale - 0.98 * 0.98).abs() < 1e-6);
        assert!((pose.displacement - 0.3).abs() < 1e-5);
        assert!((pose.tilt - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut seq = active();
        let mut completions = 0;
        for _ in 0..1000 {
            let outcome = seq.tick(FRAME);
            if outcome.completed {
                completions += 1;
                assert!(seq.pose().displacement >= DISPLACEMENT_THRESHOLD);
            } else if completions == 0 {
                assert!(seq.pose().displacement < DISPLACEMENT_THRESHOLD);
            }
        }
        assert_eq!(completions, 1);
        assert!(seq.is_finished());
        assert!(seq.snapshot().finished);
    }

    #[test]
    fn test_scenario_timeline() {
        let mut seq = active();
        let erupt_tick = run_until(&mut seq, 1000, |o| o.eruption_started);
        assert_eq!(erupt_tick, 200);

        let flash_tick = run_until(&mut seq, 1000, |o| o.flash_started);
        assert_eq!(flash_tick, 10);

        let complete_tick = run_until(&mut seq, 1000, |o| o.completed);
        // 5 units at 15 units/s, minus the ticks already spent before the flash
        assert_eq!(10 + complete_tick, 34);
        assert_eq!(seq.phase(), SplashPhase::Complete);
    }

    #[test]
    fn test_phases_only_move_forward() {
        let mut seq = active();
        let mut last = seq.phase();
        for _ in 0..600 {
            seq.tick(FRAME);
            assert!(seq.phase() >= last);
            last = seq.phase();
        }
        assert_eq!(last, SplashPhase::Complete);
    }
}
