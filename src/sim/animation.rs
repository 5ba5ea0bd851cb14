//! Frame cursors and beat clocks for sprite animation
//!
//! Animations are advanced by the central tick, never by per-entity timers.

use crate::error::GameError;
use crate::sprites::{Sequence, SpriteId};

/// Accumulates simulation time and fires once per `interval_ms`
#[derive(Debug, Clone)]
pub struct Beat {
    interval_ms: f32,
    elapsed_ms: f32,
}

impl Beat {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms`; true when a beat boundary was crossed
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            // Never let a long stall queue up a burst of beats
            if self.elapsed_ms >= self.interval_ms {
                self.elapsed_ms = 0.0;
            }
            true
        } else {
            false
        }
    }

    pub fn set_interval(&mut self, interval_ms: f32) {
        self.interval_ms = interval_ms;
        self.elapsed_ms = 0.0;
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }
}

/// Cursor over the currently playing sequence
#[derive(Debug, Clone)]
pub struct Animation {
    sequence: Sequence,
    next: usize,
    current: SpriteId,
}

impl Animation {
    /// Start on the first frame of `sequence`
    pub fn new(name: &'static str, sequence: Sequence) -> Result<Self, GameError> {
        let first = *sequence.first().ok_or(GameError::EmptyAnimation(name))?;
        Ok(Self {
            sequence,
            next: 0,
            current: first,
        })
    }

    /// Show the next frame of `sequence` and return its index.
    ///
    /// Switching to a sequence with different contents restarts at frame 0.
    pub fn advance(&mut self, sequence: Sequence) -> usize {
        if sequence.is_empty() {
            return 0;
        }
        if self.sequence != sequence {
            self.sequence = sequence;
            self.next = 0;
        }
        let shown = self.next.min(sequence.len() - 1);
        self.current = sequence[shown];
        self.next = (shown + 1) % sequence.len();
        shown
    }

    pub fn current(&self) -> SpriteId {
        self.current
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Sequence = &["a0", "a1", "a2"];
    const B: Sequence = &["b0", "b1"];

    #[test]
    fn test_advance_wraps() {
        let mut anim = Animation::new("a", A).unwrap();
        assert_eq!(anim.advance(A), 0);
        assert_eq!(anim.advance(A), 1);
        assert_eq!(anim.advance(A), 2);
        assert_eq!(anim.advance(A), 0);
        assert_eq!(anim.current(), "a0");
    }

    #[test]
    fn test_switch_restarts_sequence() {
        let mut anim = Animation::new("a", A).unwrap();
        anim.advance(A);
        anim.advance(A);
        assert_eq!(anim.advance(B), 0);
        assert_eq!(anim.current(), "b0");
    }

    #[test]
    fn test_equal_contents_do_not_restart() {
        let copy: Vec<SpriteId> = A.to_vec();
        let leaked: Sequence = Box::leak(copy.into_boxed_slice());
        let mut anim = Animation::new("a", A).unwrap();
        anim.advance(A);
        // Same frames from a different allocation keep the cursor
        assert_eq!(anim.advance(leaked), 1);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = Animation::new("nothing", &[]).unwrap_err();
        assert!(matches!(err, GameError::EmptyAnimation("nothing")));
    }

    #[test]
    fn test_beat_fires_on_interval() {
        let mut beat = Beat::new(100.0);
        let fired: Vec<bool> = (0..7).map(|_| beat.tick(16.0)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[6]);
    }
}
