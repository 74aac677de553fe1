use std::collections::VecDeque;

use super::types::GameEvent;

#[derive(Debug, Clone)]
pub struct PendingEvent {
    pub frame: u64,
    pub time: f64,
    pub sequence: u32,
    pub event: GameEvent,
}

/// Bounded: when full, the oldest non-lifecycle event is evicted first.
pub struct EventQueue {
    pending: VecDeque<PendingEvent>,
    next_sequence: u32,
    max_pending: usize,
    frame: u64,
    time: f64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl EventQueue {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(max_pending: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(max_pending),
            next_sequence: 0,
            max_pending: max_pending.max(1),
            frame: 0,
            time: 0.0,
        }
    }

    pub fn set_frame(&mut self, frame: u64, time: f64) {
        self.frame = frame;
        self.time = time;
    }

    pub fn push(&mut self, event: GameEvent) -> u32 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);

        if self.pending.len() >= self.max_pending {
            self.evict_oldest();
        }

        self.pending.push_back(PendingEvent {
            frame: self.frame,
            time: self.time,
            sequence,
            event,
        });

        sequence
    }

    pub fn drain(&mut self) -> Vec<PendingEvent> {
        self.pending.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter().map(|p| &p.event)
    }

    pub fn audio_cues(&self) -> impl Iterator<Item = &GameEvent> {
        self.iter().filter(|e| e.is_audio_cue())
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn evict_oldest(&mut self) {
        let idx = self
            .pending
            .iter()
            .position(|e| !e.event.is_lifecycle())
            .unwrap_or(0);
        self.pending.remove(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::WeaponId;
    use crate::session::MatchPhase;

    #[test]
    fn events_carry_frame_stamp() {
        let mut queue = EventQueue::new(8);

        queue.set_frame(3, 0.5);
        queue.push(GameEvent::ShotFired {
            weapon: WeaponId::Akm,
        });

        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].frame, 3);
        assert_eq!(drained[0].sequence, 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn eviction_keeps_lifecycle_events() {
        let mut queue = EventQueue::new(2);

        queue.push(GameEvent::PhaseChanged {
            from: MatchPhase::Menu,
            to: MatchPhase::Playing,
        });
        queue.push(GameEvent::PlayerKilled);
        queue.push(GameEvent::WeaponEmpty {
            weapon: WeaponId::Awm,
        });

        let events: Vec<_> = queue.iter().cloned().collect();
        assert_eq!(events.len(), 2);
        assert!(events[0].is_lifecycle());
        assert!(matches!(events[1], GameEvent::WeaponEmpty { .. }));
    }

    #[test]
    fn audio_cues_skip_presentation_events() {
        let mut queue = EventQueue::default();

        queue.push(GameEvent::ShotFired {
            weapon: WeaponId::M416,
        });
        queue.push(GameEvent::WeaponSwitched {
            weapon: WeaponId::Awm,
        });
        queue.push(GameEvent::ScopeChanged { scope: None });
        queue.push(GameEvent::PlayerHit {
            damage: 20,
            remaining: 80,
        });
        queue.push(GameEvent::PhaseChanged {
            from: MatchPhase::Playing,
            to: MatchPhase::GameOver,
        });

        let cues: Vec<_> = queue.audio_cues().cloned().collect();
        assert_eq!(
            cues,
            vec![
                GameEvent::ShotFired {
                    weapon: WeaponId::M416
                },
                GameEvent::PlayerHit {
                    damage: 20,
                    remaining: 80
                },
            ]
        );
        assert_eq!(queue.len(), 5);
    }
}
