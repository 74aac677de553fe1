pub struct FrameClock {
    max_delta: f32,
    now: f64,
    frame: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::MAX_FRAME_DELTA)
    }
}

impl FrameClock {
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    pub fn new(max_delta: f32) -> Self {
        Self {
            max_delta,
            now: 0.0,
            frame: 0,
        }
    }

    pub fn advance(&mut self, delta: f32) -> f32 {
        let dt = if delta.is_finite() {
            delta.clamp(0.0, self.max_delta)
        } else {
            0.0
        };
        self.now += f64::from(dt);
        self.frame += 1;
        dt
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

/// A point in simulation time, tagged with the match epoch it was armed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deadline {
    pub at: f64,
    pub epoch: u32,
}

impl Deadline {
    pub fn after(now: f64, seconds: f64, epoch: u32) -> Self {
        Self {
            at: now + seconds,
            epoch,
        }
    }

    pub fn is_stale(&self, epoch: u32) -> bool {
        self.epoch != epoch
    }

    pub fn is_due(&self, now: f64) -> bool {
        now >= self.at
    }

    pub fn remaining(&self, now: f64) -> f64 {
        (self.at - now).max(0.0)
    }

    pub fn poll(&self, now: f64, epoch: u32) -> DeadlineStatus {
        if self.is_stale(epoch) {
            DeadlineStatus::Stale
        } else if self.is_due(now) {
            DeadlineStatus::Due
        } else {
            DeadlineStatus::Pending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Pending,
    Due,
    Stale,
}
