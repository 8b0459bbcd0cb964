//! Frame-counting timer
//!
//! `Ticker` answers "should this happen on this frame?" for effects that
//! recur every N frames: particle radius decay, blinking cursors, repeated
//! key actions. It counts calls rather than wall-clock time, so behavior is
//! deterministic under the fixed-rate screen loop.

/// Returns `true` once every `interval` calls to [`tick`](Ticker::tick).
///
/// With the default start offset of 0 the very first `tick()` fires
/// immediately; afterwards the ticker reloads with `initial_interval` (which
/// defaults to `interval`) and then `interval` for every later cycle.
///
/// # Example
///
/// ```
/// use sdl2_tools::Ticker;
///
/// let mut every_third = Ticker::new(3);
/// let fired: Vec<bool> = (0..7).map(|_| every_third.tick()).collect();
/// assert_eq!(fired, [true, false, false, true, false, false, true]);
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: u32,
    initial_interval: u32,
    once: bool,
    start_offset: i64,
    remaining: i64,
    first: bool,
}

impl Ticker {
    /// Creates a ticker that fires once every `interval` calls.
    pub fn new(interval: u32) -> Ticker {
        Ticker {
            interval,
            initial_interval: interval,
            once: false,
            start_offset: 0,
            remaining: 0,
            first: true,
        }
    }

    /// Overrides the countdown used between the first and second firing.
    pub fn with_initial(mut self, initial_interval: u32) -> Ticker {
        self.initial_interval = initial_interval;
        self
    }

    /// Fire a single time, then return `false` forever (until reset).
    pub fn once(mut self) -> Ticker {
        self.once = true;
        self
    }

    /// Delays the first firing by `offset` calls (default 0: the first
    /// `tick()` fires immediately).
    pub fn with_start(mut self, offset: u32) -> Ticker {
        self.start_offset = offset as i64;
        self.remaining = offset as i64;
        self
    }

    /// Counts one call; returns `true` when the interval has elapsed.
    pub fn tick(&mut self) -> bool {
        if !self.first && self.once {
            return false;
        }
        self.remaining -= 1;
        if self.remaining <= 0 {
            self.remaining = if self.first {
                self.initial_interval as i64
            } else {
                self.interval as i64
            };
            self.first = false;
            true
        } else {
            false
        }
    }

    /// Restores the start offset and first-fire state.
    pub fn reset(&mut self) {
        self.remaining = self.start_offset;
        self.first = true;
    }

    /// Like [`reset`](Ticker::reset) but with a one-off start offset; the
    /// offset configured at construction is unchanged.
    pub fn reset_with(&mut self, offset: u32) {
        self.remaining = offset as i64;
        self.first = true;
    }

    /// Ticks while `condition` holds; resets (and returns `false`) when it
    /// does not.
    ///
    /// Useful for "repeat while the key is held" behavior: the ticker fires
    /// immediately when the key goes down and re-arms when it is released.
    pub fn tick_or_reset(&mut self, condition: bool) -> bool {
        if condition {
            self.tick()
        } else {
            self.reset();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(ticker: &mut Ticker, calls: usize) -> Vec<bool> {
        (0..calls).map(|_| ticker.tick()).collect()
    }

    #[test]
    fn test_fires_immediately_then_every_interval() {
        let mut ticker = Ticker::new(4);
        assert_eq!(
            collect(&mut ticker, 9),
            [true, false, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn test_interval_of_one_fires_every_call() {
        let mut ticker = Ticker::new(1);
        assert_eq!(collect(&mut ticker, 3), [true, true, true]);
    }

    #[test]
    fn test_initial_interval_applies_to_second_firing_only() {
        let mut ticker = Ticker::new(2).with_initial(4);
        // First fires immediately, second after 4 calls, then every 2.
        assert_eq!(
            collect(&mut ticker, 9),
            [true, false, false, false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let mut ticker = Ticker::new(3).once();
        assert_eq!(collect(&mut ticker, 5), [true, false, false, false, false]);
    }

    #[test]
    fn test_once_rearms_after_reset() {
        let mut ticker = Ticker::new(3).once();
        assert!(ticker.tick());
        assert!(!ticker.tick());
        ticker.reset();
        assert!(ticker.tick());
    }

    #[test]
    fn test_start_offset_delays_first_firing() {
        let mut ticker = Ticker::new(3).with_start(2);
        assert_eq!(collect(&mut ticker, 6), [false, true, false, false, true, false]);
    }

    #[test]
    fn test_reset_restores_start_offset() {
        let mut ticker = Ticker::new(3).with_start(2);
        assert!(!ticker.tick());
        assert!(ticker.tick());
        ticker.reset();
        assert!(!ticker.tick());
        assert!(ticker.tick());
    }

    #[test]
    fn test_reset_with_override_is_one_off() {
        let mut ticker = Ticker::new(2);
        assert!(ticker.tick());
        ticker.reset_with(3);
        assert_eq!(collect(&mut ticker, 3), [false, false, true]);
        // A plain reset afterwards goes back to the constructed offset (0).
        ticker.reset();
        assert!(ticker.tick());
    }

    #[test]
    fn test_tick_or_reset() {
        let mut ticker = Ticker::new(3);
        assert!(ticker.tick_or_reset(true));
        assert!(!ticker.tick_or_reset(true));
        // Condition drops: reset, no firing.
        assert!(!ticker.tick_or_reset(false));
        // Condition returns: fires immediately again.
        assert!(ticker.tick_or_reset(true));
    }
}
