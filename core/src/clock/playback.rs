/// Play/pause flag plus the generation of the ticker currently allowed to
/// update the screen. Generations are handed out by the owner of every
/// playback (see [`Generations`]) so ticks from an earlier run, or from an
/// earlier mount of the same screen, are rejected even if already in flight.
/// Monotonic source of ticker generations, shared by every screen a session mounts.
#[derive(Debug, Default)]
pub struct Generations {
    last: u64,
}

impl Generations {
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    playing: bool,
    generation: u64,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks playback as running under `generation` and returns it.
    pub fn start(&mut self, generation: u64) -> u64 {
        self.playing = true;
        self.generation = generation;
        generation
    }

    /// Returns `true` if playback was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.playing, false)
    }

    /// Flips state; `Some(next)` when playback resumed.
    pub fn toggle(&mut self, next: u64) -> Option<u64> {
        if self.playing {
            self.stop();
            None
        } else {
            Some(self.start(next))
        }
    }

    pub fn accepts(&self, generation: u64) -> bool {
        self.playing && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_takes_the_offered_generation() {
        let mut generations = Generations::default();
        let mut playback = Playback::new();
        assert_eq!(playback.toggle(generations.next()), Some(1));
        assert_eq!(playback.toggle(generations.next()), None);
        assert_eq!(playback.toggle(generations.next()), Some(3));
        assert!(playback.is_playing());
    }

    #[test]
    fn stale_generations_are_rejected() {
        let mut generations = Generations::default();
        let mut playback = Playback::new();
        let first = playback.start(generations.next());
        playback.stop();
        assert!(!playback.accepts(first));
        let second = playback.start(generations.next());
        assert!(!playback.accepts(first));
        assert!(playback.accepts(second));
    }

    #[test]
    fn a_fresh_playback_rejects_generations_from_another() {
        let mut generations = Generations::default();
        let mut earlier = Playback::new();
        let old = earlier.start(generations.next());
        let mut fresh = Playback::new();
        let current = fresh.start(generations.next());
        assert_ne!(old, current);
        assert!(!fresh.accepts(old));
    }
}
