//! Circular slide navigation for one gallery instance.
//!
//! `SliderEngine` owns the current index and nothing else; everything it
//! touches in the presentation layer goes through the [`ActiveMarks`] seam,
//! so navigation semantics can be tested without rendering anything.
//! Each gallery on the page gets its own engine and its own mark store;
//! instances never share state.

/// Minimum horizontal travel, in screen pixels, before a touch release
/// counts as a swipe. Shorter drags leave the current slide in place.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Activation seam over an opaque collection of renderable items.
///
/// The engine guarantees it calls `deactivate` for the outgoing index before
/// `activate` for the incoming one, exactly once each per transition.
pub trait ActiveMarks {
    fn activate(&mut self, index: usize);
    fn deactivate(&mut self, index: usize);
}

/// Owns the bounded circular index for one gallery.
///
/// Indices passed to [`SliderEngine::go_to`] must be in range; all public
/// navigation entry points (`next`, `prev`, `swipe`, indicator clicks over
/// `0..len`) compute in-range indices by construction, so there is no error
/// path here; an out-of-range index is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderEngine {
    len: usize,
    current: usize,
}

impl SliderEngine {
    /// Create an engine over `len` slides with the first slide current.
    ///
    /// Panics if `len` is zero; a gallery always holds at least one slide.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a gallery needs at least one slide");
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        // `new` rejects zero-length galleries, so this is always false.
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    /// Move the active mark from the current slide to `index`.
    ///
    /// Exactly two mark mutations happen per call: the outgoing index is
    /// deactivated, the incoming one activated. Calling with the current
    /// index re-activates it and is harmless.
    pub fn go_to(&mut self, index: usize, marks: &mut impl ActiveMarks) {
        debug_assert!(index < self.len, "slide index {index} out of range 0..{}", self.len);
        marks.deactivate(self.current);
        self.current = index;
        marks.activate(self.current);
    }

    /// Advance one slide, wrapping from the last slide to the first.
    pub fn next(&mut self, marks: &mut impl ActiveMarks) {
        self.go_to((self.current + 1) % self.len, marks);
    }

    /// Step back one slide, wrapping from the first slide to the last.
    pub fn prev(&mut self, marks: &mut impl ActiveMarks) {
        self.go_to((self.current + self.len - 1) % self.len, marks);
    }

    /// Route a completed horizontal touch gesture.
    ///
    /// A leftward drag of more than [`SWIPE_THRESHOLD`] advances, a rightward
    /// one steps back, anything shorter is ignored. Displacements of exactly
    /// the threshold do not navigate.
    pub fn swipe(&mut self, start_x: f64, end_x: f64, marks: &mut impl ActiveMarks) {
        if end_x < start_x - SWIPE_THRESHOLD {
            self.next(marks);
        } else if end_x > start_x + SWIPE_THRESHOLD {
            self.prev(marks);
        }
    }
}

/// Concrete mark store backing a rendered gallery: one flag per slide.
///
/// Slides and indicator dots are index-aligned, so both read this one set
/// and stay consistent by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    flags: Vec<bool>,
}

impl ActiveSet {
    /// All-inactive set, used by tests that drive activation explicitly.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Set with index 0 active, the state of a freshly initialized gallery.
    pub fn with_first_active(len: usize) -> Self {
        let mut set = Self::new(len);
        if len > 0 {
            set.activate(0);
        }
        set
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    /// Index of the active flag, if exactly one is set.
    pub fn active_index(&self) -> Option<usize> {
        match self.active_count() {
            1 => self.flags.iter().position(|flag| *flag),
            _ => None,
        }
    }
}

impl ActiveMarks for ActiveSet {
    fn activate(&mut self, index: usize) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = true;
        }
    }

    fn deactivate(&mut self, index: usize) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(len: usize) -> (SliderEngine, ActiveSet) {
        (SliderEngine::new(len), ActiveSet::with_first_active(len))
    }

    fn assert_single_active(engine: &SliderEngine, marks: &ActiveSet) {
        assert_eq!(
            marks.active_count(),
            1,
            "exactly one slide must carry the active mark"
        );
        assert_eq!(
            marks.active_index(),
            Some(engine.current()),
            "active mark must sit on the engine's current index"
        );
    }

    #[test]
    fn fresh_gallery_starts_on_first_slide() {
        let (engine, marks) = fresh(3);
        assert_eq!(engine.current(), 0);
        assert!(marks.is_active(0));
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn next_advances_modulo_length_from_any_start() {
        let len = 5;
        for start in 0..len {
            for calls in 0..(2 * len + 1) {
                let (mut engine, mut marks) = fresh(len);
                engine.go_to(start, &mut marks);
                for _ in 0..calls {
                    engine.next(&mut marks);
                }
                assert_eq!(engine.current(), (start + calls) % len);
                assert_single_active(&engine, &marks);
            }
        }
    }

    #[test]
    fn prev_retreats_modulo_length_from_any_start() {
        let len = 5;
        for start in 0..len {
            for calls in 0..(2 * len + 1) {
                let (mut engine, mut marks) = fresh(len);
                engine.go_to(start, &mut marks);
                for _ in 0..calls {
                    engine.prev(&mut marks);
                }
                // (start - calls) mod len, normalized non-negative.
                let expected = (start + calls * (len - 1)) % len;
                assert_eq!(engine.current(), expected);
                assert_single_active(&engine, &marks);
            }
        }
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let (mut engine, mut marks) = fresh(3);
        engine.go_to(2, &mut marks);
        engine.next(&mut marks);
        assert_eq!(engine.current(), 0);
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let (mut engine, mut marks) = fresh(3);
        engine.prev(&mut marks);
        assert_eq!(engine.current(), 2);
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn go_to_zero_on_fresh_three_slide_gallery_keeps_first_active() {
        let (mut engine, mut marks) = fresh(3);
        engine.go_to(0, &mut marks);
        assert!(marks.is_active(0));
        assert!(!marks.is_active(1));
        assert!(!marks.is_active(2));
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn mixed_navigation_keeps_activation_singleton() {
        let (mut engine, mut marks) = fresh(4);
        engine.next(&mut marks);
        engine.next(&mut marks);
        engine.go_to(3, &mut marks);
        engine.prev(&mut marks);
        engine.swipe(200.0, 40.0, &mut marks);
        engine.go_to(1, &mut marks);
        engine.prev(&mut marks);
        engine.prev(&mut marks);
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn leftward_swipe_past_threshold_advances() {
        let (mut engine, mut marks) = fresh(3);
        engine.swipe(100.0, 40.0, &mut marks);
        assert_eq!(engine.current(), 1);
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn rightward_swipe_past_threshold_retreats() {
        let (mut engine, mut marks) = fresh(3);
        engine.swipe(40.0, 100.0, &mut marks);
        assert_eq!(engine.current(), 2);
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn short_swipe_leaves_slide_in_place() {
        let (mut engine, mut marks) = fresh(3);
        engine.swipe(50.0, 55.0, &mut marks);
        assert_eq!(engine.current(), 0);
        assert_single_active(&engine, &marks);
    }

    #[test]
    fn swipe_of_exactly_the_threshold_is_ignored() {
        let (mut engine, mut marks) = fresh(3);
        engine.swipe(100.0, 50.0, &mut marks);
        engine.swipe(50.0, 100.0, &mut marks);
        assert_eq!(engine.current(), 0);
    }

    #[test]
    fn single_slide_gallery_wraps_onto_itself() {
        let (mut engine, mut marks) = fresh(1);
        engine.next(&mut marks);
        assert_eq!(engine.current(), 0);
        engine.prev(&mut marks);
        assert_eq!(engine.current(), 0);
        assert_single_active(&engine, &marks);
    }

    #[test]
    #[should_panic(expected = "at least one slide")]
    fn zero_length_gallery_is_rejected() {
        let _ = SliderEngine::new(0);
    }
}
