//! Image carousel state for the project detail window.

use std::time::Duration;

/// How long navigation stays locked after a slide change.
pub const SLIDE_LOCK: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Wrap-around slide index over `len` images.
pub struct Carousel {
    index: usize,
    len: usize,
    animating: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            animating: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    fn start(&mut self, index: usize) -> bool {
        if self.animating || self.len == 0 {
            return false;
        }
        self.index = index;
        self.animating = true;
        true
    }

    /// Each navigation returns `true` when it started a slide change; the caller calls
    /// [`Carousel::settle`] after [`SLIDE_LOCK`].
    pub fn next(&mut self) -> bool {
        let target = if self.index + 1 >= self.len {
            0
        } else {
            self.index + 1
        };
        self.start(target)
    }

    pub fn prev(&mut self) -> bool {
        let target = if self.index == 0 {
            self.len.saturating_sub(1)
        } else {
            self.index - 1
        };
        self.start(target)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index == self.index || index >= self.len {
            return false;
        }
        self.start(index)
    }

    pub fn settle(&mut self) {
        self.animating = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.prev());
        assert_eq!(carousel.index(), 2);
        carousel.settle();

        assert!(carousel.next());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn navigation_is_locked_while_animating() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 1);

        carousel.settle();
        assert!(carousel.go_to(3));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn go_to_current_or_missing_slide_is_ignored() {
        let mut carousel = Carousel::new(2);
        assert!(!carousel.go_to(0));
        assert!(!carousel.go_to(5));
        assert!(!carousel.is_animating());
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.next());
        assert!(!carousel.has_multiple());
    }
}
