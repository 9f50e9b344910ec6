//! Pointer position providers.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

/// Read-only source of the current pointer position.
///
/// `None` means "no position yet"; the engine substitutes the viewport center.
pub trait PointerSource {
    fn pointer(&self) -> Option<Vec2>;
}

/// A pointer that stays where it is put. Handy for tests and headless hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedPointer(pub Option<Vec2>);

impl FixedPointer {
    pub fn at(x: f32, y: f32) -> Self {
        FixedPointer(Some(Vec2::new(x, y)))
    }
}

impl PointerSource for FixedPointer {
    fn pointer(&self) -> Option<Vec2> {
        self.0
    }
}

impl<T: PointerSource + ?Sized> PointerSource for &T {
    fn pointer(&self) -> Option<Vec2> {
        (**self).pointer()
    }
}

/// Shared tracker: the host mutates it between frames, the engine only reads.
impl<T: PointerSource + ?Sized> PointerSource for Rc<RefCell<T>> {
    fn pointer(&self) -> Option<Vec2> {
        // A borrow conflict reads as "unknown" rather than panicking mid-frame.
        self.try_borrow().ok().and_then(|p| p.pointer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_pointer_reads_latest_value() {
        let shared = Rc::new(RefCell::new(FixedPointer::at(1.0, 2.0)));
        let reader = Rc::clone(&shared);
        assert_eq!(reader.pointer(), Some(Vec2::new(1.0, 2.0)));
        *shared.borrow_mut() = FixedPointer::at(5.0, 6.0);
        assert_eq!(reader.pointer(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn shared_pointer_borrow_conflict_is_none() {
        let shared = Rc::new(RefCell::new(FixedPointer::at(1.0, 2.0)));
        let _guard = shared.borrow_mut();
        assert_eq!(shared.pointer(), None);
    }
}
