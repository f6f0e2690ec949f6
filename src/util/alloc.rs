use std::cell::Cell;
use std::rc::Rc;

/// Counts how many of the [`Tracked`] values it has handed out have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self) -> Tracked {
        Tracked(Rc::clone(&self.0))
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value which increments its [`DropCounter`] when dropped.
#[derive(Debug)]
pub struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
