//! This module is for testing only

use std::rc::Rc;
use std::cell::RefCell;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Number of `Droppable` values dropped so far.
pub type DropCounter = DropFlag<usize>;

pub struct Droppable {
    pub data: i32,
    pub dropflag: DropCounter,
}

impl Droppable {
    pub fn new(counter: &DropCounter, data: i32) -> Droppable {
        Droppable { data, dropflag: counter.clone() }
    }
}

impl Drop for Droppable {
    fn drop(&mut self) {
        *self.dropflag.borrow_mut() += 1;
    }
}

#[test]
fn dropflag() {
    let counter = DropCounter::default();
    let droppable = Droppable::new(&counter, 1);
    assert_eq!(0, *counter.borrow());
    std::mem::drop(droppable);
    assert_eq!(1, *counter.borrow());
}
