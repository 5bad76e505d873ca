/*!

A `Vec` facade with bounds-checked access, renamed operations and sequence patterns.

```
use seqkit::{seq, Incr, Seq};

let mut numbers: Seq<i32> = seq![1; 4];
numbers.with(Incr::default());
assert_eq!("[1, 2, 3, 4]", numbers.to_string());
assert!(numbers.at(4).is_err());
assert_eq!(Some(4), numbers.pop_back());
```

*/

mod logging;
mod error;
mod pattern;
mod seq;
mod traits;

pub use error::{NoSuchElement, IndexOutOfBounds, SeqError};
pub use pattern::{Pattern, Incr, Decr, Mult};
pub use seq::Seq;
pub use traits::SeqIterator;

#[cfg(test)]
pub mod dropflag;
