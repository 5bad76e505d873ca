use crate::{IndexOutOfBounds, NoSuchElement, Pattern};
use std::fmt::{Debug, Display};
use std::iter::{FromIterator, Rev};
use std::ops::{Index, IndexMut, Range};

/// Owning, contiguous, growable sequence backed by a `Vec`.
///
/// Most `Vec` operations are available, some under different names. Positional access is
/// always bounds-checked: `at` returns `IndexOutOfBounds` and `seq[i]` panics with the same
/// kind of message, and peeking into an empty sequence returns `NoSuchElement`.
///
/// Positions are plain indices. A position, and any raw pointer obtained with `raw_ptr_begin`,
/// is only valid until the next mutating call: insertion, removal, resize or a capacity change
/// may shift elements or move the whole buffer. References are protected from this by the
/// borrow checker.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seq<T> {
    inner: Vec<T>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    pub fn new() -> Seq<T> {
        Seq { inner: Vec::new() }
    }

    /// Creates an empty sequence with room for at least `n` elements.
    pub fn with_cap(n: usize) -> Seq<T> {
        Seq { inner: Vec::with_capacity(n) }
    }

    /// Constructs a sequence with as many elements as `items` yields, each converted into `T`,
    /// in the same order.
    pub fn from_range<I>(items: I) -> Seq<T> where I: IntoIterator, I::Item: Into<T> {
        Seq { inner: items.into_iter().map(Into::into).collect() }
    }

    /// Constructs a sequence with a copy of each element in `other`, in the same order.
    pub fn from_seq(other: &Seq<T>) -> Seq<T> where T: Clone {
        other.clone()
    }

    /// Constructs a sequence with a copy of each element in `list`, in the same order.
    pub fn from_list(list: &[T]) -> Seq<T> where T: Clone {
        Seq { inner: list.to_vec() }
    }

    /// Constructs a sequence of `n` copies of `value`.
    pub fn of(n: usize, value: T) -> Seq<T> where T: Clone {
        Seq { inner: vec![value; n] }
    }

    /// Constructs a sequence of `n` default values.
    pub fn of_default(n: usize) -> Seq<T> where T: Default {
        let mut inner = Vec::with_capacity(n);
        inner.resize_with(n, T::default);
        Seq { inner }
    }

    /// Returns a reference to the element at position `i`.
    pub fn at(&self, i: usize) -> Result<&T, IndexOutOfBounds> {
        let size = self.inner.len();
        self.inner.get(i).ok_or_else(|| {
            debug!("at: invalid index {} for size {}", i, size);
            IndexOutOfBounds::invalid_index(i, size)
        })
    }

    /// Returns a mutable reference to the element at position `i`.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, IndexOutOfBounds> {
        let size = self.inner.len();
        self.inner.get_mut(i).ok_or_else(|| {
            debug!("at_mut: invalid index {} for size {}", i, size);
            IndexOutOfBounds::invalid_index(i, size)
        })
    }

    /// Returns the first element.
    pub fn peek_front(&self) -> Result<&T, NoSuchElement> {
        self.inner.first().ok_or_else(|| {
            debug!("peek_front: sequence is empty");
            NoSuchElement::empty_sequence()
        })
    }

    pub fn peek_front_mut(&mut self) -> Result<&mut T, NoSuchElement> {
        self.inner.first_mut().ok_or_else(|| {
            debug!("peek_front_mut: sequence is empty");
            NoSuchElement::empty_sequence()
        })
    }

    /// Returns the last element.
    pub fn peek_back(&self) -> Result<&T, NoSuchElement> {
        self.inner.last().ok_or_else(|| {
            debug!("peek_back: sequence is empty");
            NoSuchElement::empty_sequence()
        })
    }

    pub fn peek_back_mut(&mut self) -> Result<&mut T, NoSuchElement> {
        self.inner.last_mut().ok_or_else(|| {
            debug!("peek_back_mut: sequence is empty");
            NoSuchElement::empty_sequence()
        })
    }

    /// Removes and returns the last element, or `None` if the sequence is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Appends `value` after the current last element.
    pub fn push_back(&mut self, value: T) {
        self.tracked("push_back", |inner| inner.push(value))
    }

    /// Constructs a new element from `args` at position `at` and returns its position.
    ///
    /// # Panics
    ///
    /// Panics if `at > size`.
    pub fn emplace(&mut self, at: usize, args: impl Into<T>) -> usize {
        self.insert(at, args.into())
    }

    /// Constructs a new element from `args` after the current last element.
    pub fn emplace_back(&mut self, args: impl Into<T>) {
        self.push_back(args.into())
    }

    /// Inserts `value` at position `at` and returns `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at > size`.
    pub fn insert(&mut self, at: usize, value: T) -> usize {
        self.tracked("insert", |inner| inner.insert(at, value));
        at
    }

    /// Inserts a copy of each element in `list`, in order, at position `at`.
    /// Returns the position of the first inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `at > size`.
    pub fn insert_list(&mut self, at: usize, list: &[T]) -> usize where T: Clone {
        self.tracked("insert_list", |inner| drop(inner.splice(at..at, list.iter().cloned())));
        at
    }

    /// Inserts the items of `items`, converted into `T`, at position `at`.
    /// Returns the position of the first inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `at > size`.
    pub fn insert_range<I>(&mut self, at: usize, items: I) -> usize where I: IntoIterator, I::Item: Into<T> {
        self.tracked("insert_range", |inner| drop(inner.splice(at..at, items.into_iter().map(Into::into))));
        at
    }

    /// Inserts `n` copies of `value` at position `at`.
    /// Returns the position of the first inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `at > size`.
    pub fn fill(&mut self, at: usize, n: usize, value: T) -> usize where T: Clone {
        self.tracked("fill", |inner| drop(inner.splice(at..at, std::iter::repeat(value).take(n))));
        at
    }

    /// Removes the element at position `at` and returns the position of the element that
    /// followed it, which is `at` after the shift.
    ///
    /// # Panics
    ///
    /// Panics if `at >= size`.
    pub fn remove(&mut self, at: usize) -> usize {
        self.inner.remove(at);
        at
    }

    /// Removes the elements in `range` and returns the position that followed the removed span.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end or the end is greater than `size`.
    pub fn remove_range(&mut self, range: Range<usize>) -> usize {
        let start = range.start;
        drop(self.inner.drain(range));
        start
    }

    /// Removes the element at position `at` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `at >= size`.
    pub fn take(&mut self, at: usize) -> T {
        self.inner.remove(at)
    }

    /// Removes all elements, leaving the capacity unspecified.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Replaces the contents with the items of `items`, converted into `T`.
    pub fn reassign<I>(&mut self, items: I) where I: IntoIterator, I::Item: Into<T> {
        self.tracked("reassign", |inner| {
            inner.clear();
            inner.extend(items.into_iter().map(Into::into));
        })
    }

    /// Replaces the contents with a copy of the contents of `other`.
    pub fn reassign_seq(&mut self, other: &Seq<T>) where T: Clone {
        self.tracked("reassign_seq", |inner| inner.clone_from(&other.inner))
    }

    /// Replaces the contents with a copy of `list`.
    pub fn reassign_list(&mut self, list: &[T]) where T: Clone {
        self.tracked("reassign_list", |inner| {
            inner.clear();
            inner.extend_from_slice(list);
        })
    }

    /// Resizes to exactly `n` elements, padding with copies of `value`.
    pub fn resize(&mut self, n: usize, value: T) where T: Clone {
        self.tracked("resize", |inner| inner.resize(n, value))
    }

    /// Resizes to exactly `n` elements, padding with default values.
    pub fn resize_default(&mut self, n: usize) where T: Default {
        self.tracked("resize_default", |inner| inner.resize_with(n, T::default))
    }

    /// Ensures the capacity is at least `n` without changing the size.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `n` is greater than `max_size()`. Aborts if the
    /// allocator fails.
    pub fn request_cap(&mut self, n: usize) {
        self.tracked("request_cap", |inner| {
            let additional = n.saturating_sub(inner.len());
            inner.reserve(additional);
        })
    }

    /// Reduces the capacity to fit the size as closely as the allocator allows.
    pub fn shrink(&mut self) {
        self.tracked("shrink", |inner| inner.shrink_to_fit())
    }

    /// Exchanges the contents with `other`. Sizes may differ. No element is moved or copied,
    /// the buffers change owners.
    pub fn swap(&mut self, other: &mut Seq<T>) {
        std::mem::swap(&mut self.inner, &mut other.inner)
    }

    /// Rewrites every element after the first with `pattern` applied to the element right
    /// before it, left to right, so each step sees the value written by the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` panics. The built-in `Incr`, `Decr` and `Mult` use the plain
    /// arithmetic operators, so integer overflow panics in debug builds and wraps in release.
    pub fn with<P>(&mut self, pattern: P) -> &mut Self where P: Pattern<T> {
        for i in 1..self.inner.len() {
            let next = pattern.next(&self.inner[i - 1]);
            self.inner[i] = next;
        }
        self
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Theoretical upper bound on the number of elements.
    pub fn max_size(&self) -> usize {
        match std::mem::size_of::<T>() {
            0 => usize::MAX,
            item_size => isize::MAX as usize / item_size,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    /// Iterates from the last element to the first.
    pub fn iter_rev(&self) -> Rev<std::slice::Iter<'_, T>> {
        self.inner.iter().rev()
    }

    pub fn iter_rev_mut(&mut self) -> Rev<std::slice::IterMut<'_, T>> {
        self.inner.iter_mut().rev()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Pointer to the start of the contiguous buffer, for APIs that expect a flat array.
    /// Invalidated by any mutating call.
    pub fn raw_ptr_begin(&self) -> *const T {
        self.inner.as_ptr()
    }

    pub fn raw_ptr_begin_mut(&mut self) -> *mut T {
        self.inner.as_mut_ptr()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    #[inline(always)]
    fn tracked<R>(&mut self, op: &'static str, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let before = self.inner.capacity();
        let result = f(&mut self.inner);
        trace_realloc!(op, before, self.inner.capacity());
        result
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq::new()
    }
}

impl<T> Index<usize> for Seq<T> {
    type Output = T;

    /// Bounds-checked like `at`, panics with the `IndexOutOfBounds` message.
    fn index(&self, i: usize) -> &T {
        match self.inner.get(i) {
            Some(item) => item,
            None => panic!("{}", IndexOutOfBounds::index_too_large(i, self.inner.len())),
        }
    }
}

impl<T> IndexMut<usize> for Seq<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        let size = self.inner.len();
        match self.inner.get_mut(i) {
            Some(item) => item,
            None => panic!("{}", IndexOutOfBounds::index_too_large(i, size)),
        }
    }
}

impl<T> Display for Seq<T> where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Debug for Seq<T> where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(inner: Vec<T>) -> Self {
        Seq { inner }
    }
}

impl<T> From<Seq<T>> for Vec<T> {
    fn from(seq: Seq<T>) -> Self {
        seq.inner
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(list: [T; N]) -> Self {
        Seq { inner: Vec::from(list) }
    }
}

impl<T> From<&[T]> for Seq<T> where T: Clone {
    fn from(list: &[T]) -> Self {
        Seq::from_list(list)
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Seq { inner: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        self.tracked("extend", |inner| inner.extend(iter))
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Seq<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

impl<T> AsRef<[T]> for Seq<T> {
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}

impl<T> AsMut<[T]> for Seq<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.inner
    }
}

impl<T> PartialEq<[T]> for Seq<T> where T: PartialEq {
    fn eq(&self, other: &[T]) -> bool {
        self.inner[..] == *other
    }
}

impl<T> PartialEq<Vec<T>> for Seq<T> where T: PartialEq {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.inner == *other
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for Seq<T> where T: PartialEq {
    fn eq(&self, other: &[T; N]) -> bool {
        self.inner[..] == other[..]
    }
}

/// Creates a `Seq` from a literal list, or `n` copies of a value with `seq![value; n]`.
#[macro_export]
macro_rules! seq {
    () => (
        $crate::Seq::new()
    );
    ($value:expr; $n:expr) => (
        $crate::Seq::of($n, $value)
    );
    ($($item:expr),+ $(,)?) => (
        $crate::Seq::from(::std::vec![$($item),+])
    );
}
