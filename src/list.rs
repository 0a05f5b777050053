use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::cursor::{Cursor, CursorMut};
use crate::iter::{Iter, IterMut};

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Heap-allocates a node. The caller becomes the sole owner of the
    /// allocation and must eventually free it with `Box::from_raw`.
    pub(crate) fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, value })))
    }
}

/// A singly linked list.
///
/// Invariant: `len` equals the number of nodes reachable from `head`, the
/// chain is acyclic, and every node is exclusively owned by its predecessor
/// (the first one by the list itself).
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

impl<T> ForwardList<T> {
    /// Creates an empty list. Does not allocate.
    pub const fn new() -> Self {
        ForwardList {
            head: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepends `value` in O(1). Never touches the rest of the chain.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::alloc(value, self.head));
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|first| {
            // Safety: `first` came from `Node::alloc` and the list is its
            // sole owner; it is unlinked before being freed.
            let node = unsafe { Box::from_raw(first.as_ptr()) };
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &node.as_ref().value })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|mut node| unsafe { &mut node.as_mut().value })
    }

    /// Frees every node. Iterative so that dropping a long list cannot
    /// overflow the stack.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a read-only cursor sitting one position before the first
    /// element.
    pub fn cursor_before_front(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns a mutating cursor sitting one position before the first
    /// element; `insert_after`/`remove_next` on it edit the front of the
    /// list.
    pub fn cursor_before_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds the replacement chain completely, then commits with a swap: if
    /// an element clone panics, `self` keeps its old contents.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Append at the tail link so the input order is preserved.
        let mut tail: *mut Link<T> = &mut self.head;
        unsafe {
            while let Some(node) = *tail {
                tail = &mut (*node.as_ptr()).next;
            }
            for value in iter {
                let node = Node::alloc(value, None);
                *tail = Some(node);
                tail = &mut (*node.as_ptr()).next;
                self.len += 1;
            }
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || (self.len == other.len && self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    /// Lexicographic over the element sequences; a strict prefix is less.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
