//! A singly linked sequence container.
//!
//! [`ForwardList`] owns a chain of heap-allocated nodes, each node owning the
//! next. The front of the list is the cheap end: `push_front` and `pop_front`
//! are O(1), traversal is forward-only, and there is no tail pointer.
//!
//! Splicing anywhere else goes through cursors. A cursor starts one position
//! *before* the first element, so inserting or removing at the front needs no
//! special case:
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//! let mut cur = list.cursor_before_front_mut();
//! cur.insert_after(0);
//! assert_eq!(vec![0, 1, 2, 3], list.iter().copied().collect::<Vec<_>>());
//! ```

mod cursor;
mod iter;
mod list;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;

#[cfg(test)]
mod tests;
