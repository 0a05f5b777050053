use std::fmt;
use std::ptr::{self, NonNull};

use crate::list::{ForwardList, Link, Node};

/// Cursor position. The only transition is "advance to the successor";
/// `End` is terminal.
enum Pos<T> {
    /// One position before the first element (designates the list's own head
    /// link, so front insertion needs no special case).
    BeforeHead,
    At(NonNull<Node<T>>),
    End,
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for Pos<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pos<T> {}

impl<T> PartialEq for Pos<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pos::BeforeHead, Pos::BeforeHead) | (Pos::End, Pos::End) => true,
            (Pos::At(a), Pos::At(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Pos<T> {}

impl<T> Pos<T> {
    /// The next position, given the head link of the list this position
    /// belongs to. A `Node` position must reference a live cell of that
    /// list.
    fn successor(self, head: Link<T>) -> Pos<T> {
        match self {
            Pos::BeforeHead => match head {
                Some(node) => Pos::At(node),
                None => Pos::End,
            },
            Pos::At(node) => match unsafe { node.as_ref().next } {
                Some(node) => Pos::At(node),
                None => Pos::End,
            },
            Pos::End => Pos::End,
        }
    }
}

/// Read-only cursor over a [`ForwardList`].
///
/// Starts one position before the first element (see
/// [`ForwardList::cursor_before_front`]), where [`Cursor::current`] is
/// `None`; each [`Cursor::move_next`] advances one cell until the
/// past-the-end state is reached.
pub struct Cursor<'a, T> {
    pos: Pos<T>,
    list: &'a ForwardList<T>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Compares by referenced-cell identity, never by value. Two past-the-end
/// cursors always compare equal; before-front cursors compare equal only on
/// the same list.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.pos, other.pos) {
            (Pos::BeforeHead, Pos::BeforeHead) => ptr::eq(self.list, other.list),
            _ => self.pos == other.pos,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Pos::BeforeHead => write!(f, "Cursor(before-front of {:p})", self.list),
            Pos::At(node) => write!(f, "Cursor({:p})", node),
            Pos::End => f.write_str("Cursor(end)"),
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>) -> Self {
        Cursor {
            pos: Pos::BeforeHead,
            list,
        }
    }

    /// `true` once the cursor has advanced past the last element.
    pub fn at_end(&self) -> bool {
        matches!(self.pos, Pos::End)
    }

    /// Advances one cell. Advancing a past-the-end cursor is a programmer
    /// error; it is debug-asserted and stays put otherwise.
    pub fn move_next(&mut self) {
        debug_assert!(!self.at_end(), "advanced a past-the-end cursor");
        self.pos = self.pos.successor(self.list.head);
    }

    /// The element under the cursor; `None` at the before-front and
    /// past-the-end positions.
    pub fn current(&self) -> Option<&'a T> {
        match self.pos {
            Pos::At(node) => Some(unsafe { &node.as_ref().value }),
            _ => None,
        }
    }

    /// The element one cell ahead, without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        match self.pos.successor(self.list.head) {
            Pos::At(node) => Some(unsafe { &node.as_ref().value }),
            _ => None,
        }
    }
}

/// Mutating cursor over a [`ForwardList`].
///
/// Borrows the list mutably for its whole lifetime, so no other iterator or
/// cursor can observe the list while edits are in flight. All edits happen
/// *after* the cursor's cell: starting before the first element makes
/// front insertion and removal the same code path as any other position.
pub struct CursorMut<'a, T> {
    pos: Pos<T>,
    list: &'a mut ForwardList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>) -> Self {
        CursorMut {
            pos: Pos::BeforeHead,
            list,
        }
    }

    /// `true` once the cursor has advanced past the last element.
    pub fn at_end(&self) -> bool {
        matches!(self.pos, Pos::End)
    }

    /// Read-only view at the same position, e.g. for comparing positions.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            pos: self.pos,
            list: &*self.list,
        }
    }

    /// The link from the cursor's cell to its successor, or `None` past the
    /// end.
    fn next_link(&mut self) -> Option<&mut Link<T>> {
        match self.pos {
            Pos::BeforeHead => Some(&mut self.list.head),
            Pos::At(node) => Some(unsafe { &mut (*node.as_ptr()).next }),
            Pos::End => None,
        }
    }

    /// Advances one cell. Advancing a past-the-end cursor is a programmer
    /// error; it is debug-asserted and stays put otherwise.
    pub fn move_next(&mut self) {
        debug_assert!(!self.at_end(), "advanced a past-the-end cursor");
        self.pos = self.pos.successor(self.list.head);
    }

    /// The element under the cursor; `None` at the before-front and
    /// past-the-end positions.
    pub fn current(&mut self) -> Option<&mut T> {
        match self.pos {
            Pos::At(node) => Some(unsafe { &mut (*node.as_ptr()).value }),
            _ => None,
        }
    }

    /// The element one cell ahead, without moving.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        match self.pos.successor(self.list.head) {
            Pos::At(node) => Some(unsafe { &mut (*node.as_ptr()).value }),
            _ => None,
        }
    }

    /// Splices a new element in directly after the cursor, in O(1). The
    /// cursor does not move; one `move_next` lands on the new element. No
    /// existing position is disturbed.
    ///
    /// Inserting after a past-the-end cursor is a programmer error; it is
    /// debug-asserted and drops `value` without touching the list otherwise.
    pub fn insert_after(&mut self, value: T) {
        debug_assert!(!self.at_end(), "inserted after a past-the-end cursor");
        let link = match self.next_link() {
            Some(link) => link,
            None => return,
        };
        // The node is fully built before any link is rewritten.
        *link = Some(Node::alloc(value, *link));
        self.list.len += 1;
    }

    /// Unlinks and returns the cursor's successor, in O(1); `None` when
    /// there is none. The cursor stays on its cell, now linked to the
    /// removed node's former successor.
    pub fn remove_next(&mut self) -> Option<T> {
        let link = self.next_link()?;
        let removed = (*link)?;
        // Safety: the chain exclusively owns `removed`; ownership moves to
        // the box and the chain is relinked before the box drops.
        let node = unsafe { Box::from_raw(removed.as_ptr()) };
        *link = node.next;
        self.list.len -= 1;
        Some(node.value)
    }
}
