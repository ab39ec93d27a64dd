use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use super::Iter;
use crate::util::error::{AllocationError, OutOfMemory};

/// An owning link to the following node, or the end of a chain.
pub type Link = Option<Box<ListNode>>;

/// One element of a singly-linked chain of `i32` values.
///
/// Each node exclusively owns the node after it, so a `&ListNode` is also a view of the whole
/// remainder of the chain, and every traversal method here starts from `self` and runs to the end.
///
/// Nodes are allocated one at a time and are only ever relinked, never moved or copied, so a node
/// keeps its address for its entire lifetime. [`LinkedList::sort`](super::LinkedList::sort) relies
/// on this to reorder a list without changing the identity of any node in it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes from `self` to the end of the chain.
/// - `i`: The index of the node in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `create` | `O(1)` |
/// | `end` | `O(n)` |
/// | `size` | `O(n)` |
/// | `index` | `O(i)` |
/// | `find` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `map` | `O(n)` |
pub struct ListNode {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

impl ListNode {
    /// Allocates a single node holding `value`, with no following node.
    ///
    /// # Errors
    /// Returns [`AllocationError::OutOfMemory`] if the allocator can't provide space for the node.
    /// Unlike [`Box::new`], this never aborts the process.
    pub fn create(value: i32) -> Result<Box<ListNode>, AllocationError> {
        let layout = Layout::new::<ListNode>();

        // SAFETY: ListNode contains an i32 and a pointer, so the layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) }.cast::<ListNode>();
        let ptr = NonNull::new(raw).ok_or(OutOfMemory)?;

        // SAFETY: ptr is non-null and was allocated by the global allocator with the layout of a
        // ListNode, which is exactly what Box expects to own. It is initialized before the Box is
        // constructed.
        unsafe {
            ptr.write(ListNode { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// Returns the value held by this node.
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns a mutable reference to the value held by this node.
    pub const fn value_mut(&mut self) -> &mut i32 {
        &mut self.value
    }

    /// Returns the node following this one, if there is one.
    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }

    /// Returns the node following this one mutably, if there is one.
    pub fn next_mut(&mut self) -> Option<&mut ListNode> {
        self.next.as_deref_mut()
    }

    /// Returns the last node reachable from this one, which is `self` for a node with no successor.
    pub fn end(&self) -> &ListNode {
        let mut node = self;
        while let Some(next) = node.next() {
            node = next;
        }
        node
    }

    /// Mutable counterpart of [`end`](ListNode::end).
    pub fn end_mut(&mut self) -> &mut ListNode {
        let mut node = self;
        loop {
            match node.next {
                Some(ref mut next) => node = next.as_mut(),
                None => return node,
            }
        }
    }

    /// Counts the nodes from this one to the end of the chain, including `self`.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns the node `index` places after this one, where `self` is index 0, or [`None`] if
    /// the chain ends first.
    pub fn index(&self, index: usize) -> Option<&ListNode> {
        self.iter().nth(index)
    }

    /// Mutable counterpart of [`index`](ListNode::index).
    pub fn index_mut(&mut self, index: usize) -> Option<&mut ListNode> {
        let mut node = self;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    /// Returns the first node, starting from this one, for which `predicate` holds.
    pub fn find<P>(&self, mut predicate: P) -> Option<&ListNode>
    where
        P: FnMut(&ListNode) -> bool,
    {
        self.iter().find(|node| predicate(node))
    }

    /// Mutable counterpart of [`find`](ListNode::find).
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut ListNode>
    where
        P: FnMut(&ListNode) -> bool,
    {
        let mut node = self;
        loop {
            if predicate(node) {
                return Some(node);
            }
            node = node.next.as_deref_mut()?;
        }
    }

    /// Returns true if this node or any node after it holds `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.find(|node| node.value == value).is_some()
    }

    /// Invokes `visit` on this node and every node after it, in order, exactly once each.
    ///
    /// `visit` may change the value of the node it is given. The successor of the visited node is
    /// read after `visit` returns.
    pub fn map<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut ListNode),
    {
        let mut node = Some(self);
        while let Some(curr) = node {
            visit(curr);
            node = curr.next.as_deref_mut();
        }
    }

    /// Releases this node and every node after it.
    pub fn free(self: Box<ListNode>) {
        drop(self);
    }

    pub(crate) const fn iter(&self) -> Iter<'_> {
        Iter::new(Some(self))
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        // Unlink the chain one node at a time, otherwise each Box would drop its successor
        // recursively and a long enough list would overflow the stack.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Debug for ListNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("value", &self.value)
            .field("next", &self.next().map(ListNode::value))
            .finish()
    }
}
