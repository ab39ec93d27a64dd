use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, Link, ListNode};
#[doc(inline)]
pub use crate::util::error::{AllocationError, IndexOutOfBounds};
use crate::util::fmt::DebugIter;

/// A singly-linked list of `i32` values, held through its head node. See also: [`ListNode`] for
/// the operations that work on any suffix of a list.
///
/// An empty list has no head. Every operation that would otherwise dereference a missing node
/// instead does nothing, returns [`None`] or returns `false`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(n)` |
/// | `end` | `O(n)` |
/// | `append` | `O(n)` |
/// | `prepend` | `O(1)` |
/// | `index` | `O(i)` |
/// | `find` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `sort` | `O(n^2)`, `O(n)`* |
///
/// \* If the list is already sorted, `sort` finishes after a single pass.
#[derive(Default)]
pub struct LinkedList {
    pub(crate) head: Link,
}

impl LinkedList {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList {
        LinkedList { head: None }
    }

    /// Adopts an existing chain, with `head` as the first node.
    pub fn from_node(head: Box<ListNode>) -> LinkedList {
        LinkedList { head: Some(head) }
    }

    /// Builds a list holding `values` in the same order.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if any node can't be allocated. Nodes allocated before the
    /// failure are released.
    pub fn try_from_values(values: &[i32]) -> Result<LinkedList, AllocationError> {
        let mut list = LinkedList::new();
        for &value in values.iter().rev() {
            list.prepend(value)?;
        }
        Ok(list)
    }

    /// Releases the list's ownership of its chain, returning the head node.
    pub fn into_head(mut self) -> Link {
        self.head.take()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first node of the list, if it exists.
    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    /// Returns the first node of the list mutably, if it exists.
    pub fn head_mut(&mut self) -> Option<&mut ListNode> {
        self.head.as_deref_mut()
    }

    /// Returns the last node of the list, if it exists.
    pub fn end(&self) -> Option<&ListNode> {
        self.head().map(ListNode::end)
    }

    /// Returns the last node of the list mutably, if it exists.
    pub fn end_mut(&mut self) -> Option<&mut ListNode> {
        self.head_mut().map(ListNode::end_mut)
    }

    /// Adds `value` to the back of the list. The tail is located by walking the list.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the new node can't be allocated, in which case the list
    /// is left unchanged.
    pub fn append(&mut self, value: i32) -> Result<(), AllocationError> {
        let node = ListNode::create(value)?;

        let mut slot = &mut self.head;
        while let Some(curr) = slot {
            slot = &mut curr.next;
        }
        *slot = Some(node);

        Ok(())
    }

    /// Adds `value` to the front of the list, making it the new head.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the new node can't be allocated, in which case the list
    /// is left unchanged.
    pub fn prepend(&mut self, value: i32) -> Result<(), AllocationError> {
        let mut node = ListNode::create(value)?;
        node.next = self.head.take();
        self.head = Some(node);
        Ok(())
    }

    /// Invokes `visit` on every node in the list, front to back. Does nothing for an empty list.
    pub fn map<F>(&mut self, visit: F)
    where
        F: FnMut(&mut ListNode),
    {
        if let Some(head) = self.head_mut() {
            head.map(visit);
        }
    }

    /// Counts the nodes in the list.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns the node at the zero-based position `index`, or [`None`] if the list is shorter.
    pub fn index(&self, index: usize) -> Option<&ListNode> {
        self.head().and_then(|head| head.index(index))
    }

    /// Returns the node at the zero-based position `index`, returning an [`Err`] with the length of
    /// the list if it is out of bounds.
    pub fn try_index(&self, index: usize) -> Result<&ListNode, IndexOutOfBounds> {
        self.index(index).ok_or_else(|| IndexOutOfBounds {
            index,
            len: self.size(),
        })
    }

    /// Mutable counterpart of [`index`](LinkedList::index).
    pub fn index_mut(&mut self, index: usize) -> Option<&mut ListNode> {
        self.head_mut().and_then(|head| head.index_mut(index))
    }

    /// Returns the first node for which `predicate` holds.
    pub fn find<P>(&self, predicate: P) -> Option<&ListNode>
    where
        P: FnMut(&ListNode) -> bool,
    {
        self.head().and_then(|head| head.find(predicate))
    }

    /// Mutable counterpart of [`find`](LinkedList::find).
    pub fn find_mut<P>(&mut self, predicate: P) -> Option<&mut ListNode>
    where
        P: FnMut(&ListNode) -> bool,
    {
        self.head_mut().and_then(|head| head.find_mut(predicate))
    }

    /// Returns true if any node in the list holds `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.head().is_some_and(|head| head.contains(value))
    }

    /// Sorts the list in ascending order, in place.
    ///
    /// This is a bubble sort over the links themselves: each pass walks adjacent pairs and, where
    /// the second node holds a strictly smaller value than the first, relinks the two so they
    /// trade places. Values are never copied between nodes, so each node keeps its identity and
    /// simply ends up at a new position. Equal values are never swapped, which keeps ties in their
    /// original relative order. Passes repeat until one completes without a swap.
    pub fn sort(&mut self) {
        loop {
            let mut swapped = false;
            // The link that owns the first node of the pair under inspection.
            let mut slot = &mut self.head;

            loop {
                let Some(mut curr) = slot.take() else { break };
                let Some(mut next) = curr.next.take() else {
                    *slot = Some(curr);
                    break;
                };

                if next.value < curr.value {
                    // slot -> next -> curr -> (rest)
                    curr.next = next.next.take();
                    next.next = Some(curr);
                    *slot = Some(next);
                    swapped = true;
                } else {
                    curr.next = Some(next);
                    *slot = Some(curr);
                }

                // Either way, the node now in the slot precedes the next pair to compare.
                slot = match slot {
                    Some(node) => &mut node.next,
                    None => break,
                };
            }

            if !swapped {
                break;
            }
        }
    }

    /// Releases every node in the list.
    pub fn free(self) {
        drop(self);
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter::new(self.head())
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter()
            .map(ListNode::value)
            .eq(other.iter().map(ListNode::value))
    }
}

impl Eq for LinkedList {}

impl Debug for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter::new(self.iter().map(ListNode::value)))
            .field("size", &self.size())
            .finish()
    }
}

impl Display for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, node) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node.value)?;
        }
        write!(f, "]")
    }
}
