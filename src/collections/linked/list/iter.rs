use std::iter::FusedIterator;

use super::ListNode;

/// Borrowed traversal of a chain, front to back. Only used internally, the public surface for
/// visiting every node is [`ListNode::map`].
#[derive(Debug, Clone)]
pub(crate) struct Iter<'a> {
    pub(crate) next: Option<&'a ListNode>,
}

impl<'a> Iter<'a> {
    pub(crate) const fn new(head: Option<&'a ListNode>) -> Iter<'a> {
        Iter { next: head }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl FusedIterator for Iter<'_> {}
