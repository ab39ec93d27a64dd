//! Linked collection types. Revolves around [`LinkedList`], a handle to a singly-linked chain of
//! [`ListNode`]s.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, Link, ListNode};
