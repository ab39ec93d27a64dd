mod iter;
mod linked_list;
mod node;

pub(crate) use iter::*;
pub use linked_list::*;
pub use node::*;
