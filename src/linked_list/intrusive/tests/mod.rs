extern crate std;

use std::vec::Vec;

use crate::linked_list::intrusive::{double::DoubleNode, list::LinkedList, traits::NodeWithData};


/// Collects the payloads of a list front to back.
fn values(list: &LinkedList<DoubleNode<i32>>) -> Vec<i32> {
    unsafe { list.iter().map(|node| *node.as_ref().data()).collect() }
}

/// Collects the payloads of a list back to front.
fn values_rev(list: &LinkedList<DoubleNode<i32>>) -> Vec<i32> {
    unsafe { list.iter().rev().map(|node| *node.as_ref().data()).collect() }
}
