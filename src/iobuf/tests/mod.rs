extern crate std;

use std::vec::Vec;

use core::ptr::NonNull;

use super::{IoBufFIter, IoBufList, IoBufNode, Span};

mod cursor;

/// Threads one node per entry of `lens` onto `list`, each describing the next
/// `len` bytes of `buf`. Neighbouring spans are therefore adjacent in memory.
fn build(list: &mut IoBufList, nodes: &mut [IoBufNode], buf: &mut [u8], lens: &[usize]) {
    assert!(nodes.len() >= lens.len());
    assert!(buf.len() >= lens.iter().sum::<usize>());
    let mut rest = buf;
    for (node, &len) in nodes.iter_mut().zip(lens) {
        let (chunk, tail) = core::mem::take(&mut rest).split_at_mut(len);
        node.init(Span::from_slice(chunk));
        list.add_back(NonNull::from(node));
        rest = tail;
    }
}

/// Writes `seed + i` at every logical position `i` of `list`.
fn fill(list: &mut IoBufList, seed: u8) {
    let mut cursor = unsafe { IoBufFIter::new(list) };
    let mut value = seed;
    while cursor.try_set_byte_and_advance(value) == 1 {
        value = value.wrapping_add(1);
    }
}

/// The bytes of `list` in logical order.
fn contents(list: &mut IoBufList) -> Vec<u8> {
    let mut out = std::vec![0u8; list.capacity()];
    let mut cursor = unsafe { IoBufFIter::new(list) };
    assert_eq!(cursor.try_copy_into_buf_and_advance(&mut out), out.len());
    out
}

/// The expected contents of a list filled with `fill(list, seed)`.
fn pattern(seed: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| seed.wrapping_add(i as u8)).collect()
}

fn span_lens(list: &IoBufList) -> Vec<usize> {
    list.spans().map(|span| span.len()).collect()
}
