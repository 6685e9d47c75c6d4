extern crate std;

use std::vec;

use core::ptr::NonNull;

use crate::iobuf::{IoBufFIter, IoBufList, IoBufNode, Span};

use super::{build, contents, fill, pattern, span_lens};

#[test]
fn test_list_count_and_capacity() {
    let mut buf = [0u8; 32];
    let mut nodes: [IoBufNode; 4] = Default::default();
    let mut list = IoBufList::new();
    assert!(list.is_empty());
    assert_eq!(list.count(), 0);
    assert_eq!(list.capacity(), 0);

    build(&mut list, &mut nodes, &mut buf, &[3, 1, 16, 0]);
    assert!(!list.is_empty());
    assert_eq!(list.count(), 4);
    assert_eq!(list.capacity(), 20);
    assert_eq!(span_lens(&list), vec![3, 1, 16, 0]);
}

#[test]
fn test_add_front_and_merge() {
    let mut a = [1u8, 2];
    let mut b = [3u8];
    let mut c = [4u8, 5, 6];
    let mut node_a = IoBufNode::from_slice(&mut a);
    let mut node_b = IoBufNode::from_slice(&mut b);
    let mut node_c = IoBufNode::from_slice(&mut c);

    let mut head = IoBufList::new();
    let mut tail = IoBufList::new();
    head.add_back(NonNull::from(&mut node_b));
    head.add_front(NonNull::from(&mut node_a));
    tail.add_back(NonNull::from(&mut node_c));

    head.merge(&mut tail);
    assert!(tail.is_empty());
    assert_eq!(head.capacity(), 6);
    assert_eq!(contents(&mut head), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_get_bytes_across_spans() {
    let mut buf = [0u8; 20];
    let mut nodes: [IoBufNode; 3] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[3, 1, 16]);
    fill(&mut list, 0xF5);

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    for i in 0..20u8 {
        assert!(cursor.is_active());
        assert_eq!(cursor.try_get_byte_and_advance(), Some(0xF5u8.wrapping_add(i)));
    }
    assert!(!cursor.is_active());
    assert_eq!(cursor.try_get_byte_and_advance(), None);
    assert_eq!(cursor.try_set_byte_and_advance(0), 0);
    assert_eq!(buf[..], pattern(0xF5, 20)[..]);
}

#[test]
fn test_buf_is_remaining_part_of_span() {
    let mut buf = [0u8; 10];
    let mut nodes: [IoBufNode; 2] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[4, 6]);
    let base = buf.as_mut_ptr();

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    assert_eq!(cursor.buf(), Span::new(base, 4));

    assert_eq!(cursor.try_advance(3), 3);
    assert_eq!(cursor.offset(), 3);
    assert_eq!(cursor.buf(), Span::new(base.wrapping_add(3), 1));
    assert_eq!(cursor.remaining(), 7);

    assert_eq!(cursor.try_advance(1), 1);
    assert_eq!(cursor.node(), Some(NonNull::from(&mut nodes[1])));
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.buf(), Span::new(base.wrapping_add(4), 6));

    cursor.finish();
    assert_eq!(cursor.buf(), Span::EMPTY);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_try_advance_stops_at_end() {
    let mut buf = [0u8; 14];
    let mut nodes: [IoBufNode; 3] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[4, 2, 8]);

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    assert_eq!(cursor.try_advance(5), 5);
    assert_eq!(cursor.node(), Some(NonNull::from(&mut nodes[1])));
    assert_eq!(cursor.offset(), 1);

    assert_eq!(cursor.try_advance(100), 9);
    assert!(!cursor.is_active());
    assert_eq!(cursor.try_advance(1), 0);
}

#[test]
fn test_try_advance_by_zero_never_moves() {
    let mut buf = [0u8; 6];
    let mut nodes: [IoBufNode; 2] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[2, 4]);

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    for step in [0, 1, 1, 3, 1] {
        let before = cursor;
        assert_eq!(cursor.try_advance(0), 0);
        assert_eq!(cursor, before);
        assert_eq!(cursor.node(), before.node());
        assert_eq!(cursor.offset(), before.offset());
        cursor.try_advance(step);
    }
    assert!(!cursor.is_active());
    let before = cursor;
    assert_eq!(cursor.try_advance(0), 0);
    assert_eq!(cursor, before);
}

#[test]
fn test_cursor_skips_empty_spans() {
    let mut buf = [0u8; 3];
    let mut nodes: [IoBufNode; 5] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[0, 1, 0, 0, 2]);
    fill(&mut list, 7);
    assert_eq!(buf, [7, 8, 9]);

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    assert_eq!(cursor.node(), Some(NonNull::from(&mut nodes[1])));
    cursor.try_advance(1);
    assert_eq!(cursor.node(), Some(NonNull::from(&mut nodes[4])));

    // A list of empty spans has nothing to walk.
    let mut empty_nodes: [IoBufNode; 2] = Default::default();
    let mut empty = IoBufList::new();
    build(&mut empty, &mut empty_nodes, &mut [], &[0, 0]);
    let cursor = unsafe { IoBufFIter::new(&mut empty) };
    assert!(!cursor.is_active());
}

#[test]
fn test_copy_from_buf_crosses_spans_and_stops_early() {
    let mut buf = [0u8; 6];
    let mut nodes: [IoBufNode; 3] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[1, 2, 3]);

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    assert_eq!(cursor.try_copy_from_buf_and_advance(&[9, 8]), 2);
    assert_eq!(cursor.node(), Some(NonNull::from(&mut nodes[1])));
    assert_eq!(cursor.offset(), 1);

    assert_eq!(cursor.try_copy_from_buf_and_advance(&[7, 6, 5, 4, 3, 2]), 4);
    assert!(!cursor.is_active());
    assert_eq!(cursor.try_copy_from_buf_and_advance(&[1]), 0);
    assert_eq!(buf, [9, 8, 7, 6, 5, 4]);
}

#[test]
fn test_copy_into_buf_flattens_and_stops_early() {
    let mut buf = [0u8; 9];
    let mut nodes: [IoBufNode; 3] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[5, 1, 3]);
    fill(&mut list, 0x10);

    let mut cursor = unsafe { IoBufFIter::new(&mut list) };
    let mut head = [0u8; 4];
    assert_eq!(cursor.try_copy_into_buf_and_advance(&mut head), 4);
    assert_eq!(head[..], pattern(0x10, 4)[..]);

    let mut rest = [0u8; 8];
    assert_eq!(cursor.try_copy_into_buf_and_advance(&mut rest), 5);
    assert_eq!(rest[..5], pattern(0x14, 5)[..]);
    assert_eq!(rest[5..], [0, 0, 0]);
    assert!(!cursor.is_active());
}

#[test]
fn test_copy_to_another_is_bounded_by_destination() {
    let mut src_buf = [0u8; 10];
    let mut dst_buf = [0u8; 6];
    let mut src_nodes: [IoBufNode; 3] = Default::default();
    let mut dst_nodes: [IoBufNode; 2] = Default::default();
    let mut src = IoBufList::new();
    let mut dst = IoBufList::new();
    build(&mut src, &mut src_nodes, &mut src_buf, &[3, 3, 4]);
    build(&mut dst, &mut dst_nodes, &mut dst_buf, &[5, 1]);
    fill(&mut src, 0x40);

    let mut from = unsafe { IoBufFIter::new(&mut src) };
    let mut to = unsafe { IoBufFIter::new(&mut dst) };
    from.try_advance(1);
    assert_eq!(from.try_copy_to_another_and_advance_both(&mut to, 100), 6);
    assert!(!to.is_active());
    assert_eq!(dst_buf[..], pattern(0x41, 6)[..]);

    let mut reference = unsafe { IoBufFIter::new(&mut src) };
    reference.try_advance(7);
    assert_eq!(from, reference);
}

#[test]
fn test_copy_to_another_is_bounded_by_num_and_source() {
    let mut src_buf = [0u8; 5];
    let mut dst_buf = [0u8; 12];
    let mut src_nodes: [IoBufNode; 2] = Default::default();
    let mut dst_nodes: [IoBufNode; 3] = Default::default();
    let mut src = IoBufList::new();
    let mut dst = IoBufList::new();
    build(&mut src, &mut src_nodes, &mut src_buf, &[2, 3]);
    build(&mut dst, &mut dst_nodes, &mut dst_buf, &[4, 4, 4]);
    fill(&mut src, 1);

    let mut from = unsafe { IoBufFIter::new(&mut src) };
    let mut to = unsafe { IoBufFIter::new(&mut dst) };
    assert_eq!(from.try_copy_to_another_and_advance_both(&mut to, 3), 3);
    assert_eq!(to.offset(), 3);
    assert_eq!(from.try_copy_to_another_and_advance_both(&mut to, 0), 0);
    assert_eq!(from.try_copy_to_another_and_advance_both(&mut to, 50), 2);
    assert!(!from.is_active());
    assert_eq!(to.node(), Some(NonNull::from(&mut dst_nodes[1])));
    assert_eq!(to.offset(), 1);
    assert_eq!(dst_buf[..5], [1, 2, 3, 4, 5]);
}

#[test]
fn test_cursor_equality_and_copies() {
    let mut buf = [0u8; 4];
    let mut nodes: [IoBufNode; 2] = Default::default();
    let mut list = IoBufList::new();
    build(&mut list, &mut nodes, &mut buf, &[2, 2]);

    let mut a = unsafe { IoBufFIter::new(&mut list) };
    let b = a;
    assert_eq!(a, b);
    a.try_advance(1);
    assert_ne!(a, b);
    assert_eq!(b.offset(), 0);

    let mut c = b;
    c.try_advance(1);
    assert_eq!(a, c);
}
