use crate::list::raw::RawList;
use std::mem;

/// Describes a contiguous array of fixed-size records to register into a list
#[derive(Clone, Copy, Debug)]
pub struct PoolLayout {
    /// Address of the first record
    pub base: *mut u8,
    /// Size of one record in bytes
    pub stride: usize,
    /// Number of records in the array
    pub count: usize,
    /// Byte offset of each record's `usize` index field
    pub index_offset: usize,
}

/// Registers a static pool of records into `list`: each record is stamped
/// with its array index at `index_offset` (for O(1) reverse lookup from a
/// record back to its pool slot), then routed through the list's ordered
/// insert path. Without a comparator the list ends up in pool order. An
/// absent `layout` is a silent no-op.
///
/// # Safety
/// The pool must hold `count` records of `stride` bytes starting at `base`,
/// each matching the list's layout contract and not linked into any list,
/// with a properly aligned `usize` at `index_offset`. The records must stay
/// valid at stable addresses while linked.
pub unsafe fn register_static_pool(layout: Option<&PoolLayout>, list: &mut RawList) {
    let Some(layout) = layout else {
        return;
    };

    debug_assert!(
        layout.index_offset + mem::size_of::<usize>() <= layout.stride,
        "index field must fall inside the record"
    );

    for index in 0..layout.count {
        let record = layout.base.add(index * layout.stride);
        record.add(layout.index_offset).cast::<usize>().write(index);
        list.insert(record);
    }
}

/// [`register_static_pool`] over a slice, deriving base, stride, and count
/// from the element type
///
/// # Safety
/// Same contract as [`register_static_pool`]; additionally the records must
/// not be moved or dropped while linked, so `records` effectively needs to
/// outlive the list's use of them.
pub unsafe fn register_slice<R>(records: &mut [R], index_offset: usize, list: &mut RawList) {
    let layout = PoolLayout {
        base: records.as_mut_ptr().cast(),
        stride: mem::size_of::<R>(),
        count: records.len(),
        index_offset,
    };
    register_static_pool(Some(&layout), list);
}
