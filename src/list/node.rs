use crate::allocator::{Allocator, DefaultAllocator};
use memoffset::offset_of;
use std::ptr;

/// How a node's storage is managed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    /// Caller-provided storage; destroying the node resets it in place
    Embedded,
    /// Allocated by the engine; destroying the node returns the storage
    Owned,
}

/// The engine's plain record type.
///
/// A `ListNode` carries an opaque data reference and the two link pointers a
/// list rewires, in the layout the engine addresses: `data` immediately ahead
/// of `next`, `prev` immediately after it. The node never owns the data it
/// points at.
///
/// Nodes come in two forms, chosen by constructor: [`embedded`](Self::embedded)
/// nodes live wherever the caller puts them (a stack frame, a static pool, a
/// larger struct) and are reset rather than freed, while
/// [`create_in`](Self::create_in) nodes are allocated by the engine and
/// released by [`destroy_in`](Self::destroy_in).
#[repr(C)]
pub struct ListNode<T> {
    pub(crate) data: *mut T,
    pub(crate) next: *mut ListNode<T>,
    pub(crate) prev: *mut ListNode<T>,
    pub(crate) storage: Storage,
}

impl<T> ListNode<T> {
    /// A detached node in caller-provided storage referencing `data`
    pub fn embedded(data: *mut T) -> Self {
        Self {
            data,
            next: ptr::null_mut(),
            prev: ptr::null_mut(),
            storage: Storage::Embedded,
        }
    }

    /// Allocates a detached engine-owned node through `allocator`, returning
    /// null when the allocation fails. The node must later be released with
    /// [`destroy_in`](Self::destroy_in) and the same allocator.
    pub fn create_in<A: Allocator>(data: *mut T, allocator: &A) -> *mut Self {
        let node = unsafe { allocator.allocate::<Self>() };
        if !node.is_null() {
            unsafe {
                node.write(Self {
                    data,
                    next: ptr::null_mut(),
                    prev: ptr::null_mut(),
                    storage: Storage::Owned,
                });
            }
        }
        node
    }

    /// [`create_in`](Self::create_in) against the global allocator
    pub fn create(data: *mut T) -> *mut Self {
        Self::create_in(data, &DefaultAllocator)
    }

    /// Disposes of `node` per its storage tag: owned nodes are returned to
    /// `allocator`, embedded nodes are reset in place and stay usable. Null
    /// is a no-op.
    ///
    /// # Safety
    /// `node` must not be linked into any list, and an owned node must have
    /// been allocated by `allocator` and not destroyed since.
    pub unsafe fn destroy_in<A: Allocator>(node: *mut Self, allocator: &A) {
        if node.is_null() {
            return;
        }
        match (*node).storage {
            Storage::Owned => allocator.deallocate(node),
            Storage::Embedded => (*node).reset(),
        }
    }

    /// [`destroy_in`](Self::destroy_in) against the global allocator
    ///
    /// # Safety
    /// Same contract as [`destroy_in`](Self::destroy_in).
    pub unsafe fn destroy(node: *mut Self) {
        Self::destroy_in(node, &DefaultAllocator)
    }

    /// Clears the node back to a detached, embedded, data-less state
    pub fn reset(&mut self) {
        self.data = ptr::null_mut();
        self.next = ptr::null_mut();
        self.prev = ptr::null_mut();
        self.storage = Storage::Embedded;
    }

    /// The referenced data
    pub fn data(&self) -> *mut T {
        self.data
    }

    /// Repoints the node at different data; the links are untouched
    pub fn set_data(&mut self, data: *mut T) {
        self.data = data;
    }

    /// The following node, null at the tail or when detached
    pub fn next(&self) -> *mut ListNode<T> {
        self.next
    }

    /// The preceding node, null at the head or when detached
    pub fn prev(&self) -> *mut ListNode<T> {
        self.prev
    }

    pub fn storage(&self) -> Storage {
        self.storage
    }

    /// Byte offset of the `next` field: the default offset a list addresses
    /// plain nodes at
    pub fn link_offset() -> usize {
        offset_of!(ListNode::<T>, next)
    }
}

impl<T> Default for ListNode<T> {
    fn default() -> Self {
        Self::embedded(ptr::null_mut())
    }
}

#[cfg(test)]
mod test {
    use super::{ListNode, Storage};
    use memoffset::offset_of;
    use std::mem;
    use std::ptr;

    #[test]
    fn layout() {
        let ptr_size = mem::size_of::<*mut u8>();
        assert_eq!(offset_of!(ListNode::<u32>, data), 0);
        assert_eq!(offset_of!(ListNode::<u32>, next), ptr_size);
        assert_eq!(offset_of!(ListNode::<u32>, prev), ptr_size * 2);
        assert_eq!(ListNode::<u32>::link_offset(), ptr_size);
    }

    #[test]
    fn embedded_defaults() {
        let mut value = 5u32;
        let node = ListNode::embedded(&mut value as *mut u32);
        assert_eq!(node.data(), &mut value as *mut u32);
        assert!(node.next().is_null());
        assert!(node.prev().is_null());
        assert_eq!(node.storage(), Storage::Embedded);

        let blank = ListNode::<u32>::default();
        assert!(blank.data().is_null());
        assert_eq!(blank.storage(), Storage::Embedded);
    }

    #[test]
    fn embedded_destroy_resets_in_place() {
        let mut value = 5u32;
        let mut node = ListNode::embedded(&mut value as *mut u32);
        unsafe { ListNode::destroy(&mut node) };
        assert!(node.data().is_null());
        assert!(node.next().is_null());
        assert!(node.prev().is_null());
        assert_eq!(node.storage(), Storage::Embedded);

        // Destroying an already-reset node changes nothing.
        unsafe { ListNode::destroy(&mut node) };
        assert!(node.data().is_null());
        assert_eq!(node.storage(), Storage::Embedded);
    }

    #[test]
    fn owned_create_destroy() {
        let mut value = 5u32;
        let node = ListNode::create(&mut value as *mut u32);
        assert!(!node.is_null());
        unsafe {
            assert_eq!((*node).data(), &mut value as *mut u32);
            assert!((*node).next().is_null());
            assert_eq!((*node).storage(), Storage::Owned);
            ListNode::destroy(node);
        }
    }

    #[test]
    fn destroy_null_is_noop() {
        unsafe { ListNode::<u32>::destroy(ptr::null_mut()) };
    }
}
