pub mod allocator;
pub mod equals;
pub mod list;
pub mod order;
pub mod pool;

pub use allocator::{Allocator, DefaultAllocator};
pub use equals::{EqualTo, Equals, Identity};
pub use list::node::{ListNode, Storage};
pub use list::raw::{EqualsFn, OrderFn, RawList};
pub use list::{DefaultList, List};
pub use order::{Ascending, Descending, Order};
pub use pool::{register_slice, register_static_pool, PoolLayout};
