mod arena;
mod handle;
mod node;
mod raw_linked_map;

pub(crate) use handle::Handle;
pub(crate) use raw_linked_map::RawLinkedMap;
