use std::cell::Cell;
use std::mem;
use std::rc::Rc;

/// Shared-ownership handle to a heap-allocated integer.
///
/// Copying one is a reference-count increment; the integer is freed when the
/// last handle drops.
pub type SharedInt = Rc<i32>;

/// Non-owning alias to an integer slot.
///
/// Copying one duplicates the alias, never the integer. The `Cell` wrapper
/// keeps the aliased slot writable, so a store through any alias (or through
/// the source slice itself) is visible through every other alias.
pub type IntRef<'a> = &'a Cell<i32>;

/// An integer alias that may be absent.
pub type OptionalIntRef<'a> = Option<IntRef<'a>>;

/// Exclusively-owned heap-allocated integer. Movable, never copyable.
pub type BoxedInt = Box<i32>;

/// Non-owning alias to an exclusive owner's slot.
pub type BoxedIntRef<'a> = &'a BoxedInt;

/// In-memory footprint of one probe type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Short name of the probe type, as it appears in the report.
    pub label: &'static str,
    /// `mem::size_of` the probe type, in bytes.
    pub bytes: usize,
}

/// Returns the footprints of the five probe types, in report order.
///
/// These are pure size-of values: constant for a given platform and build,
/// independent of the element count.
pub const fn footprints() -> [Footprint; 5] {
    [
        Footprint {
            label: "rc",
            bytes: mem::size_of::<SharedInt>(),
        },
        Footprint {
            label: "ref",
            bytes: mem::size_of::<IntRef<'static>>(),
        },
        Footprint {
            label: "optional_ref",
            bytes: mem::size_of::<OptionalIntRef<'static>>(),
        },
        Footprint {
            label: "box",
            bytes: mem::size_of::<BoxedInt>(),
        },
        Footprint {
            label: "ref_to_box",
            bytes: mem::size_of::<BoxedIntRef<'static>>(),
        },
    ]
}
