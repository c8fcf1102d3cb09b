use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::thread::LocalKey;

thread_local! {
    // Tallies are plain thread-local cells, so recording never allocates and
    // the shim cannot recurse into itself.
    static COUNTING: Cell<bool> = const { Cell::new(false) };
    static ALLOCATIONS: Cell<u64> = const { Cell::new(0) };
    static DEALLOCATIONS: Cell<u64> = const { Cell::new(0) };
}

/// Allocator shim that counts allocation events on the current thread.
///
/// The shim forwards every request to the wrapped allocator and, while a
/// [`count`] window is open on the calling thread, tallies how many
/// allocations and deallocations that thread performed. It must be installed
/// via `#[global_allocator]` to take effect:
///
/// ```ignore
/// #[global_allocator]
/// static ALLOCATOR: CountingAllocator<System> = CountingAllocator::system();
/// ```
///
/// The benchmark binary does not install it, keeping the reported timings
/// free of tracking overhead; the test suite installs it to verify which
/// phases allocate.
pub struct CountingAllocator<A = System> {
    inner: A,
}

impl CountingAllocator<System> {
    /// Creates a counting shim over the system allocator.
    pub const fn system() -> Self {
        Self { inner: System }
    }
}

impl<A> CountingAllocator<A> {
    /// Creates a counting shim over `inner`.
    pub const fn from_allocator(inner: A) -> Self {
        Self { inner }
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for CountingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record(&ALLOCATIONS);
        self.inner.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        record(&DEALLOCATIONS);
        self.inner.dealloc(ptr, layout)
    }
}

#[inline]
fn record(tally: &'static LocalKey<Cell<u64>>) {
    // try_with: thread-local storage may already be gone when something
    // allocates during thread teardown.
    let _ = COUNTING.try_with(|counting| {
        if counting.get() {
            let _ = tally.try_with(|tally| tally.set(tally.get() + 1));
        }
    });
}

/// Allocation events observed on one thread during a counting window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocationActivity {
    /// Number of allocations performed inside the window.
    pub allocations: u64,
    /// Number of deallocations performed inside the window.
    pub deallocations: u64,
}

/// Runs `operation` with allocation counting enabled on the current thread
/// and reports the activity it produced.
///
/// Windows nest: an outer window's activity includes everything counted
/// inside inner windows. Events are only recorded while a
/// [`CountingAllocator`] is installed as the global allocator; without one
/// the reported activity is zero.
pub fn count<F, R>(operation: F) -> (R, AllocationActivity)
where
    F: FnOnce() -> R,
{
    let allocations_before = ALLOCATIONS.with(Cell::get);
    let deallocations_before = DEALLOCATIONS.with(Cell::get);

    let was_counting = COUNTING.with(|flag| flag.replace(true));
    let result = operation();
    COUNTING.with(|flag| flag.set(was_counting));

    let activity = AllocationActivity {
        allocations: ALLOCATIONS.with(Cell::get) - allocations_before,
        deallocations: DEALLOCATIONS.with(Cell::get) - deallocations_before,
    };
    (result, activity)
}
