//! # ownership-bench
//!
//! A microbenchmark that compares what it costs to build and copy sequences
//! of the standard ownership and aliasing handles: shared owners
//! ([`Rc`][rc]), plain aliases (`&Cell<i32>`), optional aliases
//! (`Option<&Cell<i32>>`), and exclusive owners ([`Box`][box]) paired with
//! aliases of their slots.
//!
//! ## high-level usage
//!
//! The `ownership-bench` binary is the intended entry point.  Given an
//! optional element count (default one million), it zero-initializes that
//! many integer slots and, for each of the four handle families, times a
//! fill loop (one handle per slot, pushed into a fresh vector) and a copy
//! loop (one copy or alias per filled handle, pushed into a second vector).
//! The report on stdout starts with the in-memory footprint of each probe
//! type and ends with per-phase and per-family wall-clock totals.
//!
//! The same building blocks are exposed as a library: [`Benchmark`] drives a
//! whole run against any writer, the [`phases`] module holds the individual
//! timed loops, and [`measure`] and [`count`] observe the wall-clock time
//! and the allocation activity of arbitrary operations.
//!
//! ## what the numbers mean
//!
//! Fill cost differs between families mainly in per-element allocation: the
//! owning families pay one heap allocation per slot, while the aliasing
//! families only pay for destination-vector growth.  Copy cost isolates the
//! handle semantics themselves: a reference-count increment for shared
//! owners, a pointer copy for aliases.  Exclusive owners cannot be copied at
//! all, so that family's second phase builds aliases of the owning slots
//! instead.
//!
//! ## diagnostics
//!
//! The binary keeps stdout for the report and emits `tracing` events on
//! stderr; set `RUST_LOG=debug` to see per-family timings as structured
//! fields.
//!
//! [rc]: std::rc::Rc
//! [box]: std::boxed::Box
#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]

use std::cell::Cell;
use std::hint::black_box;
use std::io::{self, Write};

use tracing::debug;

mod args;
mod counter;
mod handles;
pub mod phases;
mod report;
mod timing;

pub use crate::args::{element_count, permissive_int, DEFAULT_ELEMENT_COUNT};
pub use crate::counter::{count, AllocationActivity, CountingAllocator};
pub use crate::handles::{
    footprints, BoxedInt, BoxedIntRef, Footprint, IntRef, OptionalIntRef, SharedInt,
};
pub use crate::report::{FamilyLabels, FamilyTiming};
pub use crate::timing::measure;

/// A configured run over the four wrapper families.
pub struct Benchmark {
    element_count: usize,
}

impl Benchmark {
    /// Creates a benchmark over `element_count` zero-initialized source
    /// slots.
    pub fn new(element_count: usize) -> Self {
        Self { element_count }
    }

    /// Creates a benchmark from the command-line arguments, binary name
    /// already skipped.
    ///
    /// The first argument is resolved with [`element_count`](crate::element_count);
    /// everything after it is ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        Self::new(args::element_count(args))
    }

    /// The number of source slots every family fills from.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Runs every family in order and writes the report to `out`.
    ///
    /// The footprint block comes first, then one block per family in fixed
    /// order: shared owners, plain aliases, optional aliases, exclusive
    /// owners.  Each family is measured and reported before the next one
    /// starts.  Every result sequence stays alive until the run ends, then
    /// drops before the slots it aliases.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        debug!(elements = self.element_count, "starting run");
        report::write_footprints(out)?;

        let mut values = vec![0i32; self.element_count];
        let slots = Cell::from_mut(values.as_mut_slice()).as_slice_of_cells();

        let (shared_fill, fill) = measure(|| phases::fill_shared(slots));
        let (shared_copy, copy) = measure(|| phases::copy_shared(&shared_fill));
        emit_family(FamilyTiming::new(FamilyLabels::RC, fill, copy), out)?;

        let (ref_fill, fill) = measure(|| phases::fill_refs(slots));
        let (ref_copy, copy) = measure(|| phases::copy_refs(&ref_fill));
        emit_family(FamilyTiming::new(FamilyLabels::REF, fill, copy), out)?;

        let (optional_fill, fill) = measure(|| phases::fill_optional_refs(slots));
        // The engaged copies come from the plain alias sequence, not the
        // optional one.
        let (optional_copy, copy) = measure(|| phases::copy_refs_as_optional(&ref_fill));
        emit_family(FamilyTiming::new(FamilyLabels::OPTIONAL_REF, fill, copy), out)?;

        let (boxed_fill, fill) = measure(|| phases::fill_boxed(slots));
        let (boxed_aliases, copy) = measure(|| phases::alias_boxed(&boxed_fill));
        emit_family(FamilyTiming::new(FamilyLabels::BOXED, fill, copy), out)?;

        // Nothing reads the sequences after this point; an opaque use keeps
        // the measured work from being optimized away.
        black_box((
            &shared_fill,
            &shared_copy,
            &ref_fill,
            &ref_copy,
            &optional_fill,
            &optional_copy,
            &boxed_fill,
            &boxed_aliases,
        ));
        Ok(())
    }
}

/// Logs one family's timings as a structured event, then writes its report
/// block.
fn emit_family<W: Write>(timing: FamilyTiming, out: &mut W) -> io::Result<()> {
    debug!(
        family = timing.labels().total,
        fill = ?timing.fill(),
        copy = ?timing.copy(),
        "family measured"
    );
    timing.write_to(out)
}
