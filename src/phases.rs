//! The timed loop bodies, one fill and one copy phase per wrapper family.
//!
//! Every destination vector starts empty and grows push by push: reallocation
//! during growth is part of what a phase measures, so none of these functions
//! pre-allocate.

use std::cell::Cell;
use std::rc::Rc;

use crate::handles::{BoxedInt, BoxedIntRef, IntRef, OptionalIntRef, SharedInt};

/// Wraps each slot's value in its own shared-ownership handle.
///
/// One heap allocation per element; every handle starts as the sole owner of
/// its integer.
pub fn fill_shared(slots: &[Cell<i32>]) -> Vec<SharedInt> {
    let mut sequence = Vec::new();
    for slot in slots {
        sequence.push(Rc::new(slot.get()));
    }
    sequence
}

/// Copies each shared handle, bumping its reference count.
pub fn copy_shared(filled: &[SharedInt]) -> Vec<SharedInt> {
    let mut sequence = Vec::new();
    for handle in filled {
        sequence.push(Rc::clone(handle));
    }
    sequence
}

/// Aliases each slot in place. No ownership is taken and nothing beyond the
/// destination vector is allocated.
pub fn fill_refs(slots: &[Cell<i32>]) -> Vec<IntRef<'_>> {
    let mut sequence = Vec::new();
    for slot in slots {
        sequence.push(slot);
    }
    sequence
}

/// Duplicates each alias. The copies point at the original slots.
pub fn copy_refs<'a>(filled: &[IntRef<'a>]) -> Vec<IntRef<'a>> {
    let mut sequence = Vec::new();
    for alias in filled {
        sequence.push(*alias);
    }
    sequence
}

/// Aliases each slot in place, stored as a present optional.
pub fn fill_optional_refs(slots: &[Cell<i32>]) -> Vec<OptionalIntRef<'_>> {
    let mut sequence = Vec::new();
    for slot in slots {
        sequence.push(Some(slot));
    }
    sequence
}

/// Engages each plain alias into a present optional.
///
/// The input is the plain alias family's fill sequence, not an optional
/// sequence: this loop forms an optional alias directly from an existing
/// alias.
pub fn copy_refs_as_optional<'a>(filled: &[IntRef<'a>]) -> Vec<OptionalIntRef<'a>> {
    let mut sequence = Vec::new();
    for alias in filled {
        sequence.push(Some(*alias));
    }
    sequence
}

/// Wraps each slot's value in its own exclusive-ownership handle.
///
/// One heap allocation per element, exactly one owner each.
pub fn fill_boxed(slots: &[Cell<i32>]) -> Vec<BoxedInt> {
    let mut sequence = Vec::new();
    for slot in slots {
        sequence.push(Box::new(slot.get()));
    }
    sequence
}

/// Aliases each exclusive owner's slot in the filled sequence.
///
/// Exclusive ownership cannot be duplicated, so the copy phase of this family
/// produces aliases instead. The owning vector must be done growing before
/// the aliases are taken; callers cannot get this wrong, since the borrow of
/// `filled` pins it for as long as the aliases live.
pub fn alias_boxed(filled: &[BoxedInt]) -> Vec<BoxedIntRef<'_>> {
    let mut sequence = Vec::new();
    for owner in filled {
        sequence.push(owner);
    }
    sequence
}
