//! Directional traversal over raw element slots.
//!
//! Both walkers infer their stepping direction from the order of their
//! endpoints: a begin cursor below the end steps forward, otherwise both
//! cursors step backward. Walking a range from its high end lets the caller
//! shift overlapping slot ranges right without reading a slot after it has
//! been overwritten; walking from the low end does the same for left shifts.
//! Choosing the order that never clobbers an unread slot is the caller's
//! job, which is exactly what keeps these free of overlap checks.
//!
//! There is no rollback: if `action` panics partway, the range is left
//! partially transformed.

/// Visits every slot in the half-open range `[src, src_end)` exactly once,
/// pairing it with a destination cursor starting at `dst`, and applies
/// `action(dst, src)`. Both cursors advance together, one slot per
/// iteration, in the direction inferred from `src` versus `src_end`.
///
/// # Safety
///
/// Every slot the walk visits, on both the source and destination sides,
/// must lie within one allocated object, and `action` must uphold the
/// initialization state those slots require. `src_end` is only compared
/// against, never dereferenced; a backward walk takes the sentinel one slot
/// below its range, which must be produced with wrapping pointer
/// arithmetic.
pub(crate) unsafe fn transfer<T, F>(
    mut src: *mut T,
    src_end: *mut T,
    mut dst: *mut T,
    mut action: F,
) where
    F: FnMut(*mut T, *mut T),
{
    let step: isize = if src < src_end { 1 } else { -1 };
    while src != src_end {
        action(dst, src);
        src = src.wrapping_offset(step);
        dst = dst.wrapping_offset(step);
    }
}

/// Visits every slot in the half-open range `[cur, end)` exactly once and
/// applies `action(slot)`, stepping in the direction inferred from `cur`
/// versus `end`.
///
/// # Safety
///
/// Same contract as [`transfer`], on a single range: visited slots must lie
/// within one allocated object, `end` is never dereferenced, and a backward
/// sentinel one slot below the range must come from wrapping arithmetic.
pub(crate) unsafe fn visit<T, F>(mut cur: *mut T, end: *mut T, mut action: F)
where
    F: FnMut(*mut T),
{
    let step: isize = if cur < end { 1 } else { -1 };
    while cur != end {
        action(cur);
        cur = cur.wrapping_offset(step);
    }
}
