use alloc::vec::Vec;

/// Builds the window of global indexes a pool of `total` actors represents after shifting by
/// `delta` steps from `cursor`.
///
/// The baseline is a three-page span centered on `cursor` (`cursor - visible .. cursor +
/// 2 * visible`). Only the `|delta|` cells at the leading edge in the direction of travel are
/// then patched with the newly revealed indexes; every other cell keeps the index it had,
/// which is what lets surviving actors keep their content.
///
/// `total` must be a multiple of 3; `|delta|` is expected to be at most `total / 3` (larger
/// values are truncated to `total` cells). Indexes saturate at the ends of `i64`.
pub fn snapshot(cursor: i64, delta: i64, total: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(total);
    snapshot_into(&mut out, cursor, delta, total);
    out
}

/// Same as [`snapshot`], but reuses `out` to avoid allocating per update.
pub fn snapshot_into(out: &mut Vec<i64>, cursor: i64, delta: i64, total: usize) {
    debug_assert!(total % 3 == 0, "snapshot: total must be a multiple of 3 (got {total})");
    out.clear();
    if total == 0 {
        return;
    }

    let total_i = total as i64;
    let visible = total_i / 3;
    out.extend((0..total_i).map(|i| cursor.saturating_sub(visible).saturating_add(i)));

    let sign = delta.signum();
    if sign == 0 {
        return;
    }
    let offset = if sign > 0 {
        total_i - visible
    } else {
        -visible - 1
    };
    let start = if sign > 0 { 0 } else { total_i - 1 };

    let steps = delta.unsigned_abs().min(total as u64) as i64;
    for i in 0..steps {
        let cell = start + i * sign;
        out[cell as usize] = cursor.saturating_add(offset + i * sign);
    }
}
