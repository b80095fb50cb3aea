pub const ICE_COMPETENCY_COUNT: i64 = 10;

/// Folds a banded ICE id (`1001..1010`, `2001..2010`, ...) back onto `1..=10`.
/// Ids up to ten pass through untouched, including zero and negatives, which
/// callers then reject with [`is_canonical_competency`].
pub fn canonical_competency_id(raw_id: i64) -> i64 {
    if raw_id > ICE_COMPETENCY_COUNT {
        ((raw_id - 1) % ICE_COMPETENCY_COUNT) + 1
    } else {
        raw_id
    }
}

pub fn is_canonical_competency(id: i64) -> bool {
    (1..=ICE_COMPETENCY_COUNT).contains(&id)
}

/// Index into a cyclic palette for a 1-based id. Ids below one wrap from the end.
pub fn palette_index(id: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (id - 1).rem_euclid(len as i64) as usize
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ids.rs"]
mod tests;
