// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Continuity smoother.

use crate::{
    algorithm::continue_curve,
    util::{AnchorPoint, Ring},
};

/// full update passes over the sequence
pub const SMOOTH_PASSES: usize = 2;

/// Re-derives every `cp1` from the two preceding points so the segment entering
/// point i leaves point i-1 along the tangent the previous segment arrived with.
/// The second pass reads the values the first one wrote. `cp2` is left alone,
/// and points without a `cp1` (linear shapes) are not given one.
pub fn smooth(seq: &mut [AnchorPoint]) {
    let n = seq.len() as isize;
    for _ in 0..SMOOTH_PASSES {
        for i in 0..n {
            if seq.ring(i).cp1.is_none() {
                continue;
            }
            let cp1 = continue_curve(seq.ring(i - 2), seq.ring(i - 1), 1.0);
            seq.ring_mut(i).cp1 = Some(cp1);
        }
    }
}
