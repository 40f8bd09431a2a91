//! Destination ranking by distance.
//!
//! A randomized-pivot quicksort driven by an injected [`RouteRng`]: the pivot
//! index is drawn uniformly from the active range, and entries equal to the
//! pivot distance are grouped between the smaller and larger ones.  Only the
//! outer parts are pushed back, so a run of equal distances (every unreachable
//! node, for one) is settled in a single pass.  Pending ranges live on an
//! explicit stack rather than the call stack.
//!
//! The result is ascending by distance with unreachable nodes last.  The
//! order among equal distances depends on the RNG and is not part of the
//! contract; a fixed seed reproduces it.

use std::cmp::Ordering;

use dr_core::{Distance, NodeId, RouteRng};

/// One destination in the ranked list.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    pub node:     NodeId,
    pub distance: Distance,
}

/// Pair every node with its distance and sort ascending.
pub fn rank_by_distance(distances: &[Distance], rng: &mut RouteRng) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = distances
        .iter()
        .enumerate()
        .map(|(i, &distance)| RankedEntry { node: NodeId(i as u32), distance })
        .collect();
    quicksort(&mut entries, rng);
    entries
}

fn quicksort(entries: &mut [RankedEntry], rng: &mut RouteRng) {
    // Inclusive (start, end) ranges still to partition.
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if entries.len() > 1 {
        pending.push((0, entries.len() - 1));
    }

    // Each partition fixes at least its pivot in the final slot.
    let mut partitions = 0usize;
    while let Some((start, end)) = pending.pop() {
        let (lt, gt) = partition(entries, start, end, rng);
        partitions += 1;
        if lt > start + 1 {
            pending.push((start, lt - 1));
        }
        if gt < end {
            pending.push((gt, end));
        }
    }
    debug_assert!(partitions <= entries.len());
}

/// Split `start..=end` around a random pivot.  Returns `(lt, gt)` where
/// `lt..gt` holds the entries equal to the pivot (never empty).
fn partition(
    entries: &mut [RankedEntry],
    start: usize,
    end: usize,
    rng: &mut RouteRng,
) -> (usize, usize) {
    let pivot = entries[rng.gen_range(start..=end)].distance;

    let mut lt = start;
    let mut i = start;
    let mut gt = end + 1;
    while i < gt {
        match entries[i].distance.cmp(&pivot) {
            Ordering::Less => {
                entries.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                entries.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
