//! Pair-sum lookup.
//!
//! Finds the first two numbers in a list that add up to a target, scanning
//! the list once.

use std::collections::HashSet;

/// Return the first `[complement, current]` pair with
/// `complement + current == target`, where `complement` appears earlier in
/// `numbers` than `current`.
///
/// "First" means the pair completed at the lowest index. A number never pairs
/// with itself unless the same value occurred earlier in the list.
pub fn find_pair_summing_to(numbers: &[i64], target: i64) -> Option<[i64; 2]> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(numbers.len());

    for &current in numbers {
        // An overflowing complement cannot be among the seen values.
        if let Some(complement) = target.checked_sub(current) {
            if seen.contains(&complement) {
                return Some([complement, current]);
            }
        }
        seen.insert(current);
    }

    None
}
