/// Normalize a name for letter matching: lowercase, all whitespace removed
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Letters left over after cancelling common characters.
///
/// Single greedy pass: each character of `first`, in order, cancels the
/// first not-yet-cancelled equal character of `second`. Inputs are expected
/// to be normalized already.
pub fn leftover_count(first: &str, second: &str) -> usize {
    let mut remaining: Vec<Option<char>> = second.chars().map(Some).collect();
    let mut leftover = 0;

    for c in first.chars() {
        match remaining.iter().position(|slot| *slot == Some(c)) {
            Some(j) => remaining[j] = None,
            None => leftover += 1,
        }
    }

    leftover + remaining.iter().filter(|slot| slot.is_some()).count()
}
