// String similarity for look-alike domain detection.
//
// Ratcliff/Obershelp "gestalt" matching: find the longest common block,
// recurse on the pieces to its left and right, and report
// 2 * matched / (len(a) + len(b)). Among equally long blocks the one that
// starts earliest in `a` (then in `b`) wins, which keeps the result stable.

/// Similarity ratio in `0.0..=1.0`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_chars(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / total as f64
}

/// The candidate most similar to `word` with a ratio of at least `cutoff`.
///
/// Equal ratios go to the lexicographically larger candidate.
pub fn closest_match<'a, I>(word: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|c| (ratio(word, c), c))
        .filter(|(r, _)| *r >= cutoff)
        .max_by(|(ra, ca), (rb, cb)| ra.total_cmp(rb).then_with(|| ca.cmp(cb)))
        .map(|(_, c)| c)
}

fn matching_chars(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matching_chars(a, b, alo, i, blo, j) + matching_chars(a, b, i + size, ahi, j + size, bhi)
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as (i, j, size).
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    if alo >= ahi || blo >= bhi {
        return best;
    }

    // run[k] = length of the common run ending at a[i-1], b[blo + k - 1]
    let width = bhi - blo + 1;
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];
    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            cur[j - blo + 1] = k;
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_disjoint() {
        assert_eq!(ratio("gmail.com", "gmail.com"), 1.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn test_known_ratio() {
        // "abcd" vs "bcde": common block "bcd" -> 2 * 3 / 8
        assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_one_substitution() {
        // "paypa1.com" vs "paypal.com": 9 of 10 characters line up
        assert!((ratio("paypa1.com", "paypal.com") - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_closest_match_respects_cutoff() {
        let trusted = ["gmail.com", "yahoo.com", "outlook.com"];
        assert_eq!(closest_match("gmai1.com", trusted, 0.7), Some("gmail.com"));
        assert_eq!(closest_match("zzzz.org", trusted, 0.7), None);
    }
}
