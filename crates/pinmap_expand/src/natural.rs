//! Natural (human) string ordering.
//!
//! Maximal runs of ASCII digits compare by numeric value instead of
//! character by character, so `sig2` sorts before `sig10`. Everything else
//! compares by scalar value. This ordering decides how regex-enumerated key
//! and end lists are paired, so it must be total and deterministic.

use std::cmp::Ordering;

/// Compares two strings in natural (human) order.
pub fn cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let xr = take_digit_run(&mut ai);
                    let yr = take_digit_run(&mut bi);
                    let ord = cmp_digit_runs(&xr, &yr);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    match x.cmp(&y) {
                        Ordering::Equal => {
                            ai.next();
                            bi.next();
                        }
                        ord => return ord,
                    }
                }
            }
        }
    }
}

/// Sorts a list of strings in place using natural order.
pub fn sort(strings: &mut [String]) {
    strings.sort_by(|a, b| cmp(a, b));
}

/// Consumes and returns the maximal run of ASCII digits at the iterator head.
fn take_digit_run(iter: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = iter.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        iter.next();
    }
    run
}

/// Compares two digit runs by numeric value, without overflow.
///
/// Leading zeros are stripped; the longer remaining run is the larger
/// number, and equal-length runs compare lexicographically. Runs with equal
/// value but different zero padding are ordered by run length so the
/// ordering stays total (`07` sorts after `7`).
fn cmp_digit_runs(x: &str, y: &str) -> Ordering {
    let xs = x.trim_start_matches('0');
    let ys = y.trim_start_matches('0');
    xs.len()
        .cmp(&ys.len())
        .then_with(|| xs.cmp(ys))
        .then_with(|| x.len().cmp(&y.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<&str>) -> Vec<String> {
        let mut v: Vec<String> = v.drain(..).map(str::to_string).collect();
        sort(&mut v);
        v
    }

    #[test]
    fn digits_compare_numerically() {
        assert_eq!(cmp("sig2", "sig10"), Ordering::Less);
        assert_eq!(cmp("sig10", "sig2"), Ordering::Greater);
        assert_eq!(cmp("sig2", "sig2"), Ordering::Equal);
    }

    #[test]
    fn differs_from_lexicographic() {
        // Lexicographically "sig10" < "sig2".
        assert!("sig10" < "sig2");
        assert_eq!(cmp("sig10", "sig2"), Ordering::Greater);
    }

    #[test]
    fn sort_mixed_suffixes() {
        assert_eq!(
            sorted(vec!["d10", "d2", "d1a", "d1", "d10b"]),
            vec!["d1", "d1a", "d2", "d10", "d10b"]
        );
    }

    #[test]
    fn leading_zeros_compare_by_value_then_length() {
        assert_eq!(cmp("p02", "p010"), Ordering::Less);
        assert_eq!(cmp("p7", "p07"), Ordering::Less);
        assert_eq!(cmp("p07", "p07"), Ordering::Equal);
    }

    #[test]
    fn long_runs_do_not_overflow() {
        let a = format!("n{}", "9".repeat(40));
        let b = format!("n1{}", "0".repeat(40));
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn plain_strings_compare_by_char() {
        assert_eq!(cmp("alpha", "beta"), Ordering::Less);
        assert_eq!(cmp("clk_p", "clk_n"), Ordering::Greater);
    }

    #[test]
    fn prefix_is_smaller() {
        assert_eq!(cmp("clk", "clk_p"), Ordering::Less);
    }
}
