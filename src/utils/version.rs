//! RPM-style version comparison.
//!
//! Versions are split into runs of ASCII digits and runs of ASCII letters;
//! every other byte is a separator and only delimits runs. A `~` marks a
//! pre-release and sorts before anything at the same position, including the
//! end of the string.

use std::cmp::Ordering;

/// Compare two version strings.
///
/// Returns [`Ordering::Less`] when `a` is older than `b`, [`Ordering::Greater`]
/// when it is newer.
///
/// Run rules, applied left to right until one decides:
/// - digit runs compare numerically, so `"10"` is newer than `"9"`;
/// - letter runs compare by byte value;
/// - a digit run is newer than a letter run at the same position;
/// - when one string runs out, a remaining digit run makes the longer string
///   newer and a remaining letter run makes it older (`"1.0a" < "1.0"`).
///
/// The empty string is older than any non-empty string.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.is_empty() {
        return Ordering::Less;
    }
    if b.is_empty() {
        return Ordering::Greater;
    }

    let mut one = a.as_bytes();
    let mut two = b.as_bytes();

    loop {
        one = skip_separators(one);
        two = skip_separators(two);

        match (one.first() == Some(&b'~'), two.first() == Some(&b'~')) {
            (true, true) => {
                one = &one[1..];
                two = &two[1..];
                continue;
            }
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        if one.is_empty() || two.is_empty() {
            break;
        }

        let numeric = one[0].is_ascii_digit();
        let (run_one, rest_one) = split_run(one, numeric);
        let (run_two, rest_two) = split_run(two, numeric);

        // Runs of different kinds: digits win.
        if run_two.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ord = if numeric {
            compare_numeric(run_one, run_two)
        } else {
            run_one.cmp(run_two)
        };
        if ord != Ordering::Equal {
            return ord;
        }

        one = rest_one;
        two = rest_two;
    }

    match (one.first(), two.first()) {
        (Some(c), None) => tail_ordering(*c),
        (None, Some(c)) => tail_ordering(*c).reverse(),
        _ => Ordering::Equal,
    }
}

/// Ordering of the side that still has a run left after the other ran out.
const fn tail_ordering(first: u8) -> Ordering {
    if first.is_ascii_alphabetic() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

fn skip_separators(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|c| c.is_ascii_alphanumeric() || *c == b'~')
        .unwrap_or(s.len());
    &s[start..]
}

fn split_run(s: &[u8], numeric: bool) -> (&[u8], &[u8]) {
    let end = s
        .iter()
        .position(|c| {
            if numeric {
                !c.is_ascii_digit()
            } else {
                !c.is_ascii_alphabetic()
            }
        })
        .unwrap_or(s.len());
    s.split_at(end)
}

fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|c| *c != b'0').unwrap_or(s.len());
    &s[start..]
}

/// An epoch/version/release triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evr<'a> {
    /// Missing epochs count as 0
    pub epoch: u64,
    pub version: &'a str,
    pub release: Option<&'a str>,
}

impl<'a> Evr<'a> {
    #[must_use]
    pub const fn new(epoch: Option<u64>, version: &'a str, release: Option<&'a str>) -> Self {
        Self {
            epoch: match epoch {
                Some(e) => e,
                None => 0,
            },
            version,
            release,
        }
    }
}

/// Compare two EVR triples: epoch numerically, then version, then release.
///
/// Releases only take part when both sides carry one.
#[must_use]
pub fn compare_evr(a: &Evr<'_>, b: &Evr<'_>) -> Ordering {
    a.epoch
        .cmp(&b.epoch)
        .then_with(|| compare_versions(a.version, b.version))
        .then_with(|| match (a.release, b.release) {
            (Some(ra), Some(rb)) => compare_versions(ra, rb),
            _ => Ordering::Equal,
        })
}
