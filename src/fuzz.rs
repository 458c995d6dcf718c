//! 0-100 string similarity scorers and best-match extraction.
//!
//! The scorers sit on top of `strsim`'s normalized Levenshtein similarity.
//! [`weighted_ratio`] picks between the plain, partial and token-based
//! scorers depending on how different the two lengths are, which makes it a
//! reasonable default for short codes and display names alike.

use std::collections::BTreeSet;

/// A choice together with its score and position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<'a> {
    pub choice: &'a str,
    pub score: f64,
    pub index: usize,
}

/// Plain similarity of the two whole strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best similarity of the shorter string against every same-length window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let long_chars: Vec<char> = long.chars().collect();
    let window = short.chars().count();
    if window == long_chars.len() {
        return ratio(short, long);
    }

    let mut best: f64 = 0.0;
    for start in 0..=(long_chars.len() - window) {
        let slice: String = long_chars[start..start + window].iter().collect();
        let score = ratio(short, &slice);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

fn sorted_tokens(s: &str) -> String {
    let mut words = tokens(s);
    words.sort_unstable();
    words.join(" ")
}

/// Ratio after sorting whitespace-separated tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Token-set comparison: shared tokens count fully, leftovers are compared
/// against the shared part.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = tokens(a).into_iter().collect();
    let set_b: BTreeSet<&str> = tokens(b).into_iter().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let sect: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let diff_ab: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let diff_ba: Vec<&str> = set_b.difference(&set_a).copied().collect();

    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let sect = sect.join(" ");
    let join = |diff: &[&str]| {
        if sect.is_empty() {
            diff.join(" ")
        } else {
            format!("{} {}", sect, diff.join(" "))
        }
    };
    let combined_ab = join(&diff_ab);
    let combined_ba = join(&diff_ba);

    let mut best = ratio(&combined_ab, &combined_ba);
    if !sect.is_empty() {
        best = best
            .max(ratio(&sect, &combined_ab))
            .max(ratio(&sect, &combined_ba));
    }
    best
}

/// Partial ratio over sorted tokens; any shared token scores 100.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = tokens(a).into_iter().collect();
    let set_b: BTreeSet<&str> = tokens(b).into_iter().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    if set_a.intersection(&set_b).next().is_some() {
        return 100.0;
    }

    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Weighted combination of the scorers above.
///
/// Similar lengths use the whole-string and token scorers. Once one string
/// is at least half again as long as the other, partial scorers take over,
/// scaled down harder when the lengths differ by 8x or more.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    const UNBASE_SCALE: f64 = 0.95;

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(a, b);

    if len_ratio < 1.5 {
        return base
            .max(token_sort_ratio(a, b) * UNBASE_SCALE)
            .max(token_set_ratio(a, b) * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    base.max(partial_ratio(a, b) * partial_scale)
        .max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}

/// Score every choice with [`weighted_ratio`] and keep the best `limit`.
///
/// Sorting is stable, so equal scores keep their input order.
pub fn extract<'a, I>(query: &str, choices: I, limit: usize) -> Vec<Scored<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<Scored<'a>> = choices
        .into_iter()
        .enumerate()
        .map(|(index, choice)| Scored {
            choice,
            score: weighted_ratio(query, choice),
            index,
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// The single best choice; the first one wins ties. `None` only when there
/// are no choices at all.
pub fn extract_one<'a, I>(query: &str, choices: I) -> Option<Scored<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<Scored<'a>> = None;
    for (index, choice) in choices.into_iter().enumerate() {
        let score = weighted_ratio(query, choice);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Scored {
                choice,
                score,
                index,
            });
        }
    }
    best
}
