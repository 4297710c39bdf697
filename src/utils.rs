//! Channel-string expansion.
//!
//! Physical channel specifiers may name several lines at once through a
//! colon range (`"dev1/ai0:3"`). Collections expand the specifier to count
//! lines before synthesizing the virtual channel name; everything else about
//! the string is opaque to this layer.

/// Expands a flattened channel specifier into individual channel names.
///
/// Comma-separated entries expand independently. An entry ending in
/// `<lo>:<hi>` expands over the inclusive index range, high-to-low when the
/// range descends; the part after the colon may repeat the prefix
/// (`"dev1/ai0:dev1/ai3"`) or be a bare index (`"dev1/ai0:3"`). Entries
/// that do not parse as a range pass through unchanged.
pub fn unflatten_channel_string(flattened: &str) -> Vec<String> {
    flattened
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .flat_map(expand_entry)
        .collect()
}

fn expand_entry(entry: &str) -> Vec<String> {
    let Some((head, tail)) = entry.split_once(':') else {
        return vec![entry.to_owned()];
    };
    let (prefix, Some(lo)) = split_trailing_index(head) else {
        return vec![entry.to_owned()];
    };
    let (tail_prefix, Some(hi)) = split_trailing_index(tail) else {
        return vec![entry.to_owned()];
    };
    if !tail_prefix.is_empty() && tail_prefix != prefix {
        return vec![entry.to_owned()];
    }
    if lo <= hi {
        (lo..=hi).map(|index| format!("{prefix}{index}")).collect()
    } else {
        (hi..=lo)
            .rev()
            .map(|index| format!("{prefix}{index}"))
            .collect()
    }
}

/// Splits `"dev1/ai12"` into `("dev1/ai", Some(12))`; the index is `None`
/// when the entry has no trailing digits.
fn split_trailing_index(s: &str) -> (&str, Option<u32>) {
    let digits = s.chars().rev().take_while(char::is_ascii_digit).count();
    let (prefix, index) = s.split_at(s.len() - digits);
    (prefix, index.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_channel_passes_through() {
        assert_eq!(unflatten_channel_string("dev1/ai0"), vec!["dev1/ai0"]);
    }

    #[test]
    fn colon_range_expands() {
        assert_eq!(
            unflatten_channel_string("dev1/ai0:3"),
            vec!["dev1/ai0", "dev1/ai1", "dev1/ai2", "dev1/ai3"]
        );
    }

    #[test]
    fn range_with_repeated_prefix_expands() {
        assert_eq!(
            unflatten_channel_string("dev1/ai2:dev1/ai4"),
            vec!["dev1/ai2", "dev1/ai3", "dev1/ai4"]
        );
    }

    #[test]
    fn descending_range_expands_high_to_low() {
        assert_eq!(
            unflatten_channel_string("dev1/ai3:1"),
            vec!["dev1/ai3", "dev1/ai2", "dev1/ai1"]
        );
    }

    #[test]
    fn comma_separated_entries_expand_independently() {
        assert_eq!(
            unflatten_channel_string("dev1/ai0:1, dev1/ai5"),
            vec!["dev1/ai0", "dev1/ai1", "dev1/ai5"]
        );
    }

    #[test]
    fn mismatched_prefixes_stay_literal() {
        assert_eq!(
            unflatten_channel_string("dev1/ai0:dev2/ai3"),
            vec!["dev1/ai0:dev2/ai3"]
        );
    }

    #[test]
    fn entry_without_index_stays_literal() {
        assert_eq!(
            unflatten_channel_string("dev1/port0:x"),
            vec!["dev1/port0:x"]
        );
    }

    #[test]
    fn empty_string_expands_to_nothing() {
        assert!(unflatten_channel_string("").is_empty());
    }
}
