use regex::Regex;

/// Narrowest fence the markdown processor recognises.
pub const MIN_FENCE_LENGTH: usize = 3;

const FENCE_CHAR: &str = "`";

/// Longest run of backticks in `text`, or 0 if there is none.
#[must_use]
pub fn longest_backtick_run(text: &str) -> usize {
    static BACKTICK_RUN_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"`+").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
    });

    BACKTICK_RUN_RE
        .find_iter(text)
        .map(|m| m.as_str().len())
        .max()
        .unwrap_or(0)
}

/// Pick the shortest backtick fence that occurs in none of `texts`.
///
/// Any text later placed between two copies of the returned fence cannot
/// close the block early, provided it was one of the inspected texts (or a
/// substring of one).
///
/// # Examples
///
/// ```
/// use quote_reminder::markdown::fence::get_unused_fence;
///
/// assert_eq!(get_unused_fence(&["plain text"]), "```");
/// assert_eq!(get_unused_fence(&["```rust\nfn main() {}\n```"]), "````");
/// ```
#[must_use]
pub fn get_unused_fence(texts: &[&str]) -> String {
    let longest = texts
        .iter()
        .map(|t| longest_backtick_run(t))
        .max()
        .unwrap_or(0);
    let length = MIN_FENCE_LENGTH.max(longest + 1);
    FENCE_CHAR.repeat(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_minimum_fence() {
        assert_eq!(get_unused_fence(&[]), "```");
        assert_eq!(get_unused_fence(&[""]), "```");
    }

    #[test]
    fn short_runs_do_not_widen_fence() {
        assert_eq!(get_unused_fence(&["use `x` and ``y``"]), "```");
    }

    #[test]
    fn fence_outgrows_every_inspected_text() {
        let fence = get_unused_fence(&["a ```` b", "``````"]);
        assert_eq!(fence.len(), 7);
        assert!(!"a ```` b".contains(&fence));
        assert!(!"``````".contains(&fence));
    }

    #[test]
    fn counts_runs_anywhere_not_only_at_line_start() {
        assert_eq!(longest_backtick_run("inline ````` here"), 5);
    }
}
