//! String views over deduplicated attribute maps, plus a small list
//! display helper.

use std::collections::HashMap;

/// Render `key<pair_joiner>value` entries joined by `entry_delim`.
///
/// Entry order follows map iteration order. Callers that need a different
/// look pass their own joiner and delimiter; the dedup-then-render contract
/// is unchanged either way.
pub fn render_pairs(
    map: &HashMap<String, String>,
    pair_joiner: &str,
    entry_delim: &str,
) -> String {
    let mut out = String::new();
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(entry_delim);
        }
        out.push_str(key);
        out.push_str(pair_joiner);
        out.push_str(value);
    }
    out
}

/// Summarize a list of items for display.
///
/// An empty list renders as `"0 <list_name>"`. When `limit` is positive and
/// the list is longer, the output is prefixed with the total count and
/// truncated with an ellipsis; otherwise the items are joined plainly.
pub fn summarize_list(items: &[String], delim: &str, limit: usize, list_name: &str) -> String {
    if items.is_empty() {
        return format!("0 {list_name}");
    }
    if limit > 0 && items.len() > limit {
        return format!(
            "{} {}: {}...",
            items.len(),
            list_name,
            items[..limit].join(delim)
        );
    }
    items.join(delim)
}
