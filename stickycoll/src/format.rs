use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt::{self, Display, Write};

/// Renders a sequence as `[e1, e2, ..., en]`, or `[]` when empty.
#[must_use]
pub fn format_sequence<T: Display>(elements: &[T]) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_sequence(&mut out, elements);
    out
}

pub(crate) fn write_sequence<W: Write, T: Display>(out: &mut W, elements: &[T]) -> fmt::Result {
    out.write_char('[')?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{element}")?;
    }
    out.write_char(']')
}

/// Renders a map as one `  key: value` line per entry inside braces.
///
/// ```
/// # use std::collections::BTreeMap;
/// # use stickycoll::format_entries;
/// let mut map = BTreeMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
/// assert_eq!(format_entries(&map), "{\n  a: 1\n  b: 2\n}");
/// assert_eq!(format_entries(&BTreeMap::<u8, u8>::new()), "{}");
/// ```
#[must_use]
pub fn format_entries<K: Display, V: Display>(entries: &BTreeMap<K, V>) -> String {
    let mut out = String::new();
    let _ = write_entries(&mut out, entries);
    out
}

pub(crate) fn write_entries<W: Write, K: Display, V: Display>(
    out: &mut W,
    entries: &BTreeMap<K, V>,
) -> fmt::Result {
    if entries.is_empty() {
        return out.write_str("{}");
    }
    out.write_str("{\n")?;
    for (key, value) in entries {
        writeln!(out, "  {key}: {value}")?;
    }
    out.write_char('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence::<u8>(&[]), "[]");
        assert_eq!(format_sequence(&[7]), "[7]");
        assert_eq!(format_sequence(&["a", "b", "c"]), "[a, b, c]");
    }

    #[test]
    fn test_format_entries() {
        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(1, "one");
        assert_eq!(format_entries(&map), "{\n  1: one\n  2: two\n}");
    }
}
