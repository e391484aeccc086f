use std::collections::HashMap;

use super::Color;

/// Maps pixel-art glyphs to optional colors.
///
/// A glyph is a single user-perceived character stored as a `String`, so
/// multi-scalar emoji such as `"❤️"` work as keys. A glyph mapped to `None`
/// paints nothing, which is distinct from [`Color::CLEAR`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    colors: HashMap<String, Option<Color>>,
    longest_key: usize,
}

const VARIATION_SELECTORS: [char; 2] = ['\u{FE0F}', '\u{FE0E}'];

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in emoji palette.
    pub fn standard() -> Self {
        [
            ("❔", None),
            ("\u{26AA}\u{FE0F}", Some(Color::CLEAR)),
            ("💣", Some(Color::BLACK)),
            ("💭", Some(Color::WHITE)),
            ("🐺", Some(Color::GRAY)),
            ("\u{2764}\u{FE0F}", Some(Color::RED)),
            ("🍊", Some(Color::ORANGE)),
            ("🍋", Some(Color::YELLOW)),
            ("🍏", Some(Color::GREEN)),
            ("🦋", Some(Color::BLUE)),
            ("🍇", Some(Color::PURPLE)),
            ("🌸", Some(Color::PINK)),
            ("🐻", Some(Color::BROWN)),
        ]
        .into_iter()
        .collect()
    }

    /// `None` when the glyph is unknown, `Some(None)` when it is mapped to
    /// "no paint".
    pub fn get(&self, glyph: &str) -> Option<Option<Color>> {
        self.colors.get(glyph).copied()
    }

    pub fn set(&mut self, glyph: impl Into<String>, color: Option<Color>) {
        let glyph = glyph.into();
        self.longest_key = self.longest_key.max(glyph.len());
        self.colors.insert(glyph, color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Splits a row of glyphs into keys.
    ///
    /// At each position the longest known key wins. Text that matches no key
    /// becomes a one-character glyph together with any trailing variation
    /// selectors, so unknown emoji still come out whole.
    ///
    /// Splitting is not grapheme-cluster aware. A multi-codepoint sequence
    /// that is not a key, such as a ZWJ family or a skin-tone modifier,
    /// comes out as several glyphs. Add such sequences to the table to keep
    /// them whole.
    pub fn split_row<'a>(&self, row: &'a str) -> Vec<&'a str> {
        let mut glyphs = Vec::new();
        let mut rest = row;
        while !rest.is_empty() {
            let len = self.longest_match(rest).unwrap_or_else(|| fallback_glyph_len(rest));
            let (glyph, tail) = rest.split_at(len);
            glyphs.push(glyph);
            rest = tail;
        }
        glyphs
    }

    fn longest_match(&self, s: &str) -> Option<usize> {
        let limit = self.longest_key.min(s.len());
        (1..=limit)
            .rev()
            .filter(|&n| s.is_char_boundary(n))
            .find(|&n| self.colors.contains_key(&s[..n]))
    }
}

fn fallback_glyph_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    let Some((_, first)) = chars.next() else { return 0 };
    let mut end = first.len_utf8();
    for (i, c) in chars {
        if !VARIATION_SELECTORS.contains(&c) {
            break;
        }
        end = i + c.len_utf8();
    }
    end
}

impl<S: Into<String>> FromIterator<(S, Option<Color>)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (S, Option<Color>)>>(iter: I) -> Self {
        let mut table = ColorTable::new();
        for (glyph, color) in iter {
            table.set(glyph, color);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_lookups() {
        let table = ColorTable::standard();
        assert_eq!(table.len(), 13);
        assert_eq!(table.get("❔"), Some(None));
        assert_eq!(table.get("\u{26AA}\u{FE0F}"), Some(Some(Color::CLEAR)));
        assert_eq!(table.get("🍏"), Some(Some(Color::GREEN)));
        assert_eq!(table.get("x"), None);
    }

    #[test]
    fn split_row_keeps_multi_scalar_glyphs_whole() {
        let table = ColorTable::standard();
        let row = "❔\u{2764}\u{FE0F}💣\u{26AA}\u{FE0F}";
        assert_eq!(table.split_row(row), vec!["❔", "\u{2764}\u{FE0F}", "💣", "\u{26AA}\u{FE0F}"]);
    }

    #[test]
    fn split_row_prefers_longest_key() {
        let table: ColorTable = [("a", Some(Color::RED)), ("ab", Some(Color::BLUE))].into_iter().collect();
        assert_eq!(table.split_row("abab a"), vec!["ab", "ab", " ", "a"]);
    }

    #[test]
    fn unknown_glyphs_keep_their_variation_selector() {
        let table = ColorTable::new();
        assert_eq!(table.split_row("\u{2600}\u{FE0F}x"), vec!["\u{2600}\u{FE0F}", "x"]);
    }

    #[test]
    fn zwj_sequences_split_unless_keyed() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let mut table = ColorTable::new();
        assert_eq!(table.split_row(family).len(), 5);
        table.set(family, Some(Color::BROWN));
        assert_eq!(table.split_row(family), vec![family]);
    }

    #[test]
    fn set_overrides_entry() {
        let mut table = ColorTable::standard();
        table.set("💣", Some(Color::BLUE));
        assert_eq!(table.get("💣"), Some(Some(Color::BLUE)));
        table.set(".", None);
        assert_eq!(table.get("."), Some(None));
        assert_eq!(table.split_row(".."), vec![".", "."]);
    }
}
