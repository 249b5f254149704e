pub trait Utf16Len {
    fn utf16_len(&self) -> usize;
}

impl Utf16Len for str {
    fn utf16_len(&self) -> usize {
        self.bytes()
            .filter(|byte| (byte & 0xC0) != 0x80)
            .map(|byte| if byte >= 0xF0 { 2 } else { 1 })
            .sum()
    }
}

pub trait CharLen {
    fn char_len(&self) -> usize;
}

impl CharLen for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }
}

/// Slices `text` by a code point span, or returns `None` if the span runs past the end.
pub fn char_slice(text: &str, offset: usize, length: usize) -> Option<&str> {
    let mut boundaries = text.char_indices().map(|(index, _)| index).chain([text.len()]);
    let start = boundaries.nth(offset)?;
    let end = if length == 0 { start } else { boundaries.nth(length - 1)? };

    Some(&text[start..end])
}

/// Byte offsets of every code point in a text, plus the end of the text.
pub struct CharBoundaries<'a> {
    text: &'a str,
    boundaries: Vec<usize>,
}

impl<'a> CharBoundaries<'a> {
    pub fn new(text: &'a str) -> Self {
        let boundaries = text.char_indices().map(|(index, _)| index).chain([text.len()]).collect();
        Self { text, boundaries }
    }

    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn slice(&self, offset: usize, length: usize) -> Option<&'a str> {
        let start = *self.boundaries.get(offset)?;
        let end = *self.boundaries.get(offset.checked_add(length)?)?;
        Some(&self.text[start..end])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_utf16_len() {
        assert_eq!("abc".utf16_len(), 3);
        assert_eq!("żółw".utf16_len(), 4);
        assert_eq!("🦀🦀".utf16_len(), 4);
    }

    #[test]
    fn test_char_len() {
        assert_eq!("🦀 crab".char_len(), 6);
        assert_eq!("".char_len(), 0);
    }

    #[test]
    fn test_char_slice() {
        assert_eq!(char_slice("🦀 @crab hi", 2, 5), Some("@crab"));
        assert_eq!(char_slice("#tag", 0, 4), Some("#tag"));
        assert_eq!(char_slice("#tag", 4, 0), Some(""));
        assert_eq!(char_slice("#tag", 2, 3), None);
        assert_eq!(char_slice("#tag", 5, 0), None);
    }

    #[test]
    fn test_char_boundaries() {
        let chars = CharBoundaries::new("🦀 @crab hi");
        assert_eq!(chars.char_len(), 10);
        assert_eq!(chars.slice(2, 5), Some("@crab"));
        assert_eq!(chars.slice(10, 0), Some(""));
        assert_eq!(chars.slice(8, 3), None);
        assert_eq!(chars.slice(usize::MAX, 1), None);
        assert_eq!(CharBoundaries::new("").char_len(), 0);
    }
}
