/// A forward-only position in a source string.
///
/// Both tokenizers consume their input through a `Cursor`: the block pass
/// over a document (or a container's dedented text), the inline pass over a
/// block's text. Rules look at [`Cursor::rest`] and the cursor advances by
/// whole matches only, so no emitted token is ever re-scanned.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, at: 0 }
    }

    /// Byte offset of the cursor.
    pub fn pos(&self) -> usize {
        self.at
    }

    pub fn eof(&self) -> bool {
        self.at >= self.src.len()
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'a str {
        self.src.get(self.at..).unwrap_or_default()
    }

    /// The character just before the cursor, used for flanking checks.
    pub fn prev_char(&self) -> Option<char> {
        self.src.get(..self.at)?.chars().next_back()
    }

    /// Advances by `n` bytes. `n` must land on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.at += n;
    }

    /// Consumes `n` bytes and returns them.
    pub fn take(&mut self, n: usize) -> &'a str {
        let taken = &self.rest()[..n];
        self.at += n;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_advances() {
        let mut cur = Cursor::new("# head");
        assert_eq!(cur.take(2), "# ");
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.rest(), "head");
        assert_eq!(cur.prev_char(), Some(' '));
    }

    #[test]
    fn empty_input_is_eof() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.prev_char(), None);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn prev_char_is_multibyte_aware() {
        let mut cur = Cursor::new("é*");
        cur.bump_n('é'.len_utf8());
        assert_eq!(cur.prev_char(), Some('é'));
        assert_eq!(cur.rest(), "*");
    }

    #[test]
    fn bump_past_end_is_eof() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
    }
}
