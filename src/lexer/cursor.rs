/// A position inside one physical source line.
///
/// `pos` is a byte offset into the line, `column` the 1-based character
/// column of the character at `pos`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor::resume(source, 0)
    }

    /// Places the cursor at byte offset `pos`, which must be a char boundary.
    pub fn resume(source: &'a str, pos: usize) -> Cursor<'a> {
        Cursor {
            source,
            pos,
            column: source[..pos].chars().count() + 1,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.first()?;
        self.pos += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Skips `n` bytes, which must end on a char boundary.
    pub fn advance_bytes(&mut self, n: usize) {
        self.column += self.rest()[..n].chars().count();
        self.pos += n;
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.first() {
            if !predicate(c) {
                break;
            }
            self.bump();
        }
    }

    /// Moves to the end of the line.
    pub fn eat_rest(&mut self) {
        self.eat_while(|_| true);
    }

    /// Text consumed since byte offset `start`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.source.len()
    }
}
