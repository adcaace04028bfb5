#![deny(warnings)]

/// A cursor over the chars of an input string with backtracking.
///
/// `pos` is always the index of the next char to be consumed, so a
/// failed scan can be undone with `set_pos(backtrack)`.
pub struct Scanner {
    src: Vec<char>,
    pos: usize,
}

impl Iterator for Scanner {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner{src: source.chars().collect(), pos: 0}
    }

    pub fn pos(&self) -> usize { self.pos }

    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.src.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn is_done(&self) -> bool { self.pos >= self.src.len() }

    pub fn peek(&self) -> Option<char> {
        self.src.get(self.pos).cloned()
    }

    pub fn source(&self) -> &[char] { &self.src }

    // chars consumed since 'start' up to the current position
    pub fn view(&self, start: usize) -> &[char] {
        let start = start.min(self.pos);
        &self.src[start..self.pos]
    }

    pub fn accept(&mut self, what: &char) -> Option<char> {
        match self.peek() {
            Some(next) if next == *what => self.next(),
            _ => None,
        }
    }

    // Advance the scanner only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(&next) => self.next(),
            _ => None,
        }
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}
