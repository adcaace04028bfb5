#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl Scanner {
    pub fn extract_string(&self, start: usize) -> String {
        self.view(start).iter().collect()
    }

    pub fn skip_whitespace(&mut self) -> bool {
        let mut advanced = false;
        while self.peek().map_or(false, char::is_whitespace) {
            self.next();
            advanced = true;
        }
        advanced
    }

    // scan a run like [0-9]*\.?[0-9]* that holds at least one char.
    // The run stops at a second '.', so "2.3.4" yields "2.3" and leaves ".4"
    pub fn scan_decimal(&mut self) -> Option<String> {
        let start = self.pos();
        let mut seen_point = false;
        loop {
            if self.skip_all(DIGITS) {
                continue;
            }
            if !seen_point && self.accept(&'.').is_some() {
                seen_point = true;
                continue;
            }
            break;
        }
        if self.pos() == start {
            return None;
        }
        Some(self.extract_string(start))
    }
}

///////////////////////////////////////////////////////////////////////////////
