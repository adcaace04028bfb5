mod scanner;
mod char_scanner;

pub use scanner::Scanner;
