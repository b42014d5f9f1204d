//! 编号菜单选择

use std::io::{self, BufRead, Write};

pub trait Chooser {
    /// Index into `items` of the user's pick, or `None` when they cancel.
    fn choose(&mut self, items: &[String]) -> io::Result<Option<usize>>;
}

/// Prints `[0] Cancel` followed by `[1]..[n]` and reads numbers until one is valid.
///
/// End of input counts as cancel.
pub struct MenuChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Chooser for MenuChooser<R, W> {
    fn choose(&mut self, items: &[String]) -> io::Result<Option<usize>> {
        writeln!(self.output, "[0] Cancel")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "[{}] {item}", i + 1)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(n) if n <= items.len() => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Pick a number between 0 and {}", items.len())?,
            }
        }
    }
}
