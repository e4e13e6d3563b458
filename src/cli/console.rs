//! Line-oriented console I/O
//!
//! Wraps any reader/writer pair so the menu can run against stdin/stdout or
//! against in-memory buffers in tests. End of input is reported as `None`
//! rather than an error.

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

/// Prompting console over a reader and a writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    /// Read secrets from the terminal without echo
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console; secrets are read like any other line
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            hide_secrets: false,
        }
    }

    /// Read secrets through the controlling terminal with echo disabled
    pub fn with_hidden_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    /// Print `label` and read one line, without its line terminator
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        strip_line_ending(&mut line);
        Ok(Some(line))
    }

    /// Like [`prompt`](Self::prompt), for passwords
    pub fn prompt_secret(&mut self, label: &str) -> io::Result<Option<Zeroizing<String>>> {
        if self.hide_secrets {
            self.writer.flush()?;
            return rpassword::prompt_password(label).map(|s| Some(Zeroizing::new(s)));
        }

        Ok(self.prompt(label)?.map(Zeroizing::new))
    }

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Write text followed by a newline
    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.writer.write_all(b"\n")
    }

    /// Give back the writer (tests inspect captured output)
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
