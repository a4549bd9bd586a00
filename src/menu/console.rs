//! Line-oriented terminal I/O

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Where the menu reads input and writes text
#[async_trait]
pub trait Console: Send {
    /// Show `prompt` and read one line; `None` at end of input
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn println(&mut self, text: &str);

    fn clear(&mut self);
}

/// Console over a line source (stdin by default) and the process's stdout
pub struct TerminalConsole<R = BufReader<Stdin>> {
    reader: R,
    clear_screen: bool,
}

impl TerminalConsole {
    pub fn new(clear_screen: bool) -> Self {
        Self::with_reader(BufReader::new(tokio::io::stdin()), clear_screen)
    }
}

impl<R> TerminalConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn with_reader(reader: R, clear_screen: bool) -> Self {
        Self {
            reader,
            clear_screen,
        }
    }

    /// Next raw line, decoded lossily so stray bytes become ordinary invalid input
    async fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[async_trait]
impl<R> Console for TerminalConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = std::io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        self.next_line().await
    }

    fn println(&mut self, text: &str) {
        println!("{}", text);
    }

    fn clear(&mut self) {
        if self.clear_screen {
            // ANSI: erase display, cursor home
            print!("\x1B[2J\x1B[1;1H");
            let _ = std::io::stdout().flush();
        }
    }
}
