use std::{
    pin::Pin,
    task::{
        Context,
        Poll,
    },
};

use futures_util::Stream;
use pin_project_lite::pin_project;
use tokio::io::{
    AsyncRead,
    ReadBuf,
};

use crate::{
    Error,
    Sentence,
};

const RECEIVE_BUFFER_SIZE: usize = 1024;

pin_project! {
    /// Reads sentences line by line.
    ///
    /// Lines can be terminated by `\r`, `\n` or `\r\n`. Empty lines are
    /// skipped. A line that can't be parsed is returned as an error, and the
    /// stream continues with the next line.
    #[derive(Debug)]
    pub struct Reader<R> {
        #[pin]
        reader: R,
        receive_buffer: ReceiveBuffer,
        eof: bool,
    }
}

impl<R: AsyncRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            receive_buffer: ReceiveBuffer::default(),
            eof: false,
        }
    }
}

fn parse_line(line: &[u8]) -> Result<Sentence, Error> {
    std::str::from_utf8(line)?.parse()
}

impl<R: AsyncRead> Stream for Reader<R> {
    type Item = Result<Sentence, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            let this = self.as_mut().project();

            if let Some(line) = this.receive_buffer.next_line() {
                // `\r\n` produces an empty line, which we ignore.
                if !line.is_empty() {
                    return Poll::Ready(Some(parse_line(line)));
                }
            }
            else if *this.eof {
                // the last line might not be terminated
                let line = this.receive_buffer.take_remaining();
                if line.is_empty() {
                    return Poll::Ready(None);
                }
                return Poll::Ready(Some(parse_line(line)));
            }
            else {
                this.receive_buffer.prepare_read();
                if this.receive_buffer.is_full() {
                    let skipping = this.receive_buffer.skip_line;
                    this.receive_buffer.discard_line();
                    if !skipping {
                        return Poll::Ready(Some(Err(Error::MaxLineLengthExceeded)));
                    }
                    continue;
                }

                let write_pos = this.receive_buffer.write_pos;
                let mut read_buf = ReadBuf::new(&mut this.receive_buffer.buffer[write_pos..]);
                match this.reader.poll_read(cx, &mut read_buf) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(Err(error)) => return Poll::Ready(Some(Err(error.into()))),
                    Poll::Ready(Ok(())) => {
                        let num_bytes_read = read_buf.filled().len();
                        if num_bytes_read == 0 {
                            *this.eof = true;
                        }
                        else {
                            this.receive_buffer.write_pos += num_bytes_read;
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug)]
struct ReceiveBuffer {
    buffer: [u8; RECEIVE_BUFFER_SIZE],
    read_pos: usize,
    write_pos: usize,
    no_newline_until: usize,
    /// Set while dropping the rest of an overlong line.
    skip_line: bool,
}

impl ReceiveBuffer {
    fn scan_for_newline(&mut self) -> Option<usize> {
        if let Some(index) = self.buffer[self.no_newline_until..self.write_pos]
            .iter()
            .position(|byte| *byte == b'\r' || *byte == b'\n')
        {
            let index = index + self.no_newline_until;
            self.no_newline_until = index;
            Some(index)
        }
        else {
            self.no_newline_until = self.write_pos;
            None
        }
    }

    fn next_line(&mut self) -> Option<&[u8]> {
        let newline = self.scan_for_newline()?;
        let start = if self.skip_line {
            self.skip_line = false;
            newline
        }
        else {
            self.read_pos
        };
        self.read_pos = newline + 1;
        self.no_newline_until = self.read_pos;
        Some(&self.buffer[start..newline])
    }

    fn take_remaining(&mut self) -> &[u8] {
        let start = if self.skip_line {
            self.skip_line = false;
            self.write_pos
        }
        else {
            self.read_pos
        };
        self.read_pos = self.write_pos;
        self.no_newline_until = self.write_pos;
        &self.buffer[start..self.write_pos]
    }

    /// Drops the buffered part of the current line and everything up to the
    /// next newline.
    fn discard_line(&mut self) {
        self.clear();
        self.skip_line = true;
    }

    fn prepare_read(&mut self) {
        if self.read_pos == self.write_pos {
            self.clear();
        }
        else if self.read_pos > 0 {
            // move data
            self.buffer.copy_within(self.read_pos..self.write_pos, 0);
            self.write_pos -= self.read_pos;
            self.no_newline_until -= self.read_pos;
            self.read_pos = 0;
        }
    }

    fn is_full(&self) -> bool {
        self.write_pos == self.buffer.len()
    }

    fn clear(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
        self.no_newline_until = 0;
    }
}

impl Default for ReceiveBuffer {
    fn default() -> Self {
        Self {
            buffer: [0; RECEIVE_BUFFER_SIZE],
            read_pos: 0,
            write_pos: 0,
            no_newline_until: 0,
            skip_line: false,
        }
    }
}
