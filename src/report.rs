use std::fmt;
use std::io::Write;

use mpi::topology::Rank;

use crate::error::Result;

/// One line of output: who is speaking and how many of us there are.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub rank: Rank,
    pub size: Rank,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hello from the process of number {} out of {} processes.",
            self.rank, self.size
        )
    }
}

/// Writes the greeting for `rank` as a single newline-terminated line and flushes `out`.
pub fn report<W: Write>(out: &mut W, rank: Rank, size: Rank) -> Result<()> {
    let line = format!("{}\n", Greeting { rank, size });
    // one write per line so ranks sharing a terminal don't interleave mid-line
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelloError;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn greeting_display_test() {
        let g = Greeting { rank: 3, size: 12 };
        assert_eq!(
            g.to_string(),
            "Hello from the process of number 3 out of 12 processes."
        );
    }

    #[test]
    fn report_single_process_test() {
        let mut buf: Vec<u8> = vec![];
        report(&mut buf, 0, 1).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Hello from the process of number 0 out of 1 processes.\n"
        );
    }

    #[test]
    fn report_no_padding_test() {
        let mut buf: Vec<u8> = vec![];
        report(&mut buf, 7, 1024).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert_eq!(out, "Hello from the process of number 7 out of 1024 processes.\n");
    }

    #[test]
    fn report_write_error_test() {
        match report(&mut ClosedPipe, 1, 2) {
            Err(HelloError::Output(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected output error, got {:?}", other),
        }
    }
}
