//! Overwrite-in-place writer used to persist the league snapshot.

use std::{
    fs::File,
    io::{self, Cursor, Seek, SeekFrom, Write},
};

/// A resource that can be emptied before it is rewritten.
pub trait Truncate {
    /// Drop every byte of the resource.
    fn truncate(&mut self) -> io::Result<()>;
}

impl Truncate for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }
}

impl Truncate for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> io::Result<()> {
        self.get_mut().clear();
        Ok(())
    }
}

/// Rewrites the whole backing resource on every write.
///
/// This is not atomic: a crash between the truncate and the write leaves a
/// short or empty file. Callers must serialize rewrites themselves.
#[derive(Debug)]
pub struct Tape<R> {
    resource: R,
}

impl<R> Tape<R>
where
    R: Write + Seek + Truncate,
{
    /// Wrap a resource.
    pub fn new(resource: R) -> Self {
        Self { resource }
    }

    /// Replace the resource's entire content with `bytes`.
    pub fn rewrite(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.resource.truncate()?;
        self.resource.seek(SeekFrom::Start(0))?;
        self.resource.write_all(bytes)?;
        self.resource.flush()
    }

    /// Access the wrapped resource.
    pub fn get_ref(&self) -> &R {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_replaces_longer_content() {
        let mut tape = Tape::new(Cursor::new(b"12345".to_vec()));
        tape.rewrite(b"abc").unwrap();
        assert_eq!(tape.get_ref().get_ref(), b"abc");
    }

    #[test]
    fn rewrite_ignores_current_position() {
        let mut cursor = Cursor::new(b"[]".to_vec());
        cursor.seek(SeekFrom::End(0)).unwrap();
        let mut tape = Tape::new(cursor);
        tape.rewrite(br#"[{"Name":"Cleo","Wins":1}]"#).unwrap();
        tape.rewrite(b"[]").unwrap();
        assert_eq!(tape.get_ref().get_ref(), b"[]");
    }
}
