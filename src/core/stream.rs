//! Ownership wrappers for the three byte streams a configuration carries.
//!
//! Each stream is either a named file opened by the resolver or one of the
//! process-standard streams. Dropping a `File` variant closes the underlying
//! descriptor; dropping a `Stdin`/`Stdout` variant leaves the process stream
//! untouched.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Exclusively-owned readable byte stream
#[derive(Debug)]
pub enum InputStream {
    /// The process's standard input
    Stdin,
    /// A named file opened for reading
    File { path: PathBuf, file: File },
}

impl InputStream {
    #[must_use]
    pub fn stdin() -> Self {
        Self::Stdin
    }

    /// Open the named path for reading.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the path cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        Ok(Self::File { path, file })
    }

    /// Whether this stream is the process's standard input
    #[must_use]
    pub fn is_std(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// The path this stream was opened from, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File { path, .. } => Some(path),
        }
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin => io::stdin().lock().read(buf),
            Self::File { file, .. } => file.read(buf),
        }
    }
}

impl fmt::Display for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

/// Exclusively-owned writable byte stream
#[derive(Debug)]
pub enum OutputStream {
    /// The process's standard output
    Stdout,
    /// A named file opened for writing
    File { path: PathBuf, file: File },
}

impl OutputStream {
    #[must_use]
    pub fn stdout() -> Self {
        Self::Stdout
    }

    /// Create (or truncate) the named path for writing. Files are opened in
    /// binary mode; no newline translation is performed.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the path cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self::File { path, file })
    }

    /// Whether this stream is the process's standard output
    #[must_use]
    pub fn is_std(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// The path this stream was opened from, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File { path, .. } => Some(path),
        }
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().lock().write(buf),
            Self::File { file, .. } => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().flush(),
            Self::File { file, .. } => file.flush(),
        }
    }
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}
