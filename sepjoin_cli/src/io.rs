use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Read, StdoutLock, Write, stdin, stdout},
};

/// Path to an input file, or `-` for standard input
#[derive(Debug, Clone)]
pub enum FileOrStdin {
    FilePath(String),
    Stdin,
}

impl fmt::Display for FileOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "-"),
            Self::FilePath(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for FileOrStdin {
    fn from(value: String) -> Self {
        if value == "-" {
            Self::Stdin
        } else {
            Self::FilePath(value)
        }
    }
}

impl FileOrStdin {
    pub fn read_to_string(&self) -> io::Result<String> {
        let mut contents = String::new();
        match self {
            Self::FilePath(fp) => File::open(fp)?.read_to_string(&mut contents)?,
            Self::Stdin => stdin().lock().read_to_string(&mut contents)?,
        };
        Ok(contents)
    }
}

/// Path to an output file, or `-` for standard output
#[derive(Debug, Clone)]
pub enum FileOrStdout {
    FilePath(String),
    Stdout,
}

impl fmt::Display for FileOrStdout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "-"),
            Self::FilePath(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for FileOrStdout {
    fn from(value: String) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::FilePath(value)
        }
    }
}

impl FileOrStdout {
    pub fn create(&self) -> io::Result<Output> {
        match self {
            Self::FilePath(fp) => Ok(Output::File(BufWriter::new(File::create(fp)?))),
            Self::Stdout => Ok(Output::Stdout(stdout().lock())),
        }
    }
}

/// Single writer for the whole run, so output of one command is never interleaved
pub enum Output {
    File(BufWriter<File>),
    Stdout(StdoutLock<'static>),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.write(buf),
            Self::Stdout(lock) => lock.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(f) => f.flush(),
            Self::Stdout(lock) => lock.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_standard_stream() {
        assert!(matches!(FileOrStdin::from("-".to_owned()), FileOrStdin::Stdin));
        assert!(matches!(
            FileOrStdout::from("out.txt".to_owned()),
            FileOrStdout::FilePath(ref fp) if fp == "out.txt"
        ));
        assert_eq!(FileOrStdout::Stdout.to_string(), "-");
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("sepjoin-io-{}.txt", std::process::id()));
        let path_str = path.to_string_lossy().into_owned();

        let mut output = FileOrStdout::from(path_str.clone()).create().unwrap();
        output.write_all(b"1 , 2").unwrap();
        output.flush().unwrap();
        drop(output);

        let contents = FileOrStdin::from(path_str).read_to_string().unwrap();
        assert_eq!(contents, "1 , 2");
        std::fs::remove_file(path).unwrap();
    }
}
