use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

pub const DEFAULT_ARRAY_NAME: &str = "WORDS";

const COMMENT_PREFIX: char = '#';

/// Trimmed, non-empty, non-comment lines of a word file, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordsList {
    pub words: Vec<String>,
}

impl WordsList {
    /// Lines end at `\n`, `\r\n` or a lone `\r`. A comment is a line whose
    /// first character, before trimming, is `#`.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            for raw in line.split('\r') {
                if raw.starts_with(COMMENT_PREFIX) {
                    continue;
                }
                let word = raw.trim();
                if !word.is_empty() {
                    words.push(word.to_owned());
                }
            }
        }
        Ok(Self { words })
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Escape a line so it can sit between double quotes in a Rust string literal.
pub fn escape(line: &str) -> String {
    line.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A `pub const` array of string literals plus its `LENGTH` constant.
///
/// Rendered as:
///
/// ```text
/// // Auto-generated from words.txt
///
/// pub const LENGTH: usize = 2;
/// pub const WORDS: [&'static str; LENGTH] = [
///     "apple",
///     "banana",
/// ];
/// ```
pub struct ArrayDeclaration<'a> {
    source_name: &'a str,
    array_name: &'a str,
    words: &'a WordsList,
}

impl<'a> ArrayDeclaration<'a> {
    pub fn new(source_name: &'a str, array_name: &'a str, words: &'a WordsList) -> Self {
        Self {
            source_name,
            array_name,
            words,
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl Display for ArrayDeclaration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "// Auto-generated from {}", self.source_name)?;
        writeln!(f)?;
        writeln!(f, "pub const LENGTH: usize = {};", self.words.len())?;
        writeln!(
            f,
            "pub const {}: [&'static str; LENGTH] = [",
            self.array_name
        )?;
        for word in &self.words.words {
            writeln!(f, "    \"{}\",", escape(word))?;
        }
        writeln!(f, "];")
    }
}
