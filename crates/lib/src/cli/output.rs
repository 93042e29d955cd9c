use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Part;

/// Output of a puzzle binary.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

/// The kind of output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One JSON object per line.
    Json,
    /// Headline answers only.
    Normal,
    /// Answers including details, such as visualizations.
    Detailed,
}

impl<O> Output<O>
where
    O: Write,
{
    /// Construct a new output.
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Test if output is JSON.
    #[inline]
    pub fn is_json(&self) -> bool {
        matches!(self.kind, OutputKind::Json)
    }

    /// Emit an error message.
    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    /// Emit the answer to a part.
    ///
    /// The `Display` implementation of the answer is its headline, while the
    /// alternate form (`{:#}`) includes details.
    pub fn answer<T>(&mut self, part: Part, answer: &T) -> io::Result<()>
    where
        T: Serialize + fmt::Display,
    {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: Answer {
                        part,
                        value: DisplayString(answer),
                        answer,
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{part}: {answer}")?;
            }
            OutputKind::Detailed => {
                writeln!(self.out, "{part}: {answer:#}")?;
            }
        }

        Ok(())
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message { output: m, kind },
                })?;
            }
            OutputKind::Normal | OutputKind::Detailed => {
                writeln!(self.out, "{kind}: {m}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Answer,
}

#[derive(Serialize)]
#[serde(bound = "T: Serialize + fmt::Display")]
struct Answer<'a, T> {
    part: Part,
    value: DisplayString<&'a T>,
    answer: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
        }
    }
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
