//! CLI helpers.

mod error;
mod logger;
mod output;

use core::fmt;
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::IStr;

pub use self::error::ErrorContext;
pub use self::output::{Output, OutputKind};

static LOGGER: logger::StderrLogger = logger::StderrLogger;

/// A puzzle part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Part {
    One,
    Two,
}

impl From<Part> for u8 {
    #[inline]
    fn from(part: Part) -> u8 {
        match part {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = BadPart;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(BadPart(other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {}", u8::from(*self))
    }
}

/// Error raised when a part number is out of range.
#[derive(Debug)]
pub struct BadPart(u8);

impl fmt::Display for BadPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no such part `{}`, expected 1 or 2", self.0)
    }
}

impl std::error::Error for BadPart {}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Only run the given part.
    part: Option<Part>,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Path to read input from, stdin if missing.
    path: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    /// Parse options from the given arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();
        let mut rest = Vec::new();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--part" => {
                    if opts.part.is_some() {
                        bail!("duplicate `--part` arguments");
                    }

                    let part = it.next().context("missing argument to `--part`")?;
                    let part = part
                        .to_str()
                        .context("missing string argument to `--part`")?;
                    let part = part.parse::<u8>().context("bad argument to `--part`")?;
                    opts.part = Some(Part::try_from(part)?);
                }
                "-v" | "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                "-" => {
                    rest.push(OsString::from(arg));
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    rest.push(OsString::from(other));
                }
            }
        }

        rest.extend(it);

        let mut rest = rest.into_iter();

        opts.path = match rest.next() {
            Some(path) if path == "-" => None,
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        if let Some(extra) = rest.next() {
            bail!("unexpected argument: {}", extra.to_string_lossy());
        }

        Ok(opts)
    }

    /// Test if the given part should be run.
    #[inline]
    pub fn is_selected(&self, part: Part) -> bool {
        self.part.map_or(true, |p| p == part)
    }

    /// The kind of output to produce.
    #[inline]
    pub fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else if self.verbose {
            OutputKind::Detailed
        } else {
            OutputKind::Normal
        }
    }

    /// Install the logger, unless we're producing JSON.
    fn install_logger(&self) -> Result<()> {
        if self.json {
            return Ok(());
        }

        log::set_max_level(if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });

        log::set_logger(&LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(())
    }

    /// Read all of the input up front.
    fn read_input(&self) -> Result<(IStr, String)> {
        let mut buf = Vec::with_capacity(4096);

        let source = match &self.path {
            Some(path) => {
                let source = path.display().to_string();

                std::fs::File::open(path)
                    .and_then(|mut file| file.read_to_end(&mut buf))
                    .with_context(|| anyhow!("{source}"))?;

                source
            }
            None => {
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("<stdin>")?;

                String::from("<stdin>")
            }
        };

        log::debug!("read {} bytes from {source}", buf.len());
        Ok((IStr::leak(buf), source))
    }
}

/// A single run over one input, emitting answers for the selected parts.
pub struct Session<'a, O> {
    opts: &'a Opts,
    output: Output<O>,
}

impl<'a, O> Session<'a, O>
where
    O: Write,
{
    /// Construct a new session.
    pub fn new(opts: &'a Opts, output: Output<O>) -> Self {
        Self { opts, output }
    }

    /// Solve the given part if it's selected and emit its answer.
    pub fn part<T, F>(&mut self, part: Part, solve: F) -> Result<()>
    where
        F: FnOnce() -> Result<T>,
        T: Serialize + fmt::Display,
    {
        if !self.opts.is_selected(part) {
            return Ok(());
        }

        let start = Instant::now();
        let answer = solve()?;
        log::debug!("{part} took {:?}", start.elapsed());
        self.output.answer(part, &answer)?;
        Ok(())
    }

    /// Coerce into the underlying output.
    pub fn into_output(self) -> Output<O> {
        self.output
    }
}

/// Run a puzzle binary.
///
/// This parses options, reads all of the input and hands it over to `solve`
/// together with a session used to emit answers.
pub fn run<F>(solve: F) -> Result<()>
where
    F: FnOnce(IStr, &mut Session<'_, io::StdoutLock<'static>>) -> Result<()>,
{
    let opts = Opts::parse()?;
    opts.install_logger()?;

    let (input, source) = opts.read_input()?;
    let output = Output::new(io::stdout().lock(), opts.output_kind());
    let mut session = Session::new(&opts, output);

    if let Err(error) = solve(input, &mut session) {
        let error = error.context(ErrorContext::new(source));
        let mut output = session.into_output();

        if output.is_json() {
            output.error(format_args!("{error:#}"))?;
        }

        return Err(error);
    }

    Ok(())
}
