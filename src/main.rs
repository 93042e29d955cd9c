use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Part;
use serde::{de::IntoDeserializer, Deserialize};

/// Package holding the puzzle binaries.
const PACKAGE: &str = "y2025";

/// Directory holding inputs, relative to the workspace root.
const INPUTS: &str = "years/2025/inputs";

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Executable {
    name: String,
    path: PathBuf,
}

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    args: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    /// Test if options are verbose.
    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Build all puzzle binaries and collect their paths.
fn build() -> Result<Vec<Executable>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.arg("build");
    cmd.arg("--release");
    cmd.args(["-p", PACKAGE]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn().context("failed to run cargo")?;

    let output = child.stdout.take().context("missing stdout")?;
    let output = serde_json::Deserializer::from_reader(output).into_iter();

    let mut executables = Vec::new();

    for value in output {
        let value: serde_json::Value = value?;

        if !matches!(
            value.get("reason").and_then(|d| d.as_str()),
            Some("compiler-artifact")
        ) {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        let [kind] = &artifact.target.kind[..] else {
            continue;
        };

        if kind != "bin" {
            continue;
        }

        let path = artifact.executable.context("missing executable")?;

        executables.push(Executable {
            name: artifact.target.name,
            path,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("cargo build failed: {status}");
    }

    executables.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(executables)
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let inputs = Path::new(env!("CARGO_MANIFEST_DIR")).join(INPUTS);

    let mut answers = 0usize;
    let mut failed = Vec::new();

    for e in build()? {
        let input = inputs.join(format!("{}.txt", e.name));

        let mut cmd = Command::new(&e.path);
        cmd.stdout(Stdio::piped());
        cmd.arg("--json");
        cmd.args(&opts.args[..]);

        if input.is_file() {
            cmd.arg("--");
            cmd.arg(&input);
        } else if opts.is_verbose() {
            println!("{name}: no input at {}", input.display(), name = e.name);
        }

        let mut child = cmd.spawn()?;
        let output = child.stdout.take().context("missing stdout")?;
        let output = serde_json::Deserializer::from_reader(output).into_iter();

        for value in output {
            let value: serde_json::Value = value?;

            match value.get("type").and_then(|d| d.as_str()) {
                Some("answer") => {
                    let summary = Data::<Summary>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!(
                            "{name}: {part}: {value}",
                            name = e.name,
                            part = summary.part,
                            value = summary.value
                        );
                    }

                    answers += 1;
                }
                Some("message") => {
                    let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

                    if opts.is_verbose() || message.is_important() {
                        println!(
                            "{name}: {kind}: {output}",
                            name = e.name,
                            kind = message.kind,
                            output = message.output
                        );
                    }
                }
                _ => {}
            }
        }

        let status = child.wait()?;

        if opts.is_verbose() {
            println!("{name}: {status}", name = e.name);
        }

        if !status.success() {
            failed.push(e.name);
        }
    }

    println!("total: {answers} answers");

    if !failed.is_empty() {
        bail!("failed: {}", failed.join(", "));
    }

    Ok(())
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

/// An answer line, ignoring the structured answer itself.
#[derive(Deserialize)]
struct Summary {
    part: Part,
    value: String,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_important(&self) -> bool {
        matches!(self.kind.as_str(), "error")
    }
}
