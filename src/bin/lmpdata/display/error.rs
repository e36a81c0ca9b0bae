use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_parse_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_parse_hints(&mut self, err: &Error) {
        use lmpdata::ParseError;

        let Some(parse_err) = err.downcast_ref::<ParseError>() else {
            return;
        };

        self.mark_typed();

        match parse_err {
            ParseError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            ParseError::MissingKeyword { line, keyword, .. } => {
                self.add(format!("Line {} should carry the '{}' keyword", line, keyword));
                self.collect_keyword_hints(keyword);
            }

            ParseError::MalformedNumber { line, field, token } => {
                self.add(format!(
                    "'{}' on line {} is not a valid {}",
                    token, line, field
                ));
                self.add("Ids, molecule ids and types must be integers");
                self.add("Coordinates and box values must be decimal numbers");
            }

            ParseError::TruncatedRecord {
                record,
                expected,
                found,
                ..
            } => {
                self.add(format!(
                    "A {} needs {} fields but only {} were found",
                    record, expected, found
                ));
                if record.starts_with("molecular") {
                    self.add("Molecular records are laid out as: id mol-id type x y z");
                    self.add("If the file has no molecule column, declare 'Atoms # atomic'");
                } else if record.starts_with("atomic") {
                    self.add("Atomic records are laid out as: id type x y z");
                } else {
                    self.add("Header lines list their numbers before the keyword");
                }
            }

            ParseError::UnexpectedEndOfInput { expected, .. } => {
                self.add(format!("The input ended while looking for {}", expected));
                if expected.starts_with("atom line") {
                    self.add("The header declares more atoms than the Atoms section holds");
                    self.add("Check the '<N> atoms' count against the atom lines");
                } else {
                    self.add("The file may be truncated or incomplete");
                }
            }

            ParseError::StyleAlreadyDetected(style) => {
                self.add(format!("The atom style was already fixed as '{}'", style));
                self.add("Only a single Atoms section is read per file");
            }
        }
    }

    fn collect_keyword_hints(&mut self, keyword: &str) {
        match keyword {
            "xy xz yz" => {
                self.add("Every header must carry a tilt line, even for orthogonal boxes");
                self.add("Add '0.0 0.0 0.0 xy xz yz' after the zlo zhi line");
                self.add("Or pass --optional-tilt to accept orthogonal files without one");
            }

            "Atoms" => {
                self.add("The Atoms section header must follow the header and one blank line");
                self.add("Sections such as Masses before Atoms are not supported");
            }

            "xlo xhi" | "ylo yhi" | "zlo zhi" => {
                self.add("Box bounds are expected directly after the atom types line");
                self.add("Blank lines inside the header are not skipped");
            }

            _ => {
                self.add("Header lines must appear in the order: title, atoms, atom types, bounds, tilts");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("Input is not valid UTF-8 text");
                self.add("LAMMPS data files are plain text; check the file is not binary");
            }

            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path and permissions");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
            self.add("Input appears to be from a terminal");
            self.add("Provide a file argument or pipe data to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
