// src/io/database.rs
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One row of the STR database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub name: String,
    /// `counts[k]` is the expected longest run of `StrDatabase::strs()[k]`
    pub counts: Vec<usize>,
}

/// STR database loaded from CSV.
///
/// The header is `name,STR1,STR2,...` and each following line holds a name
/// and one expected run count per STR column.
#[derive(Debug, Clone, Default)]
pub struct StrDatabase {
    strs: Vec<String>,
    individuals: Vec<Individual>,
}

/// One CSV record and the line it starts on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    line: usize,
    fields: Vec<String>,
}

/// Split CSV text into records.
///
/// Quoting follows RFC 4180: a field wrapped in `"` may hold commas, line
/// breaks and `""` escapes. Unquoted fields are trimmed and a trailing `\r`
/// is dropped. Blank lines yield no record.
fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut chars = text.chars().peekable();
    let mut line = 1;

    while chars.peek().is_some() {
        let record_line = line;
        let mut fields = Vec::new();
        let mut blank = true;

        loop {
            while matches!(chars.peek(), Some(' ') | Some('\t')) {
                chars.next();
            }

            let mut field = String::new();
            if chars.peek() == Some(&'"') {
                blank = false;
                chars.next();
                let quote_line = line;
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            field.push('"');
                        }
                        Some('"') => break,
                        Some(c) => {
                            if c == '\n' {
                                line += 1;
                            }
                            field.push(c);
                        }
                        None => return Err(Error::database(quote_line, "unterminated quoted field")),
                    }
                }
                while matches!(chars.peek(), Some(' ') | Some('\t') | Some('\r')) {
                    chars.next();
                }
                if !matches!(chars.peek(), None | Some(',') | Some('\n')) {
                    return Err(Error::database(line, "unexpected character after quoted field"));
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c == ',' || c == '\n' {
                        break;
                    }
                    field.push(c);
                    chars.next();
                }
                let trimmed = field.trim_end_matches('\r').trim();
                if !trimmed.is_empty() {
                    blank = false;
                }
                field = trimmed.to_string();
            }
            fields.push(field);

            match chars.next() {
                Some(',') => blank = false,
                Some('\n') => {
                    line += 1;
                    break;
                }
                _ => break,
            }
        }

        if !blank {
            records.push(Record { line: record_line, fields });
        }
    }

    Ok(records)
}

impl StrDatabase {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let db = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Io { source, .. } => Error::io(path, source),
            other => other,
        })?;

        tracing::info!(
            "Loaded {} individuals with {} STRs from {}",
            db.len(),
            db.strs.len(),
            path.display()
        );
        Ok(db)
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io("<database>", e))?;

        let mut records = parse_records(&text)?.into_iter();
        let header = records
            .next()
            .ok_or_else(|| Error::database(1, "missing header row"))?;

        // The first column holds names; its title is not checked
        let strs: Vec<String> = header.fields[1..].to_vec();
        if strs.is_empty() {
            return Err(Error::database(header.line, "header has no STR columns"));
        }

        let mut seen = HashSet::new();
        for s in &strs {
            if s.is_empty() {
                return Err(Error::database(header.line, "empty STR column title"));
            }
            if !seen.insert(s.as_str()) {
                return Err(Error::database(header.line, format!("duplicate STR column '{}'", s)));
            }
        }

        let mut individuals = Vec::new();
        for record in records {
            let fields = record.fields;
            if fields.len() != strs.len() + 1 {
                return Err(Error::database(
                    record.line,
                    format!("expected {} fields, found {}", strs.len() + 1, fields.len()),
                ));
            }

            let counts = fields[1..]
                .iter()
                .zip(&strs)
                .map(|(field, s)| {
                    field.parse::<usize>().map_err(|_| {
                        Error::database(record.line, format!("invalid count '{}' for STR {}", field, s))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            individuals.push(Individual {
                name: fields[0].clone(),
                counts,
            });
        }

        Ok(StrDatabase { strs, individuals })
    }

    /// STR patterns in column order
    pub fn strs(&self) -> &[String] {
        &self.strs
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
