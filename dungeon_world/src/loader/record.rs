//! World-file records and the line reader that assembles them.

use log::warn;
use std::io::BufRead;

use super::LoadError;

/// One logical record of a world file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `ROOM: <id> : <name> : <description>`
    Room {
        id: String,
        name: String,
        description: String,
    },
    /// `PATH: <direction> : <roomId> : <destinationId>`
    Path {
        direction: String,
        room: String,
        destination: String,
    },
    /// `ITEM: <name> : <description> : <roomId>`
    Item {
        name: String,
        description: String,
        room: String,
    },
    /// `INIT: <roomId>`
    Init { room: String },
}

/// Record keywords, exactly as they must start a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Room,
    Path,
    Item,
    Init,
}

impl Keyword {
    fn detect(line: &str) -> Option<Self> {
        match line.get(..5)? {
            "ROOM:" => Some(Keyword::Room),
            "PATH:" => Some(Keyword::Path),
            "ITEM:" => Some(Keyword::Item),
            "INIT:" => Some(Keyword::Init),
            _ => None,
        }
    }
}

impl Record {
    /// Parse one complete record (continuation lines already joined).
    ///
    /// `line` is the line number the record started on, for diagnostics.
    pub fn parse(line: usize, text: &str) -> Result<Self, LoadError> {
        let keyword = Keyword::detect(text).ok_or(LoadError::Malformed {
            line,
            reason: "record does not start with ROOM:, PATH:, ITEM: or INIT:",
        })?;
        let body = text.get(5..).unwrap_or_default();

        if keyword == Keyword::Init {
            return Ok(Record::Init {
                room: trim(body).to_string(),
            });
        }

        let mut fields = body.splitn(3, ':').map(|field| trim(field).to_string());
        let (Some(first), Some(second), Some(third)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(LoadError::Malformed {
                line,
                reason: "expected three ':'-separated fields",
            });
        };

        Ok(match keyword {
            Keyword::Room => Record::Room {
                id: first,
                name: second,
                description: third,
            },
            Keyword::Path => Record::Path {
                direction: first,
                room: second,
                destination: third,
            },
            Keyword::Item => Record::Item {
                name: first,
                description: second,
                room: third,
            },
            Keyword::Init => unreachable!("handled above"),
        })
    }
}

/// Strip spaces, tabs and line endings from both ends.
fn trim(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Reads a world file line by line and yields `(line, record)` pairs.
///
/// A line starting with a record keyword begins a new record; any other
/// non-empty line continues the previous record and is joined to it with a
/// single space. The last record is flushed at end of input.
pub struct RecordReader<R> {
    lines: std::iter::Enumerate<std::io::Lines<R>>,
    pending: Option<(usize, String)>,
    finished: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a new reader over `input`.
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines().enumerate(),
            pending: None,
            finished: false,
        }
    }

    fn flush(&mut self) -> Option<Result<(usize, Record), LoadError>> {
        let (line, text) = self.pending.take()?;
        Some(Record::parse(line, &text).map(|record| (line, record)))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<(usize, Record), LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let Some((index, read)) = self.lines.next() else {
                self.finished = true;
                return self.flush();
            };
            let number = index + 1;
            let raw = match read {
                Ok(raw) => raw,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(LoadError::Io(err)));
                }
            };
            if raw.is_empty() {
                continue;
            }

            if Keyword::detect(&raw).is_some() {
                let previous = self.flush();
                self.pending = Some((number, trim(&raw).to_string()));
                if previous.is_some() {
                    return previous;
                }
                continue;
            }

            match self.pending.as_mut() {
                Some((_, text)) => {
                    let continuation = trim(&raw);
                    if !continuation.is_empty() {
                        text.push(' ');
                        text.push_str(continuation);
                    }
                }
                None => warn!("line {}: text outside any record ignored", number),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &str) -> Vec<(usize, Record)> {
        RecordReader::new(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_parse_room() {
        let record = Record::parse(1, "ROOM: hall : Great Hall :  A long hall.  ").unwrap();
        assert_eq!(
            record,
            Record::Room {
                id: "hall".to_string(),
                name: "Great Hall".to_string(),
                description: "A long hall.".to_string(),
            }
        );
    }

    #[test]
    fn test_last_field_keeps_colons() {
        let record = Record::parse(3, "ITEM: note : It reads: go north : hall").unwrap();
        // The third ':' splits, so the room keeps the remainder.
        assert_eq!(
            record,
            Record::Item {
                name: "note".to_string(),
                description: "It reads".to_string(),
                room: "go north : hall".to_string(),
            }
        );

        let record = Record::parse(4, "ROOM: a : A : Sign says: keep out").unwrap();
        assert!(matches!(record, Record::Room { description, .. } if description == "Sign says: keep out"));
    }

    #[test]
    fn test_parse_path_and_init() {
        assert_eq!(
            Record::parse(1, "PATH:n:hall:tower").unwrap(),
            Record::Path {
                direction: "n".to_string(),
                room: "hall".to_string(),
                destination: "tower".to_string(),
            }
        );
        assert_eq!(
            Record::parse(2, "INIT:   east hall  ").unwrap(),
            Record::Init {
                room: "east hall".to_string()
            }
        );
    }

    #[test]
    fn test_missing_fields_malformed() {
        let err = Record::parse(7, "PATH: n : hall").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 7, .. }));
    }

    #[test]
    fn test_continuation_lines_joined() {
        let records = read_all(
            "ROOM: hall : Hall : A long\n   and dusty\n\thall.\nPATH: n : hall : tower\n",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 1);
        assert_eq!(
            records[0].1,
            Record::Room {
                id: "hall".to_string(),
                name: "Hall".to_string(),
                description: "A long and dusty hall.".to_string(),
            }
        );
        assert_eq!(records[1].0, 4);
    }

    #[test]
    fn test_blank_lines_skipped_and_last_record_flushed() {
        let records = read_all("\nROOM: a : A : First.\n\n\nINIT: a");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            (
                5,
                Record::Init {
                    room: "a".to_string()
                }
            )
        );
    }

    #[test]
    fn test_text_before_first_record_ignored() {
        let records = read_all("Just a comment\nROOM: a : A : First.\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, 2);
    }

    #[test]
    fn test_keyword_must_start_line() {
        // Indented keywords are continuations, not new records.
        let records = read_all("ROOM: a : A : First.\n  ROOM: b : B : Second.\n");
        assert_eq!(records.len(), 1);
        assert!(matches!(
            &records[0].1,
            Record::Room { description, .. } if description == "First. ROOM: b : B : Second."
        ));
    }
}
