//! Bulk import of contacts from JSON lines.
//!
//! Each input line holds one contact object such as
//! `{"first_name":"Andreas","last_name":"Priftis","phone_number":"0123456789"}`.
//! Missing or `null` fields deserialize as absent and are rejected by
//! validation. Lines that cannot be read as a contact are logged and skipped;
//! only a failing stream ends the import.

use crate::error::{ImportResult, RegistryError};
use crate::models::{Contact, ContactRef};
use crate::services::ContactRegistry;
use std::io::{BufRead, Write};
use tracing::{error, info, warn};

/// Counts of what happened to each non-empty input line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Contacts stored in the registry
    pub registered: usize,

    /// Contacts rejected because their key was taken
    pub duplicates: usize,

    /// Contacts rejected by field validation
    pub invalid: usize,

    /// Lines that were not UTF-8 or not a JSON contact
    pub malformed: usize,
}

impl ImportReport {
    /// Total non-empty lines processed.
    pub fn total(&self) -> usize {
        self.registered + self.duplicates + self.invalid + self.malformed
    }
}

/// Register every contact read from `reader`, one JSON object per line.
///
/// Blank lines are ignored. Lines that are not valid UTF-8 or not a JSON
/// contact count as malformed and are skipped, as are invalid and duplicate
/// contacts.
///
/// # Errors
///
/// Returns `ImportError::Io` only if reading from `reader` fails.
pub fn import_contacts<R: BufRead>(
    mut reader: R,
    registry: &ContactRegistry,
) -> ImportResult<ImportReport> {
    let mut report = ImportReport::default();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                error!(line = line_number, error = %e, "Skipping malformed contact");
                report.malformed += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let candidate: Contact = match serde_json::from_str(line) {
            Ok(contact) => contact,
            Err(e) => {
                error!(line = line_number, error = %e, "Skipping malformed contact");
                report.malformed += 1;
                continue;
            }
        };

        match registry.register(candidate) {
            Ok(key) => {
                info!(line = line_number, key = %key, "Contact registered");
                report.registered += 1;
            }
            Err(RegistryError::DuplicateContact { key }) => {
                warn!(line = line_number, key = %key, "Duplicate contact skipped");
                report.duplicates += 1;
            }
            Err(e) => {
                warn!(line = line_number, error = %e, "Invalid contact skipped");
                report.invalid += 1;
            }
        }
    }

    Ok(report)
}

/// Write every stored contact to `writer` as a pretty JSON array, sorted by key.
pub fn write_contacts<W: Write>(mut writer: W, registry: &ContactRegistry) -> ImportResult<()> {
    let mut snapshot: Vec<ContactRef> = registry.get_all_contacts();
    snapshot.sort_by_key(|contact| contact.key());

    let contacts: Vec<&Contact> = snapshot.iter().map(|c| c.as_ref()).collect();
    serde_json::to_writer_pretty(&mut writer, &contacts)?;
    writeln!(writer)?;
    Ok(())
}
