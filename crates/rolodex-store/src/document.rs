use crate::error::{Result, StoreError};
use rolodex_core::{AddressBook, Record};
use serde::{Deserialize, Serialize};

pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct BookDocument {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

#[derive(Debug, Serialize)]
struct BookDocumentRef<'a> {
    version: u32,
    contacts: &'a [Record],
}

/// Later entries win when a name repeats.
pub fn decode(bytes: &[u8]) -> Result<AddressBook> {
    let document: BookDocument = serde_json::from_slice(bytes)?;
    if document.version != DOCUMENT_VERSION {
        return Err(StoreError::UnsupportedVersion(document.version));
    }
    Ok(document.contacts.into_iter().collect())
}

pub fn encode<W: std::io::Write>(book: &AddressBook, out: W) -> Result<()> {
    let document = BookDocumentRef {
        version: DOCUMENT_VERSION,
        contacts: book.records(),
    };
    serde_json::to_writer_pretty(out, &document)?;
    Ok(())
}
