pub mod document;
pub mod error;
pub mod file;
pub mod paths;

use crate::error::{Result, StoreError};
use rolodex_core::AddressBook;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistence boundary for an address book.
pub trait Storage {
    fn load(&self) -> Result<AddressBook>;
    fn save(&self, book: &AddressBook) -> Result<()>;
}

/// JSON document on disk, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStore {
    fn load(&self) -> Result<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "address book missing, starting empty");
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };
        let book = document::decode(&bytes)?;
        debug!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        file::atomic_write(&self.path, |out| document::encode(book, out))?;
        debug!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }
}

/// Keeps the last saved book in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: RefCell<Option<AddressBook>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: RefCell::new(Some(book)),
        }
    }

    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.borrow().clone()
    }
}

impl Storage for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        *self.saved.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
