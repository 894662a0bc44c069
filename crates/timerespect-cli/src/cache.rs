//! Memoized table loading
//!
//! Building the enriched table is the expensive part of every report, and the
//! dashboard asks for it once per section. [`TableCache`] keeps one table per
//! source file and serves it again as long as the file looks unchanged.
//!
//! A file is identified by its canonical path, modification time, and length,
//! together with the parse options. Any change to these reloads the table.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
    time::SystemTime,
};

use anyhow::Context;
use timerespect_analysis::{EnrichedTable, LoadOptions};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SourceIdentity {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
    delimiter: u8,
}

impl SourceIdentity {
    fn probe(path: &Path, options: &LoadOptions) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve source file: {}", path.display()))?;
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?;
        Ok(Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
            delimiter: options.delimiter,
            path,
        })
    }
}

#[derive(Debug, Default)]
pub struct TableCache {
    tables: HashMap<PathBuf, (SourceIdentity, Rc<EnrichedTable>)>,
}

impl TableCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the enriched table for `path`, loading it if the file is new or
    /// has changed since the last load.
    pub fn load(
        &mut self,
        path: &Path,
        options: &LoadOptions,
    ) -> anyhow::Result<Rc<EnrichedTable>> {
        let identity = SourceIdentity::probe(path, options)?;
        let cached = self
            .tables
            .get(&identity.path)
            .filter(|(cached, _)| *cached == identity);
        if let Some((_, table)) = cached {
            log::debug!("Table cache hit: {}", identity.path.display());
            return Ok(Rc::clone(table));
        }

        log::debug!("Table cache miss: {}", identity.path.display());
        let table = timerespect_analysis::load_and_clean_with(&identity.path, options)
            .with_context(|| format!("Failed to load source table: {}", path.display()))?;
        let table = Rc::new(table);
        self.tables.insert(identity.path.clone(), (identity, Rc::clone(&table)));
        Ok(table)
    }
}
