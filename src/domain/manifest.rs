//! Bundle manifest types
//!
//! A bundle manifest is a tab-separated document: a header of `key:\tvalue`
//! pairs followed by one record per file, `flags\thash\tversion\tpath`.

/// Header key carrying the bundle's declared content size in bytes
pub const CONTENT_SIZE_MARKER: &str = "contentsize:";

/// Directory where binaries are installed
pub const BINARY_PREFIX: &str = "/usr/bin/";

/// Flag character marking a directory record
pub const DIRECTORY_FLAG: char = 'd';

/// Flag character marking a deleted (ghosted) record
pub const DELETED_FLAG: char = 'D';

/// A file record of a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub flags: String,
    #[allow(dead_code)]
    pub version: String,
    pub path: String,
}

impl FileRecord {
    pub fn is_directory(&self) -> bool {
        self.flags.contains(DIRECTORY_FLAG)
    }

    pub fn is_deleted(&self) -> bool {
        self.flags.contains(DELETED_FLAG)
    }

    /// Basename of the record if it is a binary candidate
    ///
    /// Directories and deleted records never qualify, whatever their path.
    pub fn binary_name(&self) -> Option<&str> {
        if self.is_directory() || self.is_deleted() {
            return None;
        }
        if !self.path.starts_with(BINARY_PREFIX) {
            return None;
        }
        self.path.rsplit('/').next()
    }
}

/// One meaningful line of a manifest, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry {
    ContentSize(u64),
    File(FileRecord),
}

/// A parsed bundle manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parse manifest text. Lines with too few fields are dropped silently.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();

        for line in content.split('\n') {
            let fields: Vec<&str> = line.split('\t').collect();

            if fields[0] == CONTENT_SIZE_MARKER {
                match fields.get(1).map(|v| v.trim().parse::<u64>()) {
                    Some(Ok(size)) => entries.push(ManifestEntry::ContentSize(size)),
                    Some(Err(e)) => {
                        tracing::warn!(line, error = %e, "ignoring unparseable content size");
                    }
                    None => tracing::warn!(line, "ignoring content size without a value"),
                }
            }

            if fields.len() > 3 {
                entries.push(ManifestEntry::File(FileRecord {
                    flags: fields[0].to_string(),
                    version: fields[2].to_string(),
                    path: fields[3].to_string(),
                }));
            }
        }

        Self { entries }
    }

    /// The last declared content size, or 0 when the manifest has none
    #[allow(dead_code)]
    pub fn content_size(&self) -> u64 {
        self.entries
            .iter()
            .rev()
            .find_map(|entry| match entry {
                ManifestEntry::ContentSize(size) => Some(*size),
                ManifestEntry::File(_) => None,
            })
            .unwrap_or(0)
    }

    /// Binary candidates paired with the content size in effect at their record
    pub fn binaries(&self) -> Vec<(&str, u64)> {
        let mut size = 0;
        let mut binaries = Vec::new();

        for entry in &self.entries {
            match entry {
                ManifestEntry::ContentSize(declared) => size = *declared,
                ManifestEntry::File(record) => {
                    if let Some(name) = record.binary_name() {
                        binaries.push((name, size));
                    }
                }
            }
        }

        binaries
    }
}
