//! Binary ownership table

use std::collections::BTreeMap;

/// The bundle currently credited with a binary, and its adjusted score
///
/// Lower scores are better owners.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub bundle: String,
    pub score: f64,
}

/// Binary basename to owner, one entry per binary, in binary name order
#[derive(Debug, Clone, Default)]
pub struct OwnershipTable {
    owners: BTreeMap<String, Owner>,
}

impl OwnershipTable {
    pub fn get(&self, binary: &str) -> Option<&Owner> {
        self.owners.get(binary)
    }

    pub fn contains(&self, binary: &str) -> bool {
        self.owners.contains_key(binary)
    }

    /// Credit `binary` to `bundle`, replacing any previous owner
    pub fn assign(&mut self, binary: &str, bundle: &str, score: f64) {
        let owner = Owner {
            bundle: bundle.to_string(),
            score,
        };
        match self.owners.get_mut(binary) {
            Some(existing) => *existing = owner,
            None => {
                self.owners.insert(binary.to_string(), owner);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Owner)> {
        self.owners
            .iter()
            .map(|(binary, owner)| (binary.as_str(), owner))
    }
}
