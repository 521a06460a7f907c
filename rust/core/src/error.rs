// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for panel model operations.

use std::fmt;

/// Result type alias for panel model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which catalog table an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    VerticalPitch,
    HorizontalPitch,
    HoleLayout,
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogField::VerticalPitch => "vertical pitch",
            CatalogField::HorizontalPitch => "horizontal pitch",
            CatalogField::HoleLayout => "hole layout",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while reading or validating a panel model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A catalog index in the model does not resolve to a preset.
    #[error("{field} index {index} is out of range (catalog has {len} entries)")]
    IndexOutOfRange {
        field: CatalogField,
        index: usize,
        len: usize,
    },

    /// A feature references a frame of reference outside the known set.
    #[error("unknown frame of reference: {0:?}")]
    UnknownFrameName(String),

    /// A feature has a type outside the known set.
    #[error("unknown feature type: {0:?}")]
    UnknownFeatureType(String),

    /// An import document is missing required structure or is not valid JSON.
    #[error("malformed import document: {0}")]
    MalformedImportDocument(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedImportDocument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_names_field() {
        let err = Error::IndexOutOfRange {
            field: CatalogField::HorizontalPitch,
            index: 99,
            len: 17,
        };
        let message = err.to_string();
        assert!(message.contains("horizontal pitch"));
        assert!(message.contains("99"));
        assert!(message.contains("17"));
    }
}
