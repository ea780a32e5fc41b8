//! core::naming
//!
//! Lookup function naming for table indexes.
//!
//! # Rules
//!
//! Every index gets a function named `<Table>By<Field><Field>...`, built from
//! Pascal-cased identifiers. Two indexes over the same columns produce the
//! same name, so names are assigned per table:
//!
//! - The primary key keeps the plain name (or the first index in input order
//!   when no primary key shares it)
//! - Other unique indexes get a `Unique` suffix
//! - Other non-unique indexes get an `Index` suffix
//! - A suffixed name that is still taken gets a counter starting at 2
//!
//! # Example
//!
//! ```
//! use dbtpl_fixcheck::core::fixture::{sample_indexes, SAMPLE_TABLE};
//! use dbtpl_fixcheck::core::naming::assign_unique_index_func_names;
//! use dbtpl_fixcheck::core::types::Identifier;
//!
//! let table = Identifier::new(SAMPLE_TABLE).unwrap();
//! let names = assign_unique_index_func_names(&table, &sample_indexes()).unwrap();
//!
//! assert_eq!(names[0].func_name, "XoTestById");
//! assert_eq!(names[1].func_name, "XoTestByIdUnique");
//! ```

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::schema::Index;
use super::types::{Identifier, TypeError};

/// Suffix for a unique index that lost its name to another index.
pub const UNIQUE_SUFFIX: &str = "Unique";

/// Suffix for a non-unique index that lost its name to another index.
pub const INDEX_SUFFIX: &str = "Index";

/// Errors from function name assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("index at position {position} has no name and no fields")]
    Unnamed { position: usize },

    #[error("index '{index}' has an invalid field: {source}")]
    InvalidField { index: String, source: TypeError },

    #[error("index '{index}' has no fields and an unusable name: {source}")]
    InvalidIndexName { index: String, source: TypeError },
}

/// The function name chosen for one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFuncName {
    /// Name of the index the function looks up by.
    pub index: String,
    /// Generated function name.
    pub func_name: String,
}

/// Convert a snake-case identifier to PascalCase.
///
/// Segments are split on `_`; each keeps its first letter uppercased and the
/// rest lowercased. There is no initialism handling, so `id` becomes `Id`.
///
/// ```
/// use dbtpl_fixcheck::core::naming::pascal_case;
/// use dbtpl_fixcheck::core::types::Identifier;
///
/// assert_eq!(pascal_case(&Identifier::new("xo_test").unwrap()), "XoTest");
/// assert_eq!(pascal_case(&Identifier::new("id").unwrap()), "Id");
/// ```
pub fn pascal_case(ident: &Identifier) -> String {
    ident
        .as_str()
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => std::iter::once(first.to_ascii_uppercase())
                    .chain(chars.map(|c| c.to_ascii_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Compute the unsuffixed function name for an index.
///
/// An index without fields is named after the index itself.
pub fn base_func_name(table: &Identifier, index: &Index) -> Result<String, NamingError> {
    let mut name = pascal_case(table);
    name.push_str("By");

    if index.fields.is_empty() {
        let ident =
            Identifier::new(index.name.as_str()).map_err(|source| NamingError::InvalidIndexName {
                index: index.name.clone(),
                source,
            })?;
        name.push_str(&pascal_case(&ident));
        return Ok(name);
    }

    for field in &index.fields {
        let ident =
            Identifier::new(field.name.as_str()).map_err(|source| NamingError::InvalidField {
                index: index.name.clone(),
                source,
            })?;
        name.push_str(&pascal_case(&ident));
    }

    Ok(name)
}

/// Assign a distinct function name to every index of a table.
///
/// Returns one entry per input index, in input order.
///
/// # Errors
///
/// Fails if an index has neither a name nor fields, or if a field name (or
/// the index name, for a fieldless index) is not a valid identifier.
pub fn assign_unique_index_func_names(
    table: &Identifier,
    indexes: &[Index],
) -> Result<Vec<IndexFuncName>, NamingError> {
    let bases = indexes
        .iter()
        .enumerate()
        .map(|(position, index)| {
            if index.name.is_empty() && index.fields.is_empty() {
                return Err(NamingError::Unnamed { position });
            }
            base_func_name(table, index)
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Which index keeps each plain name.
    let mut owners: HashMap<&str, usize> = HashMap::new();
    for (i, base) in bases.iter().enumerate() {
        owners
            .entry(base.as_str())
            .and_modify(|owner| {
                if indexes[i].is_primary && !indexes[*owner].is_primary {
                    *owner = i;
                }
            })
            .or_insert(i);
    }

    // All plain names are reserved before any suffix is handed out.
    let mut taken: HashSet<String> = bases.iter().cloned().collect();
    let mut names = Vec::with_capacity(indexes.len());

    for (i, (index, base)) in indexes.iter().zip(&bases).enumerate() {
        if owners.get(base.as_str()) == Some(&i) {
            names.push(IndexFuncName {
                index: index.name.clone(),
                func_name: base.clone(),
            });
            continue;
        }

        let suffix = if index.is_unique {
            UNIQUE_SUFFIX
        } else {
            INDEX_SUFFIX
        };
        let stem = format!("{}{}", base, suffix);
        let mut candidate = stem.clone();
        let mut counter = 2;
        while taken.contains(&candidate) {
            candidate = format!("{}{}", stem, counter);
            counter += 1;
        }
        taken.insert(candidate.clone());
        names.push(IndexFuncName {
            index: index.name.clone(),
            func_name: candidate,
        });
    }

    Ok(names)
}
