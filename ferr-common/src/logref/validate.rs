//! Structural checks for log-reference tables.

use std::collections::HashMap;

use super::LogRef;
use super::error::CatalogError;

/// Check one table: a single end marker in last position, distinct codes and
/// non-empty text. Returns the number of entries before the end marker.
pub fn validate_table(refs: &[LogRef]) -> Result<usize, CatalogError> {
    let index = refs
        .iter()
        .position(LogRef::is_end)
        .ok_or(CatalogError::MissingSentinel)?;

    let trailing = refs.len() - index - 1;
    if trailing > 0 {
        return Err(CatalogError::TrailingEntries { index, trailing });
    }

    let mut seen: HashMap<u32, usize> = HashMap::new();
    for (position, entry) in refs[..index].iter().enumerate() {
        check_fields(entry)?;
        if let Some(first) = seen.insert(entry.code, position) {
            return Err(CatalogError::DuplicateCode {
                code: entry.code,
                first,
                second: position,
            });
        }
    }

    Ok(index)
}

/// Check several tables that share one code namespace.
///
/// Collects every problem instead of stopping at the first. Returns the total
/// number of entries on success.
pub fn validate_catalog(tables: &[&[LogRef]]) -> Result<usize, Vec<CatalogError>> {
    let mut errors = Vec::new();
    let mut owner: HashMap<u32, usize> = HashMap::new();
    let mut total = 0;

    for (table_index, table) in tables.iter().enumerate() {
        match validate_table(table) {
            Ok(count) => total += count,
            Err(err) => errors.push(err),
        }

        for entry in table.iter().take_while(|r| !r.is_end()) {
            match owner.get(&entry.code) {
                Some(&first_table) if first_table != table_index => {
                    errors.push(CatalogError::CrossTableDuplicate {
                        code: entry.code,
                        first_table,
                        second_table: table_index,
                    });
                }
                Some(_) => {}
                None => {
                    owner.insert(entry.code, table_index);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(total)
    } else {
        Err(errors)
    }
}

fn check_fields(entry: &LogRef) -> Result<(), CatalogError> {
    let field = if entry.title.is_empty() {
        "title"
    } else if entry.description.is_empty() {
        "description"
    } else if entry.suggestion.is_empty() {
        "suggestion"
    } else {
        return Ok(());
    };
    Err(CatalogError::EmptyField {
        code: entry.code,
        field,
    })
}
