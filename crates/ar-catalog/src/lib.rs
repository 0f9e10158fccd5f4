//! ar-catalog: canonical equipment catalog format, validation, and assembly.
//!
//! The engine in `ar-equipment` consumes fully-constructed equipment; this
//! crate is the data provider side: a serde schema (YAML or JSON), structural
//! validation, assembly into engine values, and a built-in example set.

pub mod assemble;
pub mod builtin;
pub mod schema;
pub mod validate;

pub use assemble::assemble;
pub use builtin::builtin_catalog;
pub use schema::*;
pub use validate::{ValidationError, validate_catalog};

/// Current catalog format version.
pub const LATEST_VERSION: u32 = 1;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Equipment error: {0}")]
    Equipment(#[from] ar_equipment::EquipmentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn save_yaml(path: &std::path::Path, catalog: &Catalog) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_yaml::to_string(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn save_json(path: &std::path::Path, catalog: &Catalog) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}
