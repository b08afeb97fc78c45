use crate::cli::parser::ExportArgs;
use crate::config::Config;
use crate::core::export::{export_csv, to_csv};
use crate::core::records::{CatalogRecord, Location, Order, Phone, Product, RecordKind, Transaction};
use crate::core::store::CatalogStore;
use crate::utils::{PantryError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn execute(config: Config, args: ExportArgs) -> Result<()> {
    let config = crate::cli::with_data_dir(config, args.data_dir.as_deref());
    let store = CatalogStore::from_config(&config);
    let export_dir = PathBuf::from(config.export_dir());

    let output = args.output.as_deref();
    let (path, count) = match args.kind {
        RecordKind::Products => export_kind::<Product>(&store, &export_dir, output)?,
        RecordKind::Phones => export_kind::<Phone>(&store, &export_dir, output)?,
        RecordKind::Locations => export_kind::<Location>(&store, &export_dir, output)?,
        RecordKind::Orders => export_kind::<Order>(&store, &export_dir, output)?,
        RecordKind::Transactions => export_kind::<Transaction>(&store, &export_dir, output)?,
    };

    println!("✅ Exported {} {} to {}", count, args.kind.collection(), path.display());
    Ok(())
}

fn export_kind<T: CatalogRecord>(
    store: &CatalogStore,
    export_dir: &Path,
    output: Option<&Path>,
) -> Result<(PathBuf, usize)> {
    let records = store.load::<T>()?;

    let path = match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, to_csv(&records)?).map_err(|e| {
                PantryError::export_error(format!("Failed to write {}: {}", path.display(), e))
            })?;
            path.to_path_buf()
        }
        None => export_csv(&records, export_dir, T::TITLE)?,
    };

    Ok((path, records.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;
    use tempfile::TempDir;

    #[test]
    fn test_export_kind_to_explicit_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = CatalogStore::new(temp_dir.path().join("data"));
        store.seed_demo(false).unwrap();

        let output = temp_dir.path().join("out").join("phones.csv");
        let (path, count) =
            export_kind::<Phone>(&store, temp_dir.path(), Some(output.as_path())).unwrap();

        assert_eq!(path, output);
        assert_eq!(count, 4);
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("id,name,description,brand,price,created_at"));
    }

    #[test]
    fn test_execute_uses_export_dir_by_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = default_config();
        config.store.export_dir = temp_dir.path().join("exports").to_string_lossy().to_string();

        let args = ExportArgs {
            kind: RecordKind::Locations,
            output: None,
            data_dir: Some(temp_dir.path().join("data")),
        };
        execute(config, args).unwrap();

        let path = temp_dir.path().join("exports").join("Locations Table.csv");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }
}
