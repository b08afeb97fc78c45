use crate::cli::parser::SeedArgs;
use crate::config::Config;
use crate::core::store::CatalogStore;
use crate::utils::Result;

pub fn execute(config: Config, args: SeedArgs) -> Result<()> {
    let config = crate::cli::with_data_dir(config, args.data_dir.as_deref());
    let store = CatalogStore::from_config(&config);

    let written = store.seed_demo(args.force)?;
    if written == 0 {
        println!(
            "Catalog in {} already has data; use --force to overwrite",
            store.data_dir().display()
        );
    } else {
        println!(
            "✅ Seeded {} records into {}",
            written,
            store.data_dir().display()
        );
    }
    Ok(())
}
