use crate::{
    cli::CatalogCommandArgs,
    prelude::*,
    tables::{build_batteries_table, build_inverters_table, build_panels_table},
};

#[instrument(skip_all)]
pub fn list_catalog(args: &CatalogCommandArgs) -> Result {
    let catalog = args.catalog.load()?;
    info!(n_components = catalog.len(), "loaded the catalog");
    println!("{}", build_panels_table(catalog.panels()));
    println!("{}", build_inverters_table(catalog.inverters()));
    println!("{}", build_batteries_table(catalog.batteries()));
    Ok(())
}
