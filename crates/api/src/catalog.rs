//! Startup catalog loading.

use configurator_core::catalog::sample::sample_catalog;
use configurator_core::catalog::verify::verify_catalog;
use configurator_core::error::CoreError;
use configurator_core::Catalog;

use crate::config::ServerConfig;

/// Load the configured catalog, falling back to the built-in sample, and
/// log any consistency issues. Issues are warnings only: the catalog is
/// still served.
pub fn load_catalog(config: &ServerConfig) -> Result<Catalog, CoreError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            tracing::info!(path = %path.display(), "Loaded catalog file");
            catalog
        }
        None => {
            tracing::info!("CATALOG_PATH not set, serving the sample catalog");
            sample_catalog()
        }
    };

    let report = verify_catalog(&catalog);
    tracing::info!(
        categories = report.categories,
        products = report.products,
        issues = report.issues.len(),
        "Catalog verified"
    );
    for issue in &report.issues {
        tracing::warn!(subject = %issue.subject, "{}", issue.message);
    }
    for product in &catalog.products {
        for dependency in &product.dependencies {
            tracing::debug!(product = %product.id, "Requires {dependency}");
        }
    }

    Ok(catalog)
}
