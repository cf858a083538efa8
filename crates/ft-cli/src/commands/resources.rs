//! Resources commands for the built-in and custom reference links.

use std::io::Write;

use anyhow::{Result, bail};

use ft_core::resource::group_by_category;
use ft_core::{CustomResource, DEFAULT_RESOURCES};
use ft_db::Store;

pub fn list<W: Write>(writer: &mut W, store: &Store) -> Result<()> {
    writeln!(writer, "Helpful resources:")?;
    for resource in DEFAULT_RESOURCES {
        writeln!(writer, "  {}", resource.title)?;
        writeln!(writer, "    {}", resource.url)?;
    }

    let custom = store.load_resources()?;
    if custom.is_empty() {
        return Ok(());
    }
    for (category, items) in group_by_category(&custom) {
        writeln!(writer)?;
        writeln!(writer, "{category}:")?;
        for resource in items {
            writeln!(writer, "  {} [{}]", resource.title, resource.id)?;
            writeln!(writer, "    {}", resource.url)?;
        }
    }
    Ok(())
}

/// Validates and stores a new custom resource.
pub fn add<W: Write>(
    writer: &mut W,
    store: &Store,
    title: &str,
    url: &str,
    category: &str,
) -> Result<CustomResource> {
    let resource = CustomResource::create(title, url, category)?;
    let mut resources = store.load_resources()?;
    resources.push(resource.clone());
    store.save_resources(&resources)?;
    writeln!(writer, "Added resource {} ({})", resource.title, resource.id)?;
    Ok(resource)
}

pub fn delete<W: Write>(writer: &mut W, store: &Store, id: &str) -> Result<()> {
    let mut resources = store.load_resources()?;
    let before = resources.len();
    resources.retain(|r| r.id != id);
    if resources.len() == before {
        bail!("no custom resource with id {id}");
    }
    store.save_resources(&resources)?;
    writeln!(writer, "Deleted resource {id}")?;
    Ok(())
}
