//! Plain-text listings

use plugin_lifecycle::{AdminServiceRecord, Scope, UiPlugin};

/// Entities that can be printed as a listing row
pub trait Listing {
    const HEADER: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

impl Listing for AdminServiceRecord {
    const HEADER: &'static [&'static str] = &["NAME", "NAMESPACE", "ENABLED", "HREF"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.namespace.clone(),
            self.enabled.to_string(),
            self.href.clone(),
        ]
    }
}

impl Listing for UiPlugin {
    const HEADER: &'static [&'static str] =
        &["ID", "NAME", "VERSION", "VENDOR", "ENABLED", "SCOPE"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.plugin_name.clone(),
            self.version.clone(),
            self.vendor.clone(),
            self.enabled.to_string(),
            Scope::new(self.provider_scoped, self.tenant_scoped).to_string(),
        ]
    }
}

/// Left-aligned columns separated by two spaces
pub fn render<E: Listing>(entities: &[E]) -> String {
    let rows: Vec<Vec<String>> = entities.iter().map(Listing::row).collect();
    let mut widths: Vec<usize> = E::HEADER.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = E::HEADER.iter().map(|h| h.to_string()).collect();
    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
