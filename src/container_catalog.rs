//! # Container Catalog
//!
//! The fixed list of storage container sizes the advisor chooses from, ordered
//! from smallest to largest.

use serde::{Deserialize, Serialize};

/// Where a container can be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Freezer,
    Fridge,
    Microwave,
    Oven,
}

/// One entry of the container catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerSize {
    /// Display label (e.g., "16 oz (1 pint)")
    pub label: &'static str,
    pub volume_oz: f64,
    pub volume_ml: f64,
    /// Servings such a container usually holds
    pub typical_servings: u32,
    pub suitable_for: &'static [StorageKind],
}

const ALL_PURPOSE: &[StorageKind] = &[
    StorageKind::Freezer,
    StorageKind::Fridge,
    StorageKind::Microwave,
];
const QUART: &[StorageKind] = &[
    StorageKind::Freezer,
    StorageKind::Fridge,
    StorageKind::Microwave,
    StorageKind::Oven,
];
const FREEZER_BAKEWARE: &[StorageKind] = &[StorageKind::Freezer, StorageKind::Fridge, StorageKind::Oven];
const FRIDGE_BAKEWARE: &[StorageKind] = &[StorageKind::Fridge, StorageKind::Oven];
const FRIDGE_ONLY: &[StorageKind] = &[StorageKind::Fridge];

/// Container sizes in ascending volume
pub static CONTAINER_CATALOG: [ContainerSize; 9] = [
    ContainerSize {
        label: "8 oz",
        volume_oz: 8.0,
        volume_ml: 237.0,
        typical_servings: 1,
        suitable_for: ALL_PURPOSE,
    },
    ContainerSize {
        label: "12 oz",
        volume_oz: 12.0,
        volume_ml: 355.0,
        typical_servings: 1,
        suitable_for: ALL_PURPOSE,
    },
    ContainerSize {
        label: "16 oz (1 pint)",
        volume_oz: 16.0,
        volume_ml: 473.0,
        typical_servings: 2,
        suitable_for: ALL_PURPOSE,
    },
    ContainerSize {
        label: "24 oz",
        volume_oz: 24.0,
        volume_ml: 710.0,
        typical_servings: 3,
        suitable_for: ALL_PURPOSE,
    },
    ContainerSize {
        label: "32 oz (1 quart)",
        volume_oz: 32.0,
        volume_ml: 946.0,
        typical_servings: 4,
        suitable_for: QUART,
    },
    ContainerSize {
        label: "48 oz",
        volume_oz: 48.0,
        volume_ml: 1420.0,
        typical_servings: 6,
        suitable_for: FREEZER_BAKEWARE,
    },
    ContainerSize {
        label: "64 oz (half gallon)",
        volume_oz: 64.0,
        volume_ml: 1893.0,
        typical_servings: 8,
        suitable_for: FREEZER_BAKEWARE,
    },
    ContainerSize {
        label: "96 oz",
        volume_oz: 96.0,
        volume_ml: 2839.0,
        typical_servings: 12,
        suitable_for: FRIDGE_BAKEWARE,
    },
    ContainerSize {
        label: "128 oz (1 gallon)",
        volume_oz: 128.0,
        volume_ml: 3785.0,
        typical_servings: 16,
        suitable_for: FRIDGE_ONLY,
    },
];

impl ContainerSize {
    pub fn supports(&self, kind: StorageKind) -> bool {
        self.suitable_for.contains(&kind)
    }
}

/// Catalog entries usable for `kind`, smallest first
pub fn containers_for(kind: StorageKind) -> impl Iterator<Item = &'static ContainerSize> + Clone {
    CONTAINER_CATALOG.iter().filter(move |size| size.supports(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ascending() {
        for pair in CONTAINER_CATALOG.windows(2) {
            assert!(pair[0].volume_oz < pair[1].volume_oz);
            assert!(pair[0].volume_ml < pair[1].volume_ml);
        }
        assert_eq!(CONTAINER_CATALOG[0].volume_oz, 8.0);
        assert_eq!(CONTAINER_CATALOG[CONTAINER_CATALOG.len() - 1].volume_oz, 128.0);
    }

    #[test]
    fn test_freezer_sizes_stop_at_half_gallon() {
        let largest = containers_for(StorageKind::Freezer).last().unwrap();
        assert_eq!(largest.volume_oz, 64.0);
        assert_eq!(containers_for(StorageKind::Fridge).count(), CONTAINER_CATALOG.len());
    }

    #[test]
    fn test_supports() {
        assert!(CONTAINER_CATALOG[4].supports(StorageKind::Oven));
        assert!(!CONTAINER_CATALOG[0].supports(StorageKind::Oven));
        assert!(!CONTAINER_CATALOG[8].supports(StorageKind::Freezer));
    }
}
