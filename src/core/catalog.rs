use crate::domain::model::{Product, TroubleshootingTopic};
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::collections::HashSet;

/// Fixed, ordered product list. SKUs are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            validate_non_empty_string("catalog.products.sku", &product.sku)?;
            validate_non_empty_string("catalog.products.name", &product.name)?;
            if !seen.insert(product.sku.as_str()) {
                return Err(IntakeError::DuplicateSku {
                    sku: product.sku.clone(),
                });
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.find(sku).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}

pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("HT-CREEPER", "Creeper Trail Camera"),
        Product::new("HT-STALKER", "Stalker Cellular Camera"),
        Product::new("HT-PHANTOM", "Phantom Thermal Scope"),
    ]
}

pub fn default_troubleshooting() -> Vec<TroubleshootingTopic> {
    let topic = |title: &str, steps: &[&str]| TroubleshootingTopic {
        title: title.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        topic(
            "Device will not power on",
            &[
                "Charge the device for at least two hours with the supplied cable.",
                "Hold the power button for ten seconds to force a restart.",
                "Try a different wall adapter rated 5V / 2A.",
            ],
        ),
        topic(
            "No images are being saved",
            &[
                "Check that the memory card is inserted and formatted as FAT32.",
                "Use a card of 128 GB or less, class 10 or faster.",
                "Confirm the device is not in preview mode.",
            ],
        ),
        topic(
            "Cannot connect to the mobile app",
            &[
                "Enable Bluetooth and location permissions for the app.",
                "Stand within ten meters of the device while pairing.",
                "Remove the device from the app and pair it again.",
            ],
        ),
    ]
}
