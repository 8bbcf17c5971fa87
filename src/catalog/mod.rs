pub mod data;

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{Result, SmoothieError};
use crate::models::{AddOn, FruitPack, Ingredient};

/// The immutable ingredient reference dataset.
///
/// Built once at startup; lookups are read-only and side-effect free.
pub struct Catalog {
    bases: Vec<Ingredient>,
    fruits: Vec<Ingredient>,
    packs: Vec<FruitPack>,
    proteins: Vec<Ingredient>,
    add_ons: Vec<AddOn>,
}

/// Process-wide standard catalog.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

impl Catalog {
    /// The full standard dataset.
    pub fn standard() -> Self {
        Self {
            bases: data::bases(),
            fruits: data::fruits(),
            packs: data::fruit_packs(),
            proteins: data::proteins(),
            add_ons: data::add_ons(),
        }
    }

    pub fn base(&self, id: &str) -> Option<&Ingredient> {
        self.bases.iter().find(|b| b.id == id)
    }

    pub fn fruit(&self, id: &str) -> Option<&Ingredient> {
        self.fruits.iter().find(|f| f.id == id)
    }

    pub fn pack(&self, id: &str) -> Option<&FruitPack> {
        self.packs.iter().find(|p| p.id == id)
    }

    pub fn protein(&self, id: &str) -> Option<&Ingredient> {
        self.proteins.iter().find(|p| p.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    pub fn bases(&self) -> &[Ingredient] {
        &self.bases
    }

    pub fn fruits(&self) -> &[Ingredient] {
        &self.fruits
    }

    pub fn packs(&self) -> &[FruitPack] {
        &self.packs
    }

    pub fn proteins(&self) -> &[Ingredient] {
        &self.proteins
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Static integrity checks, run once at startup.
    ///
    /// Duplicate ids, negative nutrition values, or a pack item referencing
    /// an unknown fruit are data bugs, not runtime error paths; failing here
    /// is fatal.
    pub fn validate(&self) -> Result<()> {
        check_unique("base", self.bases.iter().map(|b| b.id))?;
        check_unique("fruit", self.fruits.iter().map(|f| f.id))?;
        check_unique("pack", self.packs.iter().map(|p| p.id))?;
        check_unique("protein", self.proteins.iter().map(|p| p.id))?;
        check_unique("add-on", self.add_ons.iter().map(|a| a.id))?;

        for ing in self.bases.iter().chain(&self.fruits).chain(&self.proteins) {
            if !ing.is_valid() {
                return Err(SmoothieError::CatalogIntegrity(format!(
                    "negative nutrition value on '{}'",
                    ing.id
                )));
            }
        }

        for add_on in &self.add_ons {
            if !add_on.is_valid() {
                return Err(SmoothieError::CatalogIntegrity(format!(
                    "negative nutrition value on add-on '{}'",
                    add_on.id
                )));
            }
        }

        for pack in &self.packs {
            for item in &pack.items {
                if item.weight_g < 0.0 {
                    return Err(SmoothieError::CatalogIntegrity(format!(
                        "negative weight in pack '{}'",
                        pack.id
                    )));
                }
                if self.fruit(item.fruit_id).is_none() {
                    return Err(SmoothieError::CatalogIntegrity(format!(
                        "pack '{}' references unknown fruit '{}'",
                        pack.id, item.fruit_id
                    )));
                }
            }
            for extra in &pack.extras {
                if !extra.is_valid() {
                    return Err(SmoothieError::CatalogIntegrity(format!(
                        "negative nutrition value on extra '{}' in pack '{}'",
                        extra.name, pack.id
                    )));
                }
            }
            if !matches!(pack.protein_multiplier, 1 | 2) {
                return Err(SmoothieError::CatalogIntegrity(format!(
                    "pack '{}' has invalid protein multiplier {}",
                    pack.id, pack.protein_multiplier
                )));
            }
        }

        Ok(())
    }
}

fn check_unique<'a>(category: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SmoothieError::CatalogIntegrity(format!(
                "duplicate {} id '{}'",
                category, id
            )));
        }
    }
    Ok(())
}
