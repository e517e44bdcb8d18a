use crate::domain::model::{Catalog, ShoppingList};
use crate::domain::ports::{ListSink, RecipeSource};
use crate::utils::error::{Result, ShopError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Recipe source backed by a directory of `*.dish` files. The file stem is
/// the dish name; each non-empty line is one ingredient, order preserved.
#[derive(Debug, Clone)]
pub struct DishDir {
    dir: PathBuf,
}

impl DishDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RecipeSource for DishDir {
    fn load(&self) -> Result<Catalog> {
        let mut dishes = HashMap::new();
        let entries = fs::read_dir(&self.dir).map_err(|source| ShopError::CatalogLoad {
            path: self.dir.display().to_string(),
            source,
        })?;

        for entry in entries {
            let path = entry
                .map_err(|source| ShopError::CatalogLoad {
                    path: self.dir.display().to_string(),
                    source,
                })?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("dish") {
                continue;
            }
            let Some(dish_name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let contents = fs::read_to_string(&path).map_err(|source| ShopError::CatalogLoad {
                path: path.display().to_string(),
                source,
            })?;
            let ingredients: Vec<String> = contents
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            tracing::debug!(dish = %dish_name, ingredients = ingredients.len(), "loaded recipe");
            dishes.insert(dish_name.to_string(), ingredients);
        }

        Ok(Catalog::new(dishes))
    }
}

/// List sink that overwrites a plain-text file on every save.
#[derive(Debug, Clone)]
pub struct TextFileSink {
    path: PathBuf,
}

impl TextFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListSink for TextFileSink {
    fn write_list(&mut self, list: &ShoppingList) -> Result<String> {
        let mut file =
            fs::File::create(&self.path).map_err(|source| ShopError::Persistence { source })?;
        list.persist(&mut file)
            .map_err(|source| ShopError::Persistence { source })?;
        Ok(self.path.display().to_string())
    }
}
