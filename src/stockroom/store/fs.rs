use super::{ProductStore, HEADER};
use crate::error::{Result, StockError};
use crate::model::Product;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StockError::Io)?;
        }
        Ok(())
    }

    fn malformed(&self, source: csv::Error) -> StockError {
        StockError::MalformedData {
            path: self.path.clone(),
            source,
        }
    }

    fn write_records(path: &Path, products: &[Product]) -> Result<()> {
        // Headers are written by hand so an empty inventory still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(HEADER)?;
        for product in products {
            writer.serialize(product)?;
        }
        writer.flush().map_err(StockError::Io)?;
        Ok(())
    }
}

fn validate(product: &Product, line: u64, seen: &mut HashSet<u32>) -> Result<()> {
    if product.id == 0 {
        return Err(StockError::InvalidRecord {
            line,
            reason: "product id must be positive".to_string(),
        });
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(StockError::InvalidRecord {
            line,
            reason: format!("price {} is not a non-negative amount", product.price),
        });
    }
    if !seen.insert(product.id) {
        return Err(StockError::DuplicateId(product.id));
    }
    Ok(())
}

impl ProductStore for CsvStore {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers().map_err(|e| self.malformed(e))?.clone();

        let mut products = Vec::new();
        let mut seen = HashSet::new();
        for record in reader.records() {
            let record = record.map_err(|e| self.malformed(e))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let product: Product = record
                .deserialize(Some(&headers))
                .map_err(|e| self.malformed(e))?;
            validate(&product, line, &mut seen)?;
            products.push(product);
        }

        debug!(
            "Loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "products".to_string());
        let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        let written = Self::write_records(&tmp_file, products)
            .and_then(|_| fs::rename(&tmp_file, &self.path).map_err(StockError::Io));
        if written.is_err() {
            let _ = fs::remove_file(&tmp_file);
        }
        written?;

        info!(
            "Saved {} products to {}",
            products.len(),
            self.path.display()
        );
        Ok(())
    }
}
