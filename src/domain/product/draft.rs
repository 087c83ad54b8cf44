use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::ApiEndpoints;
use crate::domain::checkout::FrontPageField;
use crate::media::is_local_preview;

use super::errors::ProductError;
use super::value_objects::Product;

// ============================================================================
// Product Draft - Admin product create/edit form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Features,
    Benefits,
}

impl ListField {
    fn label(&self) -> &'static str {
        match self {
            ListField::Features => "feature",
            ListField::Benefits => "benefit",
        }
    }
}

/// Where a finished draft is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(String),
}

impl SaveTarget {
    pub fn method(&self) -> &'static str {
        match self {
            SaveTarget::Create => "POST",
            SaveTarget::Update(_) => "PUT",
        }
    }

    pub fn url(&self, endpoints: &ApiEndpoints) -> String {
        match self {
            SaveTarget::Create => endpoints.products(),
            SaveTarget::Update(id) => endpoints.product_by_id(id),
        }
    }
}

/// Result of pushing one selected file to the upload endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upload {
    Stored(String),
    Failed,
}

/// Files picked in the form, uploaded only when the admin saves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingUploads {
    pub image: Option<Upload>,
    pub gallery: Vec<Upload>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    product_id: Option<String>,
    pub fields: Product,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDraft {
    pub fn new() -> Self {
        Self {
            product_id: None,
            fields: Product::default(),
        }
    }

    /// Start editing an existing product
    pub fn edit(product: Product) -> Self {
        let product_id = (!product.id.is_empty()).then(|| product.id.clone());
        Self {
            product_id,
            fields: product,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.product_id.is_some()
    }

    pub fn save_target(&self) -> SaveTarget {
        match &self.product_id {
            Some(id) => SaveTarget::Update(id.clone()),
            None => SaveTarget::Create,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Features => &mut self.fields.features,
            ListField::Benefits => &mut self.fields.benefits,
        }
    }

    pub fn add_item(&mut self, field: ListField) {
        self.list_mut(field).push(String::new());
    }

    pub fn set_item(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ProductError> {
        let slot = self
            .list_mut(field)
            .get_mut(index)
            .ok_or(ProductError::NoSuchItem {
                field: field.label(),
                index,
            })?;
        *slot = value.into();
        Ok(())
    }

    pub fn remove_item(&mut self, field: ListField, index: usize) -> Result<String, ProductError> {
        let list = self.list_mut(field);
        if index >= list.len() {
            return Err(ProductError::NoSuchItem {
                field: field.label(),
                index,
            });
        }
        Ok(list.remove(index))
    }

    /// Add a gallery image by URL; blank input is ignored
    pub fn add_gallery_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.fields.gallery.push(url.to_string());
        }
    }

    pub fn remove_gallery_image(&mut self, index: usize) -> Result<String, ProductError> {
        if index >= self.fields.gallery.len() {
            return Err(ProductError::NoSuchItem {
                field: "gallery image",
                index,
            });
        }
        Ok(self.fields.gallery.remove(index))
    }

    pub fn set_front_page_option(&mut self, field: FrontPageField, enabled: bool) {
        let options = &mut self.fields.front_page_options;
        match field {
            FrontPageField::FullNames => options.show_full_names = enabled,
            FrontPageField::Initials => options.show_initials = enabled,
            FrontPageField::CoverImage => options.show_image = enabled,
            FrontPageField::Date => options.show_date = enabled,
            FrontPageField::CustomText => options.show_custom_text = enabled,
        }
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.fields.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }

        match self.fields.price {
            None => return Err(ProductError::MissingPrice),
            Some(price) if price < Decimal::ZERO => return Err(ProductError::NegativePrice(price)),
            Some(_) => {}
        }

        match self.fields.box_price {
            None => Err(ProductError::MissingBoxPrice),
            Some(price) if price < Decimal::ZERO => Err(ProductError::NegativeBoxPrice(price)),
            Some(_) => Ok(()),
        }
    }

    /// Produce the body to save, folding in the results of the deferred uploads.
    ///
    /// A failed main image upload aborts the save. Failed gallery uploads are
    /// dropped; when any gallery files were picked, local previews are replaced
    /// by whatever was stored.
    pub fn finalize(self, uploads: PendingUploads) -> Result<Product, ProductError> {
        self.validate()?;

        let mut product = self.fields;

        match uploads.image {
            Some(Upload::Stored(path)) => product.image = path,
            Some(Upload::Failed) => {
                warn!(product = %product.name, "Main image upload failed, product not saved");
                return Err(ProductError::ImageUploadFailed);
            }
            None => {}
        }

        if !uploads.gallery.is_empty() {
            let attempted = uploads.gallery.len();
            let stored: Vec<String> = uploads
                .gallery
                .into_iter()
                .filter_map(|upload| match upload {
                    Upload::Stored(path) => Some(path),
                    Upload::Failed => None,
                })
                .collect();

            if stored.len() < attempted {
                warn!(
                    attempted,
                    stored = stored.len(),
                    "Some gallery uploads failed and were skipped"
                );
            }

            product.gallery.retain(|image| !is_local_preview(image));
            product.gallery.extend(stored);
        }

        product.features.retain(|item| !item.trim().is_empty());
        product.benefits.retain(|item| !item.trim().is_empty());

        debug!(
            product = %product.name,
            gallery = product.gallery.len(),
            features = product.features.len(),
            "Product draft finalized"
        );

        Ok(product)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
