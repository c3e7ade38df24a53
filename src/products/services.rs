// src/products/services.rs
//
// The add-product workflow: validate a submission, then either commit it to
// the repository or hand the errors and raw values back for re-display.

use std::sync::Arc;
use tracing::{debug, info};

use super::models::{Product, ProductForm};
use super::repository::{ProductRepository, RepositoryError};
use super::validators::validate_submission;
use crate::common::ValidationResult;

pub const PRODUCT_ADDED: &str = "تمت إضافة المنتج بنجاح.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Stored. The form is shown empty and `flash` is shown once.
    Created { product: Product, flash: String },
    /// Nothing stored. `echo` holds the values exactly as submitted.
    Rejected {
        errors: ValidationResult,
        echo: ProductForm,
    },
}

#[derive(Clone)]
pub struct FormProcessor {
    products: Arc<dyn ProductRepository>,
}

impl FormProcessor {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Validation failures come back as `Rejected`; the only error is a
    /// failing repository.
    pub async fn submit(&self, form: ProductForm) -> Result<SubmissionOutcome, RepositoryError> {
        match validate_submission(&form) {
            Ok(draft) => {
                let product = self.products.append(draft).await?;

                info!(
                    product_id = product.id,
                    category = %product.category,
                    price = product.price,
                    "Product added"
                );

                Ok(SubmissionOutcome::Created {
                    product,
                    flash: PRODUCT_ADDED.to_string(),
                })
            }
            Err(errors) => {
                let invalid_fields: Vec<String> = errors
                    .errors()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                debug!(invalid_fields = ?invalid_fields, "Product submission rejected");

                Ok(SubmissionOutcome::Rejected { errors, echo: form })
            }
        }
    }
}
