//! # Inventory — materials, loans and their stock bookkeeping
//!
//! [`Inventory`] owns the two collections and is the only place they change.
//! It is built over a [`Persistence`] backend, loads from it once in
//! [`open`](Inventory::open), and writes the whole snapshot back after every
//! successful mutation.
//!
//! ## Mutations
//!
//! | Method | Effect on stock |
//! |--------|-----------------|
//! | [`add_material`](Inventory::add_material) | New material with available = total. |
//! | [`edit_material`](Inventory::edit_material) | Applies `new_total - old_total` to available, keeping the on-loan amount fixed. |
//! | [`create_loan`](Inventory::create_loan) | Subtracts the loan quantity from available. |
//! | [`return_loan`](Inventory::return_loan) | Deletes the loan and adds its quantity back. |
//!
//! Validation rejections return an [`InventoryError`] and change nothing.
//! Edits and returns for unknown ids are benign no-ops reported as `Ok(None)`.
//!
//! ## Stock invariant
//!
//! For every material, `available_quantity == total_quantity - on_loan(id)`.
//! A reducing edit keeps this equation but may push available below zero.

use chrono::NaiveDate;

use crate::error::InventoryError;
use crate::models::{new_id, CurrentLoan, Loan, Material};
use crate::snapshot::{Persistence, Snapshot};

/// Input for [`Inventory::create_loan`], with the optional fields of a loan form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanRequest {
    pub material_id: Option<String>,
    pub borrower_name: String,
    pub quantity: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl LoanRequest {
    pub fn new(
        material_id: impl Into<String>,
        borrower_name: impl Into<String>,
        quantity: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            material_id: Some(material_id.into()),
            borrower_name: borrower_name.into(),
            quantity,
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }
}

/// The inventory store, backed by a [`Persistence`] implementation.
pub struct Inventory<P: Persistence> {
    persistence: P,
    materials: Vec<Material>,
    loans: Vec<Loan>,
}

impl<P: Persistence> Inventory<P> {
    /// Load both collections from `persistence`.
    pub fn open(persistence: P) -> Result<Self, InventoryError> {
        let snapshot = persistence.load()?;
        Ok(Self::from_snapshot(persistence, snapshot))
    }

    /// Build over already-loaded collections without reading the backend.
    pub fn from_snapshot(persistence: P, snapshot: Snapshot) -> Self {
        Self {
            persistence,
            materials: snapshot.materials,
            loans: snapshot.loans,
        }
    }

    /// Copy of the current collections, as they would be saved.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            materials: self.materials.clone(),
            loans: self.loans.clone(),
            ..Snapshot::default()
        }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn loan(&self, id: &str) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    /// Add a material whose whole stock is available.
    pub fn add_material(&mut self, name: &str, total_quantity: i64) -> Result<Material, InventoryError> {
        validate_material(name, total_quantity)?;

        let material = Material {
            id: new_id(),
            name: name.to_string(),
            total_quantity,
            available_quantity: total_quantity,
        };
        self.materials.push(material.clone());
        tracing::debug!(
            "Added material {} ({:?}, {} units)",
            material.id,
            material.name,
            total_quantity
        );

        self.save()?;
        Ok(material)
    }

    /// Rename a material and change its total, shifting available stock by the
    /// same delta. Returns `Ok(None)` if `id` is unknown.
    pub fn edit_material(
        &mut self,
        id: &str,
        new_name: &str,
        new_total_quantity: i64,
    ) -> Result<Option<Material>, InventoryError> {
        let Some(index) = self.materials.iter().position(|m| m.id == id) else {
            tracing::debug!("Edit of unknown material {} ignored", id);
            return Ok(None);
        };
        validate_material(new_name, new_total_quantity)?;

        let material = &mut self.materials[index];
        material.available_quantity += new_total_quantity - material.total_quantity;
        material.total_quantity = new_total_quantity;
        material.name = new_name.to_string();
        let material = material.clone();

        if material.available_quantity < 0 {
            tracing::warn!(
                "Material {} now has {} available after reducing total to {}",
                material.id,
                material.available_quantity,
                material.total_quantity
            );
        }
        tracing::debug!("Edited material {}", material.id);

        self.save()?;
        Ok(Some(material))
    }

    /// Open a loan and take its quantity out of available stock.
    pub fn create_loan(&mut self, request: LoanRequest) -> Result<Loan, InventoryError> {
        let LoanRequest {
            material_id,
            borrower_name,
            quantity,
            start_date,
            end_date,
        } = request;

        let material_id = material_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| rejected(InventoryError::MissingField { field: "material_id" }))?;
        let start_date =
            start_date.ok_or_else(|| rejected(InventoryError::MissingField { field: "start_date" }))?;
        let end_date =
            end_date.ok_or_else(|| rejected(InventoryError::MissingField { field: "end_date" }))?;
        if borrower_name.trim().is_empty() {
            return Err(rejected(InventoryError::MissingField {
                field: "borrower_name",
            }));
        }

        let Some(material) = self.materials.iter_mut().find(|m| m.id == material_id) else {
            return Err(rejected(InventoryError::MaterialNotFound { id: material_id }));
        };
        if quantity <= 0 || quantity > material.available_quantity {
            return Err(rejected(InventoryError::InvalidQuantity {
                requested: quantity,
                available: material.available_quantity,
            }));
        }
        material.available_quantity -= quantity;

        let loan = Loan {
            id: new_id(),
            material_id,
            borrower_name,
            quantity,
            start_date,
            end_date,
        };
        self.loans.push(loan.clone());
        tracing::debug!(
            "Loaned {} of material {} to {:?} as {}",
            quantity,
            loan.material_id,
            loan.borrower_name,
            loan.id
        );

        self.save()?;
        Ok(loan)
    }

    /// Close a loan, returning its quantity to stock. Returns `Ok(None)` if the
    /// loan is unknown, so returning twice is harmless.
    pub fn return_loan(&mut self, loan_id: &str) -> Result<Option<Loan>, InventoryError> {
        let Some(index) = self.loans.iter().position(|l| l.id == loan_id) else {
            tracing::debug!("Return of unknown loan {} ignored", loan_id);
            return Ok(None);
        };
        let loan = self.loans.remove(index);

        match self.materials.iter_mut().find(|m| m.id == loan.material_id) {
            Some(material) => material.available_quantity += loan.quantity,
            None => tracing::warn!(
                "Returned loan {} references missing material {}",
                loan.id,
                loan.material_id
            ),
        }
        tracing::debug!("Returned loan {} ({} units)", loan.id, loan.quantity);

        self.save()?;
        Ok(Some(loan))
    }

    /// True if the material exists and none of it is available.
    pub fn is_fully_borrowed(&self, material_id: &str) -> bool {
        self.material(material_id)
            .is_some_and(|m| m.available_quantity == 0)
    }

    /// Materials whose name contains `query`, ignoring case, in stored order.
    pub fn search(&self, query: &str) -> Vec<&Material> {
        let query = query.to_lowercase();
        self.materials
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Open loans with their material names. Loans whose material no longer
    /// exists are left out.
    pub fn current_loans(&self) -> Vec<CurrentLoan<'_>> {
        self.loans
            .iter()
            .filter_map(|loan| {
                self.material(&loan.material_id).map(|m| CurrentLoan {
                    loan,
                    material_name: &m.name,
                })
            })
            .collect()
    }

    pub fn loans_for_material<'a>(&'a self, material_id: &'a str) -> impl Iterator<Item = &'a Loan> + 'a {
        self.loans.iter().filter(move |l| l.material_id == material_id)
    }

    /// Total quantity currently out on loan for a material.
    pub fn on_loan(&self, material_id: &str) -> i64 {
        self.loans_for_material(material_id).map(|l| l.quantity).sum()
    }

    fn save(&self) -> Result<(), InventoryError> {
        self.persistence.save(&self.snapshot()).inspect_err(|e| {
            tracing::error!("Failed to save inventory: {}", e);
        })
    }
}

fn validate_material(name: &str, total_quantity: i64) -> Result<(), InventoryError> {
    if name.trim().is_empty() {
        return Err(rejected(InventoryError::EmptyName));
    }
    if total_quantity < 0 {
        return Err(rejected(InventoryError::NegativeQuantity {
            quantity: total_quantity,
        }));
    }
    Ok(())
}

fn rejected(err: InventoryError) -> InventoryError {
    tracing::warn!("Rejected: {}", err);
    err
}
