//! Franchise and store records.

use pizza_stand_core::{Email, FranchiseId, StoreId, UserId};
use serde::{Deserialize, Serialize};

/// A franchise with its nested stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Franchise {
    pub id: FranchiseId,
    pub name: String,
    /// Directory users who administer this franchise. Omitted from the wire
    /// when empty, matching the listing shapes the UI specs assert on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admins: Vec<FranchiseAdmin>,
    #[serde(default)]
    pub stores: Vec<Store>,
}

/// Projection of a directory user attached to a franchise as admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// A store owned by a franchise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub franchise_id: FranchiseId,
    /// Only present on admin-dashboard listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
}

/// Body of `POST /api/franchise`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFranchise {
    pub name: String,
    /// Admins referenced by email; resolved against the user directory.
    #[serde(default)]
    pub admins: Vec<AdminRef>,
}

/// An admin referenced by email in a create-franchise request.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminRef {
    pub email: String,
}

/// Body of `POST /api/franchise/{id}/store`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStore {
    pub name: String,
}
