//! Material requirement calculation.
//!
//! Converts a production shortfall into the quantity of raw material needed
//! to cover it, inflated by the material's defect rate. Pure and reentrant:
//! no external state, safe to call concurrently.

use crate::errors::ServiceError;

/// Multiplicative factor per product type. The set is fixed and finite;
/// unknown identifiers are invalid input, not zero.
fn product_type_coefficient(product_type_id: i32) -> Option<f64> {
    match product_type_id {
        1 => Some(1.2),
        2 => Some(1.0),
        3 => Some(1.5),
        4 => Some(0.8),
        _ => None,
    }
}

/// Fractional defect/waste rate per material type, in `[0, 1)`.
fn material_defect_rate(material_type_id: i32) -> Option<f64> {
    match material_type_id {
        1 => Some(0.05),
        2 => Some(0.10),
        3 => Some(0.03),
        4 => Some(0.08),
        5 => Some(0.02),
        _ => None,
    }
}

/// Inputs for a single requirement calculation. Transient, constructed per
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRequest {
    pub product_type_id: i32,
    pub material_type_id: i32,
    /// Target quantity of finished product, must be positive.
    pub required_quantity: i32,
    /// Finished product already on hand, must not be negative.
    pub warehouse_quantity: i32,
    /// First product parameter, must be positive.
    pub parameter1: f64,
    /// Second product parameter, must be positive.
    pub parameter2: f64,
}

/// Computes the material units needed to produce the shortfall between
/// `required_quantity` and `warehouse_quantity`.
///
/// Returns `Ok(0)` when stock already covers demand; that is a valid
/// answer, not an error. The result is rounded toward positive infinity:
/// a fractional material requirement must never leave production short.
pub fn required_material(request: &MaterialRequest) -> Result<i64, ServiceError> {
    if request.product_type_id <= 0 {
        return Err(ServiceError::InvalidInput(
            "product_type_id must be positive".into(),
        ));
    }
    if request.material_type_id <= 0 {
        return Err(ServiceError::InvalidInput(
            "material_type_id must be positive".into(),
        ));
    }
    if request.required_quantity <= 0 {
        return Err(ServiceError::InvalidInput(
            "required_quantity must be positive".into(),
        ));
    }
    if request.warehouse_quantity < 0 {
        return Err(ServiceError::InvalidInput(
            "warehouse_quantity must not be negative".into(),
        ));
    }
    // `!(x > 0.0)` also rejects NaN.
    if !(request.parameter1 > 0.0) {
        return Err(ServiceError::InvalidInput(
            "parameter1 must be positive".into(),
        ));
    }
    if !(request.parameter2 > 0.0) {
        return Err(ServiceError::InvalidInput(
            "parameter2 must be positive".into(),
        ));
    }

    let coefficient = product_type_coefficient(request.product_type_id).ok_or_else(|| {
        ServiceError::InvalidInput(format!(
            "unknown product type {}",
            request.product_type_id
        ))
    })?;
    let defect_rate = material_defect_rate(request.material_type_id).ok_or_else(|| {
        ServiceError::InvalidInput(format!(
            "unknown material type {}",
            request.material_type_id
        ))
    })?;

    let production_quantity = request.required_quantity - request.warehouse_quantity;
    if production_quantity <= 0 {
        return Ok(0);
    }

    let material_per_unit = request.parameter1 * request.parameter2 * coefficient;
    let total_material =
        material_per_unit * f64::from(production_quantity) * (1.0 + defect_rate);

    Ok(total_material.ceil() as i64)
}
