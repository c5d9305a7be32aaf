//! Synthetic product availability.

/// Estimates how many units of a product a partner can order.
///
/// This is a deterministic placeholder heuristic, not an inventory count:
/// the base quantity derives from the product id, and higher-rated partners
/// get a tier multiplier (rating >= 80 gives x1.2, rating >= 50 gives x1.1).
/// The multiplication happens in f64 and the result truncates toward zero,
/// no rounding. Pure; callable independently of persistence.
pub fn estimate_available_quantity(product_id: i32, partner_rating: i32) -> i64 {
    let base = i64::from(product_id) * 15 + 30;

    if partner_rating >= 80 {
        (base as f64 * 1.2) as i64
    } else if partner_rating >= 50 {
        (base as f64 * 1.1) as i64
    } else {
        base
    }
}
