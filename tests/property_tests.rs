use partner_orders::services::{
    estimate_available_quantity,
    material_calc::{required_material, MaterialRequest},
};
use proptest::prelude::*;

fn valid_request() -> impl Strategy<Value = MaterialRequest> {
    (
        1..=4i32,
        1..=5i32,
        1..=10_000i32,
        0..=10_000i32,
        0.01..100.0f64,
        0.01..100.0f64,
    )
        .prop_map(
            |(
                product_type_id,
                material_type_id,
                required_quantity,
                warehouse_quantity,
                parameter1,
                parameter2,
            )| MaterialRequest {
                product_type_id,
                material_type_id,
                required_quantity,
                warehouse_quantity,
                parameter1,
                parameter2,
            },
        )
}

proptest! {
    #[test]
    fn requirement_is_never_negative(request in valid_request()) {
        let result = required_material(&request).unwrap();
        prop_assert!(result >= 0);
    }

    #[test]
    fn covered_demand_needs_no_material(
        mut request in valid_request(),
        surplus in 0..1_000i32,
    ) {
        request.warehouse_quantity = request.required_quantity + surplus;
        prop_assert_eq!(required_material(&request).unwrap(), 0);
    }

    #[test]
    fn requirement_is_monotone_in_required_quantity(
        request in valid_request(),
        bump in 1..1_000i32,
    ) {
        let smaller = required_material(&request).unwrap();

        let mut bigger_request = request.clone();
        bigger_request.required_quantity += bump;
        let bigger = required_material(&bigger_request).unwrap();

        prop_assert!(bigger >= smaller);
    }

    #[test]
    fn requirement_is_monotone_in_parameters(
        request in valid_request(),
        factor in 1.0..4.0f64,
    ) {
        let base = required_material(&request).unwrap();

        let mut scaled = request.clone();
        scaled.parameter1 *= factor;
        let scaled_result = required_material(&scaled).unwrap();

        prop_assert!(scaled_result >= base);
    }

    #[test]
    fn unknown_type_ids_are_always_invalid(
        mut request in valid_request(),
        unknown_product_type in 5..1_000i32,
        unknown_material_type in 6..1_000i32,
    ) {
        let mut bad_product = request.clone();
        bad_product.product_type_id = unknown_product_type;
        prop_assert!(required_material(&bad_product).is_err());

        request.material_type_id = unknown_material_type;
        prop_assert!(required_material(&request).is_err());
    }

    #[test]
    fn availability_is_deterministic_and_positive(
        product_id in 1..10_000i32,
        rating in 0..=100i32,
    ) {
        let first = estimate_available_quantity(product_id, rating);
        let second = estimate_available_quantity(product_id, rating);
        prop_assert_eq!(first, second);
        prop_assert!(first > 0);

        // A rating bonus never shrinks the estimate below the base tier.
        let base = estimate_available_quantity(product_id, 0);
        prop_assert!(first >= base);
    }
}
