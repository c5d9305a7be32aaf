pub mod availability;
pub mod catalog;
pub mod material_calc;
pub mod order_draft;
pub mod orders;

pub use availability::estimate_available_quantity;
pub use catalog::CatalogService;
pub use material_calc::{required_material, MaterialRequest};
pub use order_draft::{AddItemInput, DraftItem, OrderDraft};
pub use orders::{OrderService, OrderWithItems};
