mod pagination;
mod product_image;
mod product_table;
mod toolbar;

pub use pagination::Pagination;
pub use product_image::ProductImage;
pub use product_table::ProductTable;
pub use toolbar::Toolbar;
