mod compare;
mod dataset;
mod landing;
mod upload;

pub use compare::render_compare_page;
pub use dataset::render_dataset_page;
pub use landing::render_landing_page;
pub use upload::render_upload_page;
