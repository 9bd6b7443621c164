pub mod about;
pub mod category_compare;
pub mod category_info;
pub mod category_picker;

pub use about::render_about_window;
pub use category_compare::render_category_compare_window;
pub use category_info::render_category_window;
pub use category_picker::render_category_picker;
