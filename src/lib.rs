pub mod utils;
pub use utils::utils as other_utils;
pub mod list;
pub use list::c_list as other_c_list;
pub use list::list as other_list;
