pub mod number;
pub mod text;
pub mod time;

pub use number::{format_axis_value, format_change, format_count};
pub use text::{pad_left, pad_right, truncate};
pub use time::{format_date, format_updated_at};
