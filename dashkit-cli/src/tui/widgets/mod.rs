pub mod date_picker;
pub mod text_input;
pub mod virtual_list;

pub use date_picker::{DatePicker, DatePickerResult};
pub use text_input::TextInput;
pub use virtual_list::VirtualList;
