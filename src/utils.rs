pub mod code_file_path;
pub mod code_suffix;
pub mod csv_rows;
pub mod dedup_by_code;
pub mod find_char_position;
pub mod generate_record_id;

pub use code_file_path::code_file_path;
pub use code_suffix::code_suffix;
pub use csv_rows::{ensure_csv_file, read_csv_rows, write_csv_rows};
pub use dedup_by_code::dedup_by_code;
pub use find_char_position::find_char_position;
pub use generate_record_id::generate_record_id;
