//! Subcommand bodies for `tamiltool`. Each prints to stdout and exits with
//! status 1 on failure.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod accuracy_ops;
pub mod config_ops;
pub mod convert_ops;
pub mod table_ops;

use std::fs;

use tamil_core::mapping::MappingTable;

/// Embedded Tamil table, or the table in `mapping_file` when given.
pub fn load_table(mapping_file: Option<&str>) -> MappingTable {
    match mapping_file {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(MappingTable::from_toml(&content), "Error in {file}: {}")
        }
        None => MappingTable::tamil(),
    }
}
