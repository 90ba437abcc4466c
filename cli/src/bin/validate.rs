use std::process;

use json_workload::{validate_file, Shape, DEFAULT_PATH};
use log::error;

fn main() {
    json_workload_cli::init_logger();

    match validate_file(DEFAULT_PATH, Shape::default()) {
        Ok(_) => process::exit(0),
        Err(e) => {
            error!("Validation of {} failed: {}", DEFAULT_PATH, e);
            process::exit(1)
        }
    }
}
