use std::process;

use json_workload::{generate, write, Format, Shape, DEFAULT_PATH};
use log::error;

fn main() {
    json_workload_cli::init_logger();

    let document = generate(Shape::default());

    match write(DEFAULT_PATH, &document, Format::Pretty) {
        Ok(_) => process::exit(0),
        Err(e) => {
            error!("Failed to write {}: {}", DEFAULT_PATH, e);
            process::exit(1)
        }
    }
}
