use cmc_drv::main_impl;

fn main() {
    if let Err(e) = main_impl() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
