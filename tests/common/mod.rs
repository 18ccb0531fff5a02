use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Info)
            .filter_module("int_key_hashmap", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();
        // Another test binary may have installed a logger already.
        let _ = builder.try_init();
    });
}
