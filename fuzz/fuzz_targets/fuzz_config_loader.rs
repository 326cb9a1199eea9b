#![no_main]

use ariss_clock::clock::ContactClockEngine;
use ariss_clock::config::ConfigLoader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        let loader = ConfigLoader::with_defaults();

        // Anything the loader accepts must also be accepted by the engine.
        if let Ok(loaded) = loader.load_from_str(yaml_str) {
            assert!(ContactClockEngine::from_config(&loaded.config).is_ok());
        }
    }
});
