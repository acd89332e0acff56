#![no_main]

use libfuzzer_sys::fuzz_target;
use novault_core::SecretInput;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a candidate mnemonic phrase. The parser must always
    // return Ok or Err, never panic, since this is the login input path.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = SecretInput::mnemonic(s);
    }
});
