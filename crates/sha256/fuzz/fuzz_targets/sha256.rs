#![no_main]

use libfuzzer_sys::fuzz_target;
use sha256::{Sha256, to_hex};

fuzz_target!(|data: &[u8]| {
  let ours = Sha256::digest(data);

  use sha2::Digest as _;
  let ref_out = sha2::Sha256::digest(data);
  let mut expected = [0u8; 32];
  expected.copy_from_slice(&ref_out);

  assert_eq!(ours, expected);
  assert_eq!(sha256::hash(data), expected);
  assert!(to_hex(&ours).as_str().bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
});
