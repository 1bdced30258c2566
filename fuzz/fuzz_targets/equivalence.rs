//! Table and bitwise strategies must agree for arbitrary parameters.
//!
//! The first 14 bytes select the parameters; the rest is the message.

#![no_main]

use checksum::{AnyCrc, __internal::reference};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let Some((header, message)) = data.split_first_chunk::<14>() else {
    return;
  };

  let width = [8u8, 16, 32][usize::from(header[0] % 3)];
  let word = |i: usize| u32::from_le_bytes([header[i], header[i + 1], header[i + 2], header[i + 3]]);
  let poly = word(1);
  let init = word(5);
  let xorout = word(9);
  let refin = header[13] & 1 != 0;
  let refout = header[13] & 2 != 0;

  let lut = AnyCrc::new(width, poly, init, refin, refout, xorout, true).unwrap();
  let bit = AnyCrc::new(width, poly, init, refin, refout, xorout, false).unwrap();

  let got = lut.calculate(message);
  assert_eq!(
    got,
    bit.calculate(message),
    "strategy mismatch: width={width} poly={poly:#x} refin={refin} refout={refout} len={}",
    message.len()
  );
  assert_eq!(got, reference::compute(&lut.params(), message), "reference mismatch");
});
