#![no_main]

use libfuzzer_sys::fuzz_target;
use omm_math::vector::fuzzing::{ArbitraryRealVector, fuzz_test_vector_arithmetic};

fuzz_target!(|input: (ArbitraryRealVector, ArbitraryRealVector)| {
    fuzz_test_vector_arithmetic(input);
});
