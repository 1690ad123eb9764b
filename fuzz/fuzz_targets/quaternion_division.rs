#![no_main]

use libfuzzer_sys::fuzz_target;
use omm_math::quaternion::fuzzing::{ArbitraryQuaternion, fuzz_test_quaternion_division};

fuzz_target!(|input: (ArbitraryQuaternion, ArbitraryQuaternion)| {
    fuzz_test_quaternion_division(input);
});
