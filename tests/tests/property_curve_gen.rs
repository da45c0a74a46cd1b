//! Property-based tests for seed expansion and coefficient generation

use curvegen_algorithms::arith::{bit_length, field_int_from_hex};
use curvegen_algorithms::curve_gen::{expand_seed, CurveGenerator, Seed};
use curvegen_algorithms::Rejection;
use curvegen_params::nist::NIST_P192;
use proptest::prelude::*;

fn p192_generator() -> CurveGenerator {
    let p = field_int_from_hex(NIST_P192.p).unwrap();
    let a = field_int_from_hex(NIST_P192.a).unwrap();
    CurveGenerator::new(&p, &a).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn expansion_fits_bit_length(
        seed in prop::collection::vec(any::<u8>(), 0..=64),
        bits in 1usize..=2048,
    ) {
        let expansion = expand_seed(&Seed::new(seed), bits).unwrap();
        let r = expansion.to_field_int().unwrap();
        prop_assert!(bit_length(&r) < bits);
        prop_assert!(expansion.expanded_bits() >= bits);
        prop_assert_eq!(expansion.blocks(), (bits + 159) / 160);
    }

    #[test]
    fn expansion_is_deterministic(
        seed in prop::collection::vec(any::<u8>(), 1..=32),
        bits in 1usize..=600,
    ) {
        let seed = Seed::new(seed);
        prop_assert_eq!(
            expand_seed(&seed, bits).unwrap(),
            expand_seed(&seed.clone(), bits).unwrap()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn accepted_seeds_satisfy_curve_relation(seed in prop::collection::vec(any::<u8>(), 20)) {
        let generator = p192_generator();
        match generator.generate(&Seed::new(seed)) {
            Ok(coefficients) => {
                prop_assert!(coefficients.satisfies(generator.modulus(), generator.a()));
            }
            Err(e) => {
                // P-192 is prime, so only a non-residue can stop a seed
                prop_assert_eq!(e.rejection(), Some(Rejection::NoSquareRoot));
            }
        }
    }
}
