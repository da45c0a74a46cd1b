// tests/tests/nist_vector_tests.rs
use curvegen_algorithms::arith::{bit_length, field_int_from_hex};
use curvegen_algorithms::curve_gen::{expand_seed, Seed};
use curvegen_algorithms::{generate_with_default_a, Modulus};
use curvegen_params::nist::{NIST_P192, NIST_P256, NIST_P521, NIST_PRIME_CURVES};
use curvegen_tests::suites::nist_vectors::{run_all, run_vector};

#[test]
fn test_all_nist_prime_curves() {
    run_all(&NIST_PRIME_CURVES).expect("NIST vectors failed");
}

#[test]
fn test_modulus_width_matches_field_bits() {
    for vector in NIST_PRIME_CURVES {
        let p = field_int_from_hex(vector.p).unwrap();
        assert_eq!(bit_length(&p), vector.field_bits, "{}", vector.name);
        assert_eq!(Modulus::new(p).unwrap().bits(), vector.field_bits);
    }
}

#[test]
fn test_coefficients_satisfy_curve_relation() {
    for vector in [NIST_P192, NIST_P256] {
        let coefficients = run_vector(&vector).unwrap();
        let modulus = Modulus::new(field_int_from_hex(vector.p).unwrap()).unwrap();
        let a = field_int_from_hex(vector.a).unwrap();
        assert!(coefficients.satisfies(&modulus, &a), "{}", vector.name);
    }
}

#[test]
fn test_nist_a_is_default_a() {
    // Every NIST prime curve uses a = p - 3
    for vector in [NIST_P192, NIST_P256] {
        let p = field_int_from_hex(vector.p).unwrap();
        let seed = Seed::from_hex(vector.seed).unwrap();
        let b = field_int_from_hex(vector.b).unwrap();
        let coefficients = generate_with_default_a(&p, &seed).unwrap();
        assert!(coefficients.contains_b(&b), "{}", vector.name);
    }
}

#[test]
fn test_p521_leading_zero_block() {
    // L = 521 gives h = 41, so W0 is 6 bytes with its top 8 bits cleared
    let p = field_int_from_hex(NIST_P521.p).unwrap();
    let bits = bit_length(&p);
    assert_eq!(bits, 521);

    let seed = Seed::from_hex(NIST_P521.seed).unwrap();
    let expansion = expand_seed(&seed, bits).unwrap();
    assert_eq!(expansion.blocks(), 4);
    assert_eq!(expansion.as_bytes().len(), 6 + 3 * 20);
    assert_eq!(expansion.as_bytes()[0], 0);
    assert_eq!(
        expansion.to_field_int().unwrap(),
        field_int_from_hex(NIST_P521.r).unwrap()
    );
}
