//! Published seeds and coefficients of the NIST prime curves
//!
//! Values are taken from FIPS 186-4, Appendix D.1.2. All fields are upper-case
//! big-endian hex. `r` is the SHA-1 derived value printed next to each seed and
//! `b` is the coefficient NIST selected, which may be either root of r·b² ≡ a³.

/// Seed vector for one curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSeedVector {
    /// Curve name
    pub name: &'static str,
    /// Bit length of the prime modulus
    pub field_bits: usize,
    /// Published seed
    pub seed: &'static str,
    /// Prime modulus p
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Seed-derived value r
    pub r: &'static str,
}

/// NIST P-192
pub const NIST_P192: CurveSeedVector = CurveSeedVector {
    name: "P-192",
    field_bits: 192,
    seed: "3045AE6FC8422F64ED579528D38120EAE12196D5",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    r: "3099D2BBBFCB2538542DCD5FB078B6EF5F3D6FE2C745DE65",
};

/// NIST P-224
pub const NIST_P224: CurveSeedVector = CurveSeedVector {
    name: "P-224",
    field_bits: 224,
    seed: "BD71344799D5C7FCDC45B59FA3B9AB8F6A948BC5",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    r: "5B056C7E11DD68F40469EE7F3C7A7D74F7D121116506D031218291FB",
};

/// NIST P-256
pub const NIST_P256: CurveSeedVector = CurveSeedVector {
    name: "P-256",
    field_bits: 256,
    seed: "C49D360886E704936A6678E1139D26B7819F7E90",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    r: "7EFBA1662985BE9403CB055C75D4F7E0CE8D84A9C5114ABCAF3177680104FA0D",
};

/// NIST P-384
pub const NIST_P384: CurveSeedVector = CurveSeedVector {
    name: "P-384",
    field_bits: 384,
    seed: "A335926AA319A27A1D00896A6773A4827ACDAC73",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    r: "79D1E655F868F02FFF48DCDEE14151DDB80643C1406D0CA10DFE6FC52009540A495E8042EA5F744F6E184667CC722483",
};

/// NIST P-521
pub const NIST_P521: CurveSeedVector = CurveSeedVector {
    name: "P-521",
    field_bits: 521,
    seed: "D09E8800291CB85396CC6717393284AAA0DA64BA",
    p: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
    b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    r: "00B48BFA5F420A34949539D2BDFC264EEEEB077688E44FBF0AD8F6D0EDB37BD6B533281000518E19F1B9FFBE0FE9ED8A3C2200B8F875E523868C70C1E5BF55BAD637",
};

/// All published prime-curve vectors, smallest field first
pub const NIST_PRIME_CURVES: [CurveSeedVector; 5] =
    [NIST_P192, NIST_P224, NIST_P256, NIST_P384, NIST_P521];
