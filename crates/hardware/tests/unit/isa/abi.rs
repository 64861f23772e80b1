//! # ABI Name Tests

use mipsx_core::isa::abi;

#[test]
fn test_names_of_well_known_registers() {
    assert_eq!(abi::name(abi::REG_ZERO), "$zero");
    assert_eq!(abi::name(abi::REG_V0), "$v0");
    assert_eq!(abi::name(abi::REG_A0), "$a0");
    assert_eq!(abi::name(abi::REG_T0), "$t0");
    assert_eq!(abi::name(abi::REG_S0), "$s0");
    assert_eq!(abi::name(abi::REG_SP), "$sp");
    assert_eq!(abi::name(abi::REG_RA), "$ra");
    assert_eq!(abi::name(32), "$?");
}

#[test]
fn test_index_accepts_abi_and_numeric_names() {
    assert_eq!(abi::index("$t2"), Some(abi::REG_T2));
    assert_eq!(abi::index("$9"), Some(abi::REG_T1));
    assert_eq!(abi::index("$s8"), Some(30));
    assert_eq!(abi::index("$fp"), Some(30));
    assert_eq!(abi::index("$32"), None);
    assert_eq!(abi::index("t0"), None);
}

#[test]
fn test_name_index_agree() {
    for i in 0..32 {
        assert_eq!(abi::index(abi::name(i)), Some(i));
    }
}
