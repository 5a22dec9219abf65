use jsbuiltin::{Bridge, Realm, RealmOptions, Value};

fn check_is_finite(realm: &Realm, value: Value, expected: bool) {
    let js = Bridge::new(realm);
    assert_eq!(js.is_finite(&value), expected, "isFinite({value:?})");
}

fn check_is_nan(realm: &Realm, value: Value, expected: bool) {
    let js = Bridge::new(realm);
    assert_eq!(js.is_nan(&value), expected, "isNaN({value:?})");
}

// ============================================================================
// isFinite
// ============================================================================

#[test]
fn is_finite_numbers_and_numeric_strings() {
    let realm = Realm::new();
    check_is_finite(&realm, 123.into(), true);
    check_is_finite(&realm, (-1.23).into(), true);
    check_is_finite(&realm, (5 - 2).into(), true);
    check_is_finite(&realm, 0.into(), true);
    check_is_finite(&realm, "123".into(), true);
}

#[test]
fn is_finite_rejects_non_numeric_strings() {
    let realm = Realm::new();
    check_is_finite(&realm, "Hello".into(), false);
    check_is_finite(&realm, "2005/12/12".into(), false);
}

#[test]
fn is_finite_rejects_infinities_and_nan() {
    let realm = Realm::new();
    check_is_finite(&realm, f64::INFINITY.into(), false);
    check_is_finite(&realm, f64::NEG_INFINITY.into(), false);
    check_is_finite(&realm, f64::NAN.into(), false);
    check_is_finite(&realm, "Infinity".into(), false);
    check_is_finite(&realm, "-Infinity".into(), false);
    check_is_finite(&realm, "1e400".into(), false);
}

#[test]
fn is_finite_coerces_sentinels_and_booleans() {
    let realm = Realm::new();
    check_is_finite(&realm, Value::Null, true);
    check_is_finite(&realm, Value::Undefined, false);
    check_is_finite(&realm, true.into(), true);
    check_is_finite(&realm, false.into(), true);
}

#[test]
fn is_finite_string_grammar() {
    let realm = Realm::new();
    for numeric in ["", "   ", " 42 ", "\t\n12\r\n", "\u{FEFF}7", "\u{3000}8\u{2028}", "1.", ".5", "+5", "-0", "1e3", "0x1F", "0o17", "0b11"] {
        check_is_finite(&realm, numeric.into(), true);
    }
    for junk in ["inf", "infinity", "NaN", "nan", "1_000", "12px", "0x", "0xG", "-0x10", "1e", ".", "+-1", "\u{0085}5", "Infinityx"] {
        check_is_finite(&realm, junk.into(), false);
    }
}

#[test]
fn is_finite_unwraps_boxed_primitives() {
    let mut realm = Realm::new();
    let number_ctor = realm.global("Number");
    let string_ctor = realm.global("String");
    let boxed_number = realm.construct(&number_ctor, &[42.into()]).unwrap();
    let boxed_numeric_string = realm.construct(&string_ctor, &["12".into()]).unwrap();
    let boxed_word = realm.construct(&string_ctor, &["twelve".into()]).unwrap();

    check_is_finite(&realm, boxed_number, true);
    check_is_finite(&realm, boxed_numeric_string, true);
    check_is_finite(&realm, boxed_word, false);
}

#[test]
fn is_finite_objects_and_functions_are_not_numbers() {
    let mut realm = Realm::new();
    let obj = realm.new_object();
    let func = realm.new_function("f");
    check_is_finite(&realm, obj, false);
    check_is_finite(&realm, func, false);
    check_is_finite(&realm, realm.global_object(), false);
}

#[test]
fn is_finite_symbol_is_false_not_an_error() {
    let mut realm = Realm::new();
    let sym = realm.new_symbol(Some("foo")).unwrap();
    check_is_finite(&realm, sym, false);
}

// ============================================================================
// isNaN
// ============================================================================

#[test]
fn is_nan_numbers_and_numeric_strings() {
    let realm = Realm::new();
    check_is_nan(&realm, 123.into(), false);
    check_is_nan(&realm, (-1.23).into(), false);
    check_is_nan(&realm, (5 - 2).into(), false);
    check_is_nan(&realm, 0.into(), false);
    check_is_nan(&realm, "123".into(), false);
}

#[test]
fn is_nan_non_numeric_strings() {
    let realm = Realm::new();
    check_is_nan(&realm, "Hello".into(), true);
    check_is_nan(&realm, "2005/12/12".into(), true);
}

#[test]
fn is_nan_infinity_is_a_number() {
    let realm = Realm::new();
    check_is_nan(&realm, f64::INFINITY.into(), false);
    check_is_nan(&realm, "Infinity".into(), false);
    check_is_nan(&realm, f64::NAN.into(), true);
    check_is_nan(&realm, realm.global("NaN"), true);
}

#[test]
fn is_nan_sentinels() {
    let realm = Realm::new();
    check_is_nan(&realm, Value::Undefined, true);
    check_is_nan(&realm, Value::Null, false);
    check_is_nan(&realm, None::<f64>.into(), false);
}

#[test]
fn is_nan_symbol_and_objects() {
    let mut realm = Realm::new();
    let sym = realm.new_symbol(None).unwrap();
    let obj = realm.new_object();
    let boolean_ctor = realm.global("Boolean");
    let boxed_true = realm.construct(&boolean_ctor, &[true.into()]).unwrap();
    check_is_nan(&realm, sym, true);
    check_is_nan(&realm, obj, true);
    check_is_nan(&realm, boxed_true, false);
}

#[test]
fn coercion_does_not_depend_on_symbol_support() {
    let realm = Realm::with_options(RealmOptions::default().with_symbols(false));
    check_is_finite(&realm, "123".into(), true);
    check_is_nan(&realm, "Hello".into(), true);
}
