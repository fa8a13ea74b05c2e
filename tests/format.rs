use format_multiple_errors::{
    format_errors,
    format_multiple_errors,
    ErrorKind,
    ErrorTerm,
    FormatOptions,
    LengthControl,
    Value,
};

const SMALLEST: LengthControl = LengthControl::Smallest;
const CENTRAL: LengthControl = LengthControl::Central;

struct Case {
    value: f64,
    errors: Vec<ErrorTerm>,
}

impl Case {
    fn check(
        &self,
        control: LengthControl,
        abbreviate: bool,
        exponential: bool,
        latex: bool,
        expect: &str,
    ) {
        let opts = FormatOptions::default()
            .length_control(control)
            .abbreviate(abbreviate)
            .exponential(exponential)
            .latex(latex);
        let got = format_multiple_errors(self.value, &self.errors, &opts).unwrap();
        assert_eq!(
            got, expect,
            "{:?} abbreviate={} exponential={} latex={}",
            control, abbreviate, exponential, latex,
        );
    }
}

fn integer() -> Case {
    return Case { value: 12345.0, errors: vec![6789.0.into(), (1011.0, 1213.0).into()] };
}

fn small() -> Case {
    return Case {
        value: 0.0012345,
        errors: vec![0.0006789.into(), (0.0001011, 0.0000121).into()],
    };
}

fn med() -> Case {
    return Case {
        value: 1.2345,
        errors: vec![0.0067.into(), (0.0089, 0.1011).into(), 1.2131.into()],
    };
}

fn large() -> Case {
    return Case { value: 1234.5, errors: vec![6.7.into(), (8.9, 101.1).into()] };
}

fn long_error() -> Case {
    return Case {
        value: 1.2345,
        errors: vec![0.123456789.into(), (0.00987654321, 0.0102030405).into()],
    };
}

#[test]
fn integers_without_decimals() {
    let c = integer();
    c.check(CENTRAL, true, false, true, r"12000(7000)({}^{1000}_{1000})");
    c.check(CENTRAL, true, false, false, "12000(7000)(+1000/-1000)");
    c.check(CENTRAL, false, false, true, r"12000 \pm 7000 {}^{+1000}_{-1000}");
    c.check(CENTRAL, false, false, false, "12000 ± 7000 (+1000 / -1000)");
    c.check(SMALLEST, true, false, true, r"12300(6800)({}^{1000}_{1200})");
    c.check(SMALLEST, true, false, false, "12300(6800)(+1000/-1200)");
    c.check(SMALLEST, false, false, true, r"12300 \pm 6800 {}^{+1000}_{-1200}");
    c.check(SMALLEST, false, false, false, "12300 ± 6800 (+1000 / -1200)");
}

#[test]
fn integers_with_more_figures() {
    let c = integer();
    let opts = FormatOptions::default().significant_figures(4).abbreviate(true);
    assert_eq!(
        format_multiple_errors(c.value, &c.errors, &opts).unwrap(),
        "12345(6789)(+1011/-1213)",
    );
    assert_eq!(
        format_errors!(12345, 12, (3456, 789); abbreviate: true).unwrap(),
        "12345(12)(+3456/-789)",
    );
}

#[test]
fn decimals_small() {
    let c = small();
    c.check(CENTRAL, true, false, true, r"0.0012(7)({}^{1}_{0})");
    c.check(CENTRAL, false, false, true, r"0.0012 \pm 0.0007 {}^{+0.0001}_{-0.0}");
    c.check(CENTRAL, true, false, false, "0.0012(7)(+1/-0)");
    c.check(CENTRAL, false, false, false, "0.0012 ± 0.0007 (+0.0001 / -0.0)");
    c.check(SMALLEST, true, false, true, r"0.001234(679)({}^{101}_{12})");
    c.check(SMALLEST, false, false, true, r"0.001234 \pm 0.000679 {}^{+0.000101}_{-0.000012}");
    c.check(SMALLEST, true, false, false, "0.001234(679)(+101/-12)");
    c.check(SMALLEST, false, false, false, "0.001234 ± 0.000679 (+0.000101 / -0.000012)");
}

#[test]
fn decimals_large() {
    let c = large();
    c.check(CENTRAL, true, false, true, r"1200(0)({}^{0}_{100})");
    c.check(CENTRAL, false, false, true, r"1200 \pm 0 {}^{+0}_{-100}");
    c.check(CENTRAL, true, false, false, "1200(0)(+0/-100)");
    c.check(CENTRAL, false, false, false, "1200 ± 0 (+0 / -100)");
    c.check(SMALLEST, true, false, true, r"1234.5(6.7)({}^{8.9}_{101.1})");
    c.check(SMALLEST, false, false, true, r"1234.5 \pm 6.7 {}^{+8.9}_{-101.1}");
    c.check(SMALLEST, true, false, false, "1234.5(6.7)(+8.9/-101.1)");
    c.check(SMALLEST, false, false, false, "1234.5 ± 6.7 (+8.9 / -101.1)");
}

#[test]
fn exponential_small() {
    let c = small();
    c.check(CENTRAL, true, true, true, r"1.2(7)({}^{1}_{0}) \times 10^{-3}");
    c.check(CENTRAL, false, true, true, r"(1.2 \pm 0.7 {}^{+0.1}_{-0.0}) \times 10^{-3}");
    c.check(CENTRAL, true, true, false, "1.2(7)(+1/-0)e-3");
    c.check(CENTRAL, false, true, false, "(1.2 ± 0.7 (+0.1 / -0.0))e-3");
    c.check(SMALLEST, true, true, true, r"1.234(679)({}^{101}_{12}) \times 10^{-3}");
    c.check(SMALLEST, false, true, true, r"(1.234 \pm 0.679 {}^{+0.101}_{-0.012}) \times 10^{-3}");
    c.check(SMALLEST, true, true, false, "1.234(679)(+101/-12)e-3");
    c.check(SMALLEST, false, true, false, "(1.234 ± 0.679 (+0.101 / -0.012))e-3");
}

#[test]
fn exponential_med() {
    let c = med();
    c.check(CENTRAL, true, true, true, r"1.2(0)({}^{0}_{1})(1.2)");
    c.check(CENTRAL, false, true, true, r"1.2 \pm 0.0 {}^{+0.0}_{-0.1} \pm 1.2");
    c.check(CENTRAL, true, true, false, "1.2(0)(+0/-1)(1.2)");
    c.check(CENTRAL, false, true, false, "1.2 ± 0.0 (+0.0 / -0.1) ± 1.2");
    c.check(SMALLEST, true, true, true, r"1.2345(67)({}^{89}_{1011})(1.2131)");
    c.check(SMALLEST, false, true, true, r"1.2345 \pm 0.0067 {}^{+0.0089}_{-0.1011} \pm 1.2131");
    c.check(SMALLEST, true, true, false, "1.2345(67)(+89/-1011)(1.2131)");
    c.check(SMALLEST, false, true, false, "1.2345 ± 0.0067 (+0.0089 / -0.1011) ± 1.2131");
}

#[test]
fn exponential_large() {
    let c = large();
    c.check(CENTRAL, true, true, true, r"1.2(0)({}^{0}_{1}) \times 10^{3}");
    c.check(CENTRAL, false, true, true, r"(1.2 \pm 0.0 {}^{+0.0}_{-0.1}) \times 10^{3}");
    c.check(CENTRAL, true, true, false, "1.2(0)(+0/-1)e3");
    c.check(CENTRAL, false, true, false, "(1.2 ± 0.0 (+0.0 / -0.1))e3");
    c.check(SMALLEST, true, true, true, r"1.2345(67)({}^{89}_{1011}) \times 10^{3}");
    c.check(SMALLEST, false, true, true, r"(1.2345 \pm 0.0067 {}^{+0.0089}_{-0.1011}) \times 10^{3}");
    c.check(SMALLEST, true, true, false, "1.2345(67)(+89/-1011)e3");
    c.check(SMALLEST, false, true, false, "(1.2345 ± 0.0067 (+0.0089 / -0.1011))e3");
}

#[test]
fn long_errors() {
    let c = long_error();
    c.check(CENTRAL, true, false, true, r"1.2(1)({}^{0}_{0})");
    c.check(CENTRAL, false, false, true, r"1.2 \pm 0.1 {}^{+0.0}_{-0.0}");
    c.check(CENTRAL, true, false, false, "1.2(1)(+0/-0)");
    c.check(CENTRAL, false, false, false, "1.2 ± 0.1 (+0.0 / -0.0)");
    c.check(SMALLEST, true, false, true, r"1.2345(1235)({}^{99}_{102})");
    c.check(SMALLEST, false, false, true, r"1.2345 \pm 0.1235 {}^{+0.0099}_{-0.0102}");
    c.check(SMALLEST, true, false, false, "1.2345(1235)(+99/-102)");
    c.check(SMALLEST, false, false, false, "1.2345 ± 0.1235 (+0.0099 / -0.0102)");
}

#[test]
fn rounding_across_power_of_ten() {
    let cases: [(f64, u32, &str); 6] = [
        (0.0999, 2, "1.00(10)"),
        (0.09999, 3, "1.000(100)"),
        (0.099999, 4, "1.0000(1000)"),
        (0.0999999, 5, "1.00000(10000)"),
        (0.09999999, 6, "1.000000(100000)"),
        (0.099999999999, 10, "1.0000000000(1000000000)"),
    ];
    for (error, sf, expect) in cases {
        let opts = FormatOptions::default().significant_figures(sf).abbreviate(true);
        assert_eq!(format_multiple_errors(1.0, &[error.into()], &opts).unwrap(), expect);
    }
}

#[test]
fn built_in_uncertainties() {
    let opts = FormatOptions::default().abbreviate(true);
    assert_eq!(
        format_multiple_errors(
            Value::with_std_dev(1.234, 0.012), &[(0.034, 0.056).into()], &opts,
        ).unwrap(),
        "1.234(12)(+34/-56)",
    );
    assert_eq!(
        format_multiple_errors(
            Value::with_computed_error(1.0, 0.036), &[(0.034, 0.056).into()], &opts,
        ).unwrap(),
        "1.000(36)(+34/-56)",
    );
}

#[test]
fn uncomputed_uncertainty_fails() {
    let err = format_multiple_errors(
        Value::with_computed_error(1.0, 0.0), &[], &FormatOptions::default(),
    ).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionNotMet);
}

#[test]
fn zero_errors() {
    assert_eq!(
        format_errors!(0.001234, 0.000056, (0.0, 0.000789); abbreviate: true).unwrap(),
        "0.001234(56)(+0/-789)",
    );
    assert_eq!(
        format_errors!(0.001234, 0; significant_figures: 3).unwrap(),
        "0.00123 ± 0.0",
    );
    assert_eq!(format_errors!(0, 0; significant_figures: 1).unwrap(), "0 ± 0");
    assert_eq!(format_errors!(1, 0; significant_figures: 1).unwrap(), "1 ± 0");
}

#[test]
fn very_small_error() {
    assert_eq!(
        format_errors!(
            1234.5, 0.1;
            length_control: CENTRAL,
            significant_figures: 4,
        ).unwrap(),
        "1234 ± 0",
    );
}

#[test]
fn invalid_length_control() {
    let err = "foobar".parse::<LengthControl>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn no_errors_at_all() {
    assert_eq!(format_errors!(3.14159).unwrap(), "3.1");
    assert_eq!(format_errors!(3.14159; significant_figures: 4).unwrap(), "3.142");
    let err = format_errors!(0.0; exponential: true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Degenerate);
}

#[test]
fn rounding_promotes_value_to_integer() {
    assert_eq!(format_errors!(9.96, 0.0).unwrap(), "10 ± 0");
}

#[test]
fn negative_value() {
    assert_eq!(format_errors!(-3.14159, 0.0123).unwrap(), "-3.142 ± 0.012");
    assert_eq!(format_errors!(-0.5, 0.012; abbreviate: true).unwrap(), "-0.500(12)");
}

#[test]
fn zero_value_exponential() {
    assert_eq!(
        format_errors!(0.0, 0.01, (0.123, 0.234), 0.49; exponential: true).unwrap(),
        "(0.00 ± 0.10 (+1.23 / -2.34) ± 4.90)e-1",
    );
}

#[test]
fn order_is_preserved() {
    assert_eq!(
        format_errors!(3.141, (0.026, 0.535), 0.059; abbreviate: true).unwrap(),
        "3.141(+26/-535)(59)",
    );
}
