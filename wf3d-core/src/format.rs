/// General-number formatting for node labels
use nalgebra::Vector3;

/// Significant digits used by [`format_general`].
const PRECISION: i32 = 6;

/// Format a float like C's `%g`: six significant digits, trailing zeros
/// dropped, scientific notation when the exponent is below -4 or at least
/// six.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Round to the target precision first; the exponent can move (9.999995 -> 1e+01).
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Label text for a node: `(x,y,z)` with each coordinate in `%g` form.
pub fn node_label(node: &Vector3<f64>) -> String {
    format!(
        "({},{},{})",
        format_general(node.x),
        format_general(node.y),
        format_general(node.z)
    )
}
