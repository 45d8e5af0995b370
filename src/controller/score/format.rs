/// Golf-style signed rendering: `+N` over par, `E` for even, `-N` under.
#[must_use]
pub fn format_signed<T: Into<i64>>(n: T) -> String {
    match n.into() {
        n if n > 0 => format!("+{n}"),
        0 => "E".to_string(),
        n => n.to_string(),
    }
}

/// Score column for a cut or withdrawn player. Even is left as `0`.
#[must_use]
pub fn format_cut_score(n: i32) -> String {
    if n > 0 {
        format!("+{n}")
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_formatting() {
        assert_eq!(format_signed(8), "+8");
        assert_eq!(format_signed(0), "E");
        assert_eq!(format_signed(-3), "-3");
    }

    #[test]
    fn cut_score_keeps_zero_numeric() {
        assert_eq!(format_cut_score(9), "+9");
        assert_eq!(format_cut_score(0), "0");
        assert_eq!(format_cut_score(-1), "-1");
    }
}
