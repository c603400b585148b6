//! SFINAE-constraint lifting (spec.md §4.2.6): rewrites a
//! `std::enable_if`-gated template parameter into a readable
//! `FunctionInfo::lifted_constraint` string so the renderer can show a
//! `requires` clause instead of raw SFINAE.

/// Detects the `std::enable_if<Cond, T>::type` pattern in a textual
/// template-parameter default and, if found, returns a readable
/// constraint string (e.g. `requires Cond`) to attach as a function's
/// `lifted_constraint`. Returns `None` for anything that isn't
/// recognizably SFINAE.
pub fn lift_sfinae_constraint(template_param_default: &str) -> Option<String> {
    let needle = "enable_if";
    let start = template_param_default.find(needle)?;
    let after = &template_param_default[start + needle.len()..];
    let open = after.find('<')?;
    let inner = &after[open + 1..];
    let depth_end = matching_angle_bracket_end(inner)?;
    let args = &inner[..depth_end];
    let cond = args.split(',').next()?.trim();
    if cond.is_empty() {
        None
    } else {
        Some(format!("requires {cond}"))
    }
}

fn matching_angle_bracket_end(s: &str) -> Option<usize> {
    let mut depth = 1i32;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifts_simple_enable_if_condition() {
        let constraint =
            lift_sfinae_constraint("std::enable_if_t<std::is_integral<T>::value, int>").unwrap();
        assert_eq!(constraint, "requires std::is_integral<T>::value");
    }

    #[test]
    fn non_sfinae_default_yields_none() {
        assert!(lift_sfinae_constraint("int").is_none());
    }
}
