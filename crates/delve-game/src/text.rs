//! Small text helpers shared by the reply builders.

/// Join parts as an English enumeration.
///
/// Uses a serial comma once three or more parts are involved:
/// `"a"`, `"a and b"`, `"a, b, and c"`.
pub fn enumerate(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        _ => {
            let head = parts[..parts.len() - 1].join(", ");
            format!("{head}, and {}", parts[parts.len() - 1])
        }
    }
}
