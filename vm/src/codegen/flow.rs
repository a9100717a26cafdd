use super::lines;

pub fn label(name: &str) -> Vec<String> {
    vec![format!("({})", name)]
}

pub fn goto(name: &str) -> Vec<String> {
    vec![format!("@{}", name), "0;JMP".to_string()]
}

/// Pop the top of stack and jump if it is non-zero.
pub fn if_goto(name: &str) -> Vec<String> {
    let mut code = lines(&["@SP", "AM=M-1", "D=M"]);
    code.push(format!("@{}", name));
    code.push("D;JNE".to_string());
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates() {
        assert_eq!(label("LOOP"), vec!["(LOOP)"]);
        assert_eq!(goto("LOOP"), vec!["@LOOP", "0;JMP"]);
        assert_eq!(
            if_goto("LOOP"),
            vec!["@SP", "AM=M-1", "D=M", "@LOOP", "D;JNE"]
        );
    }
}
